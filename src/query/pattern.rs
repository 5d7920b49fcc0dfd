/// One `::`-delimited segment of a compiled [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `*` — matches exactly one segment.
    Single,
    /// `**` — matches zero or more segments.
    Recursive,
}

/// A compiled qualified-id pattern (spec.md §4.F "Pattern grammar"): a
/// sequence of `::`-separated segments where `*` stands for exactly one
/// name and `**` for any run of names, including none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern(Vec<Segment>);

impl Pattern {
    /// Compile a pattern string. An empty pattern matches only the root
    /// (empty) id.
    pub fn parse(pattern: &str) -> Self {
        if pattern.is_empty() {
            return Pattern(Vec::new());
        }
        let segments = pattern
            .split("::")
            .map(|s| match s {
                "*" => Segment::Single,
                "**" => Segment::Recursive,
                other => Segment::Literal(other.to_string()),
            })
            .collect();
        Pattern(segments)
    }

    /// `true` iff `id` matches this pattern.
    pub fn matches(&self, id: &str) -> bool {
        let path = crate::qualified_id::segments(id);
        match_from(&self.0, &path)
    }
}

fn match_from(pattern: &[Segment], path: &[&str]) -> bool {
    match pattern.first() {
        None => path.is_empty(),
        Some(Segment::Literal(lit)) => match path.split_first() {
            Some((head, tail)) if head == lit => match_from(&pattern[1..], tail),
            _ => false,
        },
        Some(Segment::Single) => match path.split_first() {
            Some((_, tail)) => match_from(&pattern[1..], tail),
            None => false,
        },
        Some(Segment::Recursive) => {
            // Try consuming zero segments first (so a trailing `**`
            // matches the exact prefix too), then progressively more.
            if match_from(&pattern[1..], path) {
                return true;
            }
            match path.split_first() {
                Some((_, tail)) => match_from(pattern, tail),
                None => false,
            }
        }
    }
}

/// `true` iff `id` matches at least one of `patterns` (spec.md §4.F
/// `matches_any`).
pub fn matches_any(patterns: &[Pattern], id: &str) -> bool {
    patterns.iter().any(|p| p.matches(id))
}
