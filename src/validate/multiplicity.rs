/// A parsed multiplicity bound: a concrete non-negative integer, or `*`
/// (unbounded — only legal on the upper bound).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Finite(u64),
    Unbounded,
}

/// Parse one multiplicity bound literal (Pass 4, spec.md §4.D).
///
/// `None` means malformed: anything other than `*` or a base-10
/// non-negative integer, including empty strings, signs, and decimals.
pub fn parse_bound(text: &str) -> Option<Bound> {
    if text == "*" {
        return Some(Bound::Unbounded);
    }
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u64>().ok().map(Bound::Finite)
}

/// `true` iff `lower..=upper` is a non-empty range — `*` upper is always
/// satisfied, `lower > upper` (both finite) never is.
pub fn bounds_are_consistent(lower: Bound, upper: Bound) -> bool {
    match (lower, upper) {
        (Bound::Finite(l), Bound::Finite(u)) => l <= u,
        (_, Bound::Unbounded) => true,
        (Bound::Unbounded, Bound::Finite(_)) => false,
    }
}
