//! Levenshtein edit distance, used by [`crate::symtab::SymbolTable::find_similar`]
//! (Pass 2/6 "did you mean?" suggestions) and the modifier's
//! `find_similar_scopes` helper (spec.md §4.C, §4.F).

use std::cmp::min;

/// Edit distance between two strings, counted in chars (not bytes) so
/// multi-byte identifiers aren't penalized for their UTF-8 encoding
/// length.
pub fn lev_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = min(min(curr[j] + 1, prev[j + 1] + 1), prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// The spec's sliding distance threshold: 1 if `|name| < 4`, 2 if
/// `|name| <= 8`, else 3 (spec.md §4.C, `find_similar`).
pub fn max_allowed_distance(name: &str) -> usize {
    let len = name.chars().count();
    if len < 4 {
        1
    } else if len <= 8 {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_zero_distance() {
        assert_eq!(lev_distance("Engine", "Engine"), 0);
    }

    #[test]
    fn one_edit_away() {
        assert_eq!(lev_distance("Enginne", "Engine"), 1);
    }

    #[test]
    fn empty_strings() {
        assert_eq!(lev_distance("", "abc"), 3);
        assert_eq!(lev_distance("abc", ""), 3);
    }

    #[test]
    fn threshold_scales_with_length() {
        assert_eq!(max_allowed_distance("Foo"), 1);
        assert_eq!(max_allowed_distance("Engine"), 2);
        assert_eq!(max_allowed_distance("Engine12345"), 3);
    }
}
