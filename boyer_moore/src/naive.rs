//! Brute-force reference search.

/// Check every alignment of `pattern` against `text`. Same contract as
/// [`crate::find_all`], except that an empty pattern simply has no matches.
pub fn find_all(text: &[u8], pattern: &[u8], limit: Option<usize>) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, w)| *w == pattern)
        .map(|(i, _)| i)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive() {
        assert_eq!(find_all(b"AAAA", b"AA", None), vec![0, 1, 2]);
        assert_eq!(find_all(b"AAAA", b"AA", Some(1)), vec![0]);
        assert_eq!(find_all(b"AA", b"AAA", None), Vec::<usize>::new());
        assert_eq!(find_all(b"AA", b"", None), Vec::<usize>::new());
    }
}
