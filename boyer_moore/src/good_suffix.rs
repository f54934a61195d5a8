//! Good-suffix shifts (weak variant, suffixes starting from the pattern midpoint).

use crate::DEFAULT_SHIFT;
use log::trace;

/// `m + 1` shifts indexed by the start of the already matched suffix.
///
/// Entry `s` is `s - j` where `j < s` is the rightmost earlier occurrence of
/// `pattern[s..]` whose preceding symbol differs from `pattern[s - 1]` (an
/// occurrence at the very start of the pattern always qualifies). Only
/// `s >= m / 2` is considered. Every other entry is [`DEFAULT_SHIFT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodSuffixTable {
    shifts: Vec<usize>,
}

impl GoodSuffixTable {
    /// Build the table for `pattern`.
    pub fn new(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut shifts = vec![DEFAULT_SHIFT; m + 1];
        let suffix_lens = suffix_lengths(pattern);

        for start in m / 2..m {
            match reusable_occurrence(pattern, &suffix_lens, start) {
                Some(j) => {
                    trace!("suffix at {start} reoccurs at {j}");
                    shifts[start] = start - j;
                }
                // No safe reuse: leave the minimal shift in place.
                None => {}
            }
        }

        GoodSuffixTable { shifts }
    }

    /// Shift after matching `pattern[start..]`. Out-of-range starts get [`DEFAULT_SHIFT`].
    #[inline]
    pub fn shift(&self, start: usize) -> usize {
        self.shifts.get(start).copied().unwrap_or(DEFAULT_SHIFT)
    }

    /// Number of entries, `m + 1`.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Never true: even an empty pattern has one entry.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// All entries, indexed by suffix start.
    pub fn as_slice(&self) -> &[usize] {
        &self.shifts
    }

    #[cfg(test)]
    pub(crate) fn from_shifts(shifts: Vec<usize>) -> Self {
        GoodSuffixTable { shifts }
    }
}

/// `lens[k]` is the length of the longest common suffix of `pattern[..=k]`
/// and `pattern`. Quadratic in the worst case (a run of one symbol).
fn suffix_lengths(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    (0..m)
        .map(|k| {
            pattern[..=k]
                .iter()
                .rev()
                .zip(pattern.iter().rev())
                .take_while(|(a, b)| a == b)
                .count()
        })
        .collect()
}

/// Rightmost `j < start` where `pattern[start..]` occurs again and is not
/// preceded by `pattern[start - 1]`. Linear in `start` given `suffix_lens`,
/// so the whole table costs O(m^2).
fn reusable_occurrence(pattern: &[u8], suffix_lens: &[usize], start: usize) -> Option<usize> {
    let len = pattern.len() - start;
    (0..start).rev().find(|&j| {
        suffix_lens[j + len - 1] >= len && (j == 0 || pattern[j - 1] != pattern[start - 1])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find_all_with, naive, Alphabet, BadCharTable};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_found_branch_records_distance() {
        // "AB" at 4 reoccurs at 1, preceded by 'C' rather than 'D'.
        // "B" at 5 reoccurs at 2 but is preceded by the same 'A', so it is not reused.
        let table = GoodSuffixTable::new(b"CABDAB");
        assert_eq!(table.as_slice(), &[1, 1, 1, 1, 3, 1, 1]);
    }

    #[test]
    fn test_not_found_branch_keeps_default() {
        let table = GoodSuffixTable::new(b"ACGT");
        assert_eq!(table.as_slice(), &[DEFAULT_SHIFT; 5]);
        assert_eq!(table.shift(2), DEFAULT_SHIFT);
    }

    #[test]
    fn test_occurrence_at_pattern_start() {
        // "AB" at 3 reoccurs at 0, which has no preceding symbol.
        let table = GoodSuffixTable::new(b"ABXAB");
        assert_eq!(table.shift(3), 3);
        assert_eq!(table.shift(4), 1);
    }

    #[test]
    fn test_only_from_midpoint() {
        // "BAB" at 1 reoccurs nowhere usable; suffixes before m / 2 are never examined.
        let table = GoodSuffixTable::new(b"ABAB");
        assert_eq!(table.shift(0), DEFAULT_SHIFT);
        assert_eq!(table.shift(1), DEFAULT_SHIFT);
        // "AB" at 2 reoccurs at 0
        assert_eq!(table.shift(2), 2);
    }

    #[test]
    fn test_suffix_lengths() {
        assert_eq!(suffix_lengths(b"CABDAB"), vec![0, 0, 2, 0, 0, 6]);
        assert_eq!(suffix_lengths(b"AAA"), vec![1, 2, 3]);
        assert_eq!(suffix_lengths(b""), Vec::<usize>::new());
    }

    /// Entry `start` by the definition, comparing the suffix at every earlier offset.
    fn shift_by_definition(pattern: &[u8], start: usize) -> usize {
        let suffix = &pattern[start..];
        (0..start)
            .rev()
            .find(|&j| {
                pattern[j..].starts_with(suffix)
                    && (j == 0 || pattern[j - 1] != pattern[start - 1])
            })
            .map_or(DEFAULT_SHIFT, |j| start - j)
    }

    proptest! {
        #[test]
        fn prop_test_table_matches_definition(ref pattern in "[AB]{0, 24}") {
            let pattern = pattern.as_bytes();
            let table = GoodSuffixTable::new(pattern);
            for start in 0..=pattern.len() {
                let expected = if start >= pattern.len() / 2 && start < pattern.len() {
                    shift_by_definition(pattern, start)
                } else {
                    DEFAULT_SHIFT
                };
                prop_assert_eq!(table.shift(start), expected);
            }
        }

        #[test]
        fn prop_test_long_patterns_equal_brute_force(
            ref text in "[AB]{0, 300}",
            ref pattern in "[AB]{1, 20}",
        ) {
            let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
            let bad_char = BadCharTable::new(pattern, &Alphabet::from_text(text));
            let good_suffix = GoodSuffixTable::new(pattern);
            prop_assert_eq!(
                find_all_with(text, pattern, &bad_char, &good_suffix, None),
                naive::find_all(text, pattern, None)
            );
        }
    }

    #[test]
    fn test_degenerate_lengths() {
        assert_eq!(GoodSuffixTable::new(b"").as_slice(), &[1]);
        assert_eq!(GoodSuffixTable::new(b"A").as_slice(), &[1, 1]);
        assert_eq!(GoodSuffixTable::new(b"AA").as_slice(), &[1, 1, 1]);
        assert_eq!(GoodSuffixTable::new(b"A").shift(7), DEFAULT_SHIFT);
    }

    /// An earlier draft swapped the branches: a suffix with no earlier
    /// occurrence was given a large shift while found occurrences kept the
    /// default. A prefix border of the suffix can still start a match, so the
    /// widened shift skips real occurrences.
    #[test]
    fn test_inverted_not_found_branch_misses_matches() {
        let pattern = b"ABA";
        let text = b"CBABA";
        let bad_char = BadCharTable::new(pattern, &Alphabet::from_text(text));

        let inverted: Vec<usize> = GoodSuffixTable::new(pattern)
            .as_slice()
            .iter()
            .enumerate()
            .map(|(start, &s)| {
                if start > 0 && start < pattern.len() && s == DEFAULT_SHIFT {
                    pattern.len()
                } else {
                    s
                }
            })
            .collect();
        let inverted = GoodSuffixTable::from_shifts(inverted);
        assert_eq!(
            find_all_with(text, pattern, &bad_char, &inverted, None),
            Vec::<usize>::new()
        );

        let good_suffix = GoodSuffixTable::new(pattern);
        assert_eq!(
            find_all_with(text, pattern, &bad_char, &good_suffix, None),
            naive::find_all(text, pattern, None)
        );
        assert_eq!(naive::find_all(text, pattern, None), vec![2]);
    }
}
