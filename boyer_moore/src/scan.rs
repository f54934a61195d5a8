//! The right-to-left matching loop.

use crate::alphabet::{Alphabet, AlphabetSource};
use crate::bad_char::BadCharTable;
use crate::errors::SearchError;
use crate::good_suffix::GoodSuffixTable;
use crate::{Text, DEFAULT_SHIFT, MATCH_SHIFT};
use log::debug;

/// Find every start index of `pattern` in `text`, in ascending order,
/// stopping after `limit` matches if given.
///
/// The bad-character alphabet is taken from the text. A pattern longer than
/// the text has no matches; an empty pattern is rejected.
pub fn find_all(
    text: &[u8],
    pattern: &[u8],
    limit: Option<usize>,
) -> Result<Vec<usize>, SearchError> {
    let searcher = BoyerMoore::with_source(pattern, text, AlphabetSource::Text)?;
    Ok(searcher.find_all(text, limit))
}

/// Scan `text` with prebuilt tables for `pattern`.
///
/// An empty pattern yields no matches here; [`find_all`] and
/// [`BoyerMoore::new`] reject it before tables are built.
pub fn find_all_with(
    text: &[u8],
    pattern: &[u8],
    bad_char: &BadCharTable,
    good_suffix: &GoodSuffixTable,
    limit: Option<usize>,
) -> Vec<usize> {
    let mut matches = Vec::new();
    let mut scanner = Scanner::new(text, pattern, bad_char, good_suffix);
    while limit.map_or(true, |limit| matches.len() < limit) {
        match scanner.next() {
            Some(pos) => matches.push(pos),
            None => break,
        }
    }
    matches
}

/// A pattern with its shift tables, reusable across texts.
#[derive(Debug, Clone)]
pub struct BoyerMoore {
    pattern: Text,
    bad_char: BadCharTable,
    good_suffix: GoodSuffixTable,
}

impl BoyerMoore {
    /// Prepare `pattern` for searching texts whose symbols are all in `alphabet`.
    ///
    /// Texts may contain other symbols; those mismatch with the minimal shift.
    pub fn new(pattern: &[u8], alphabet: &Alphabet) -> Result<Self, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }
        let bad_char = BadCharTable::new(pattern, alphabet);
        let good_suffix = GoodSuffixTable::new(pattern);
        debug!(
            "built tables for pattern of length {} over {} symbols",
            pattern.len(),
            bad_char.alphabet_len()
        );
        Ok(BoyerMoore {
            pattern: pattern.to_vec(),
            bad_char,
            good_suffix,
        })
    }

    /// Prepare `pattern` for searching `text`, drawing the alphabet from `source`.
    pub fn with_source(
        pattern: &[u8],
        text: &[u8],
        source: AlphabetSource,
    ) -> Result<Self, SearchError> {
        let alphabet = source.extract(pattern, text);
        if source == AlphabetSource::Pattern && !alphabet.covers(text) {
            debug!(
                "text has symbols outside the pattern alphabet, \
                 their mismatches shift by {DEFAULT_SHIFT}"
            );
        }
        BoyerMoore::new(pattern, &alphabet)
    }

    /// All matches in `text`, capped at `limit`.
    pub fn find_all(&self, text: &[u8], limit: Option<usize>) -> Vec<usize> {
        find_all_with(text, &self.pattern, &self.bad_char, &self.good_suffix, limit)
    }

    /// Lazily iterate over the matches in `text`.
    pub fn find_iter<'a>(&'a self, text: &'a [u8]) -> FindIter<'a> {
        FindIter(Scanner::new(
            text,
            &self.pattern,
            &self.bad_char,
            &self.good_suffix,
        ))
    }

    /// The prepared pattern.
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// The bad-character table.
    pub fn bad_char(&self) -> &BadCharTable {
        &self.bad_char
    }

    /// The good-suffix table.
    pub fn good_suffix(&self) -> &GoodSuffixTable {
        &self.good_suffix
    }
}

/// Iterator over match start positions, see [`BoyerMoore::find_iter`].
pub struct FindIter<'a>(Scanner<'a>);

impl Iterator for FindIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.0.next()
    }
}

/// Outcome of aligning the window ending at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Match { start: usize, shift: usize },
    Mismatch { shift: usize },
}

impl Step {
    fn shift(self) -> usize {
        match self {
            Step::Match { shift, .. } | Step::Mismatch { shift } => shift,
        }
    }
}

struct Scanner<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
    bad_char: &'a BadCharTable,
    good_suffix: &'a GoodSuffixTable,
    /// Text position under the last pattern symbol.
    cursor: usize,
}

impl<'a> Scanner<'a> {
    fn new(
        text: &'a [u8],
        pattern: &'a [u8],
        bad_char: &'a BadCharTable,
        good_suffix: &'a GoodSuffixTable,
    ) -> Self {
        Scanner {
            text,
            pattern,
            bad_char,
            good_suffix,
            // An empty pattern starts past the end and never matches.
            cursor: if pattern.is_empty() {
                text.len()
            } else {
                pattern.len() - 1
            },
        }
    }

    /// Compare the current window right to left and advance the cursor.
    fn step(&mut self) -> Option<Step> {
        if self.cursor >= self.text.len() {
            return None;
        }
        let m = self.pattern.len();
        let window = &self.text[self.cursor + 1 - m..=self.cursor];

        let step = match (0..m).rev().find(|&p| window[p] != self.pattern[p]) {
            None => Step::Match {
                start: self.cursor + 1 - m,
                shift: MATCH_SHIFT,
            },
            Some(p) => {
                let bcr = self
                    .bad_char
                    .shift(p, window[p])
                    .unwrap_or(DEFAULT_SHIFT);
                let gsr = self.good_suffix.shift(p + 1);
                Step::Mismatch {
                    shift: bcr.max(gsr).max(DEFAULT_SHIFT),
                }
            }
        };
        self.cursor += step.shift();
        Some(step)
    }
}

impl Iterator for Scanner<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if let Step::Match { start, .. } = self.step()? {
                return Some(start);
            }
        }
    }
}
