//! Sets of byte symbols used to bound the bad-character table.

use std::fmt;
use std::str::FromStr;

use bit_set::BitSet;
use serde::{Deserialize, Serialize};

/// Marker for a symbol that has no rank in a [`RankTransform`].
pub const NO_RANK: u16 = u16::MAX;

/// Distinct symbols of a sequence, one bit per byte value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet(BitSet);

impl Alphabet {
    /// The distinct symbols present in `seq`.
    pub fn from_text(seq: &[u8]) -> Self {
        let mut bits = BitSet::with_capacity(256);
        for &a in seq {
            bits.insert(usize::from(a));
        }
        Alphabet(bits)
    }

    /// True if `seq` uses no symbol outside this alphabet.
    pub fn covers(&self, seq: &[u8]) -> bool {
        seq.iter().all(|&a| self.0.contains(usize::from(a)))
    }

    /// Symbols in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().map(|a| a as u8)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the alphabet of an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Dense symbol-to-rank lookup, ranks assigned in ascending symbol order.
    pub fn ranks(&self) -> RankTransform {
        let mut ranks = [NO_RANK; 256];
        for (r, a) in self.iter().enumerate() {
            ranks[usize::from(a)] = r as u16;
        }
        RankTransform {
            ranks,
            len: self.len(),
        }
    }
}

/// Maps each symbol of an [`Alphabet`] to a dense index in `0..len`.
#[derive(Debug, Clone)]
pub struct RankTransform {
    ranks: [u16; 256],
    len: usize,
}

impl RankTransform {
    /// Rank of `a`, or `None` if `a` is not in the alphabet.
    #[inline]
    pub fn get(&self, a: u8) -> Option<usize> {
        match self.ranks[a as usize] {
            NO_RANK => None,
            r => Some(r as usize),
        }
    }

    /// Number of ranked symbols.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no symbol is ranked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Which sequence the bad-character table alphabet is drawn from.
///
/// `Pattern` yields a smaller table but is only exact when every symbol of
/// the text also occurs in the pattern. Text symbols outside the pattern
/// alphabet are still handled, with the minimal [`crate::DEFAULT_SHIFT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetSource {
    /// Every distinct symbol of the searched text.
    #[default]
    Text,
    /// Only the distinct symbols of the pattern.
    Pattern,
}

impl AlphabetSource {
    /// Extract the alphabet for searching `pattern` in `text`.
    pub fn extract(self, pattern: &[u8], text: &[u8]) -> Alphabet {
        match self {
            AlphabetSource::Text => Alphabet::from_text(text),
            AlphabetSource::Pattern => Alphabet::from_text(pattern),
        }
    }
}

impl FromStr for AlphabetSource {
    type Err = String;

    fn from_str(s: &str) -> Result<AlphabetSource, String> {
        Ok(match s {
            "text" => AlphabetSource::Text,
            "pattern" => AlphabetSource::Pattern,
            _ => {
                return Err(format!(
                    "Unknown alphabet source '{s}'. Supported values are: [text, pattern]"
                ))
            }
        })
    }
}

impl fmt::Display for AlphabetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlphabetSource::Text => "text",
            AlphabetSource::Pattern => "pattern",
        })
    }
}
