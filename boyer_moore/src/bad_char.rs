//! Bad-character shifts, per pattern position and symbol.

use crate::alphabet::{Alphabet, RankTransform};

/// For each pattern position `i` and alphabet symbol `c`, the distance the
/// pattern may move when `c` mismatches `pattern[i]`:
/// `i - j` for the rightmost `j < i` with `pattern[j] == c`, or `i + 1` when
/// `c` does not occur in `pattern[..i]`.
///
/// Stored as a dense row-major `len() x alphabet_len()` array indexed through
/// a [`RankTransform`].
#[derive(Debug, Clone)]
pub struct BadCharTable {
    ranks: RankTransform,
    shifts: Vec<usize>,
}

impl BadCharTable {
    /// Build the table. `alphabet` must cover every symbol the scanner may
    /// see at a mismatch for the shifts to be maximal; symbols outside it are
    /// reported as unknown by [`BadCharTable::shift`].
    pub fn new(pattern: &[u8], alphabet: &Alphabet) -> Self {
        let ranks = alphabet.ranks();
        let width = ranks.len();
        let mut shifts = Vec::with_capacity(pattern.len() * width);

        // last[r]: rightmost position so far holding the symbol ranked r
        let mut last: Vec<Option<usize>> = vec![None; width];
        for (i, &a) in pattern.iter().enumerate() {
            shifts.extend(last.iter().map(|j| match j {
                Some(j) => i - j,
                None => i + 1,
            }));
            if let Some(r) = ranks.get(a) {
                last[r] = Some(i);
            }
        }

        BadCharTable { ranks, shifts }
    }

    /// Shift for a mismatch of `symbol` against pattern position `pos`, or
    /// `None` if `symbol` is not in the table's alphabet.
    #[inline]
    pub fn shift(&self, pos: usize, symbol: u8) -> Option<usize> {
        let r = self.ranks.get(symbol)?;
        self.shifts.get(pos * self.ranks.len() + r).copied()
    }

    /// Number of pattern positions covered.
    pub fn len(&self) -> usize {
        if self.ranks.is_empty() {
            0
        } else {
            self.shifts.len() / self.ranks.len()
        }
    }

    /// True if the table holds no shifts.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Number of symbols covered.
    pub fn alphabet_len(&self) -> usize {
        self.ranks.len()
    }
}
