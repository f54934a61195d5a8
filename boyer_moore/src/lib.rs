//! Exact search of a pattern in a byte sequence using the Boyer-Moore
//! bad-character and good-suffix rules.
//!
//! ```
//! let hits = boyer_moore::find_all(b"ABAAABCD", b"ABC", None).unwrap();
//! assert_eq!(hits, vec![4]);
//! ```
#![deny(missing_docs)]

pub mod alphabet;
pub mod bad_char;
mod errors;
pub mod good_suffix;
pub mod naive;
pub mod scan;

pub use alphabet::{Alphabet, AlphabetSource};
pub use bad_char::BadCharTable;
pub use errors::SearchError;
pub use good_suffix::GoodSuffixTable;
pub use scan::{find_all, find_all_with, BoyerMoore, FindIter};

/// An owned pattern or text.
pub type Text = Vec<u8>;

/// Shift used whenever no table gives a larger safe value. Every advance of
/// the scanner is at least this large.
pub const DEFAULT_SHIFT: usize = 1;

/// Shift applied after a full match, so that overlapping occurrences are found.
pub const MATCH_SHIFT: usize = 1;
