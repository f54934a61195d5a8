//! bm_find
//!
//! Search the first record of a FASTA file for every record of a pattern
//! FASTA file, printing the match positions of each pattern on one line.
// Warning groups (as of rust 1.55)
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2018_idioms,
    unused
)]
#![deny(missing_docs)]

use anyhow::{Context, Result};
use boyer_moore::{Alphabet, AlphabetSource, BoyerMoore, SearchError};
use fasta_records::Seq;
use itertools::Itertools;
use log::{debug, info, warn};
use std::io::Write;
use std::path::Path;

pub mod mylog;
pub mod parameters;

/// Options of one search run, after merging parameters and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Match cap per pattern, `None` for all matches.
    pub limit: Option<usize>,
    /// Printed between positions.
    pub separator: String,
    /// Alphabet used for the bad-character table.
    pub alphabet_source: AlphabetSource,
}

/// Join match positions for display.
pub fn format_hits(hits: &[usize], separator: &str) -> String {
    hits.iter().join(separator)
}

/// Search `text` for each pattern and write one line per pattern to `out`.
/// Empty patterns are skipped with a warning and produce an empty line.
/// Returns the total number of matches written.
pub fn search_patterns<W: Write>(
    text: &[u8],
    patterns: &[Seq],
    opts: &SearchOptions,
    out: &mut W,
) -> Result<usize> {
    let text_alphabet = match opts.alphabet_source {
        AlphabetSource::Text => Some(Alphabet::from_text(text)),
        AlphabetSource::Pattern => None,
    };
    let mut total = 0;
    for (i, pattern) in patterns.iter().enumerate() {
        let searcher = match &text_alphabet {
            Some(alphabet) => BoyerMoore::new(pattern, alphabet),
            None => BoyerMoore::with_source(pattern, text, AlphabetSource::Pattern),
        };
        let hits = match searcher {
            Ok(searcher) => searcher.find_all(text, opts.limit),
            Err(SearchError::EmptyPattern) => {
                warn!("pattern {} is empty, skipping", i + 1);
                Vec::new()
            }
        };
        debug!("pattern {}: {} matches", i + 1, hits.len());
        total += hits.len();
        writeln!(out, "{}", format_hits(&hits, &opts.separator))?;
    }
    Ok(total)
}

/// Read the text and pattern FASTA files and search, writing results to `out`.
pub fn run_search<W: Write>(
    text_fa: &Path,
    pattern_fa: &Path,
    opts: &SearchOptions,
    out: &mut W,
) -> Result<usize> {
    let text = fasta_records::read_sequences(text_fa)?
        .into_iter()
        .next()
        .with_context(|| format!("no records in text FASTA {}", text_fa.display()))?;
    let patterns = fasta_records::read_sequences(pattern_fa)?;
    info!(
        "searching {} patterns in a text of length {}",
        patterns.len(),
        text.len()
    );
    let total = search_patterns(&text, &patterns, opts, out)?;
    info!("found {total} matches");
    Ok(total)
}

/// Write the length of every record of `paths` to `out`, one per line.
pub fn run_lengths<W: Write, P: AsRef<Path>>(paths: &[P], out: &mut W) -> Result<()> {
    for seq in fasta_records::read_all(paths)? {
        writeln!(out, "{}", seq.len())?;
    }
    Ok(())
}
