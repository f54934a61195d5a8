//! bm_find
#![deny(missing_docs)]

use anyhow::Result;
use bm_find::parameters::Parameters;
use bm_find::{mylog, run_lengths, run_search, SearchOptions};
use boyer_moore::AlphabetSource;
use clap::Parser;
use log::LevelFilter;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Boyer-Moore search over FASTA sequences.
#[derive(Debug, Parser)]
enum Args {
    /// Search the first record of TEXT_FA for every record of PATTERN_FA.
    Search {
        text_fa: PathBuf,
        pattern_fa: PathBuf,
        /// Report at most this many matches per pattern.
        #[clap(long)]
        limit: Option<usize>,
        /// Report every match.
        #[clap(long, conflicts_with = "limit")]
        no_limit: bool,
        /// Separator between match positions.
        #[clap(long)]
        sep: Option<String>,
        /// Draw the bad-character alphabet from the text or the pattern.
        #[clap(long)]
        alphabet: Option<AlphabetSource>,
        /// Parameters file, instead of parameters.toml next to the executable.
        #[clap(long)]
        params: Option<PathBuf>,
        /// Log at debug level.
        #[clap(long)]
        verbose: bool,
    },
    /// Print the length of every record of the given FASTA files.
    Lengths {
        #[clap(required = true)]
        fasta: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args {
        Args::Search {
            text_fa,
            pattern_fa,
            limit,
            no_limit,
            sep,
            alphabet,
            params,
            verbose,
        } => {
            mylog::init_log(if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            });
            let params = Parameters::load(params.as_deref())?;
            let opts = SearchOptions {
                limit: if no_limit {
                    None
                } else {
                    limit.or(params.limit())
                },
                separator: sep.unwrap_or_else(|| params.separator.to_string()),
                alphabet_source: alphabet.unwrap_or(params.alphabet_source),
            };
            run_search(&text_fa, &pattern_fa, &opts, &mut out)?;
        }
        Args::Lengths { fasta } => {
            mylog::init_log(LevelFilter::Info);
            run_lengths(fasta.as_slice(), &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
