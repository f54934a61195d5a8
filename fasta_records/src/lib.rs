//! fasta_records
//!
//! Load the sequences of FASTA files as raw byte strings, one per record, in
//! file order. Header lines are dropped and line breaks inside a record are
//! removed.
#![deny(missing_docs)]

use anyhow::{Context, Result};
use bio::io::fasta;
use log::debug;
use std::io::Read;
use std::path::Path;

/// A sequence read from a FASTA record.
pub type Seq = Vec<u8>;

/// Read every record sequence from the FASTA file at `path`.
pub fn read_sequences(path: &Path) -> Result<Vec<Seq>> {
    let reader = fasta::Reader::from_file(path)
        .with_context(|| format!("opening FASTA file {}", path.display()))?;
    let seqs = collect_sequences(reader)
        .with_context(|| format!("reading FASTA file {}", path.display()))?;
    debug!("read {} records from {}", seqs.len(), path.display());
    Ok(seqs)
}

/// Read every record sequence from FASTA formatted data.
pub fn read_sequences_from<R: Read>(data: R) -> Result<Vec<Seq>> {
    collect_sequences(fasta::Reader::new(data))
}

/// Read the records of several files, concatenated in argument order.
pub fn read_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Seq>> {
    let mut seqs = Vec::new();
    for path in paths {
        seqs.extend(read_sequences(path.as_ref())?);
    }
    Ok(seqs)
}

fn collect_sequences<B: std::io::BufRead>(reader: fasta::Reader<B>) -> Result<Vec<Seq>> {
    reader
        .records()
        .enumerate()
        .map(|(i, record)| {
            let record = record.with_context(|| format!("malformed record {}", i + 1))?;
            Ok(record.seq().to_vec())
        })
        .collect()
}
