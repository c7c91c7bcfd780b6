use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for txprof-io operations.
#[derive(Error, Debug)]
pub enum TxprofIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input could not be opened or decompressed.
    #[error(transparent)]
    Open(#[from] anyhow::Error),

    /// Malformed or undecodable table row.
    #[error("Table error: {0}")]
    Csv(#[from] csv::Error),

    /// FASTA stream could not be parsed past this point.
    #[error("Invalid FASTA input in {path}: {message}")]
    Fasta { path: PathBuf, message: String },

    /// One record could not be parsed; the stream goes on after it.
    #[error("Unparseable record #{record} in {path}: {reason}")]
    UnparseableRecord {
        path: PathBuf,
        record: usize,
        reason: String,
    },

    /// Input held no records at all.
    #[error("No records found in {0}")]
    EmptyInput(PathBuf),
}

/// Result type alias for txprof-io operations.
pub type Result<T> = std::result::Result<T, TxprofIoError>;
