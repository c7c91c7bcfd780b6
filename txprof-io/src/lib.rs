//! # Input/Output for txprof.
//!
//! Readers turn files into the value types of `txprof-core`: transcripts from
//! FASTA, feature occurrences from a CSV/TSV population table. Writers render
//! per-gene composition, region lengths, distribution bins and smoothed
//! curves as delimited tables, with `NA` for missing values.
//!
pub mod error;
pub mod fasta;
pub mod population;
pub mod writer;

pub use error::*;
pub use fasta::*;
pub use population::*;
pub use writer::*;
