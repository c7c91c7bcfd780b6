//! # txprof-composition
//!
//! Region segmentation and per-region nucleotide composition of transcripts.
//!
//! ## Main Components
//!
//! - **`Segmenter`**: cuts a record into 5'UTR, CDS and 3'UTR, either from the
//!   letter case of the sequence or from a `CDS=start-end` descriptor token
//! - **`calc_composition`**: A/T/C/G counts and length-normalized ratios of one region
//! - **`ProfileBuilder`**: runs both over a batch and keeps count of excluded records
//!
//! ## Example
//!
//! ```rust
//! use txprof_composition::ProfileBuilder;
//! use txprof_core::models::{Base, SequenceRecord};
//! use txprof_core::{SegmentStrategy, ZeroCountPolicy};
//!
//! let builder = ProfileBuilder::new(SegmentStrategy::CasePattern, ZeroCountPolicy::Na);
//! let record = SequenceRecord::new("tx1", b"acgtACGTacgt".to_vec());
//!
//! let row = builder.build(&record).unwrap().unwrap();
//! assert_eq!(row.cds.ratio(Base::A), Some(0.25));
//! ```
//!
//! With the `parallel` feature, batches are profiled on the rayon thread pool.
//! Row order always follows input order.
pub mod composition;
pub mod errors;
pub mod profile;
pub mod segment;

pub use composition::{calc_composition, count_bases};
pub use errors::SegmentError;
pub use profile::{GeneProfile, ProfileBatch, ProfileBuilder, ProfileSummary};
pub use segment::{CasePatternSegmenter, CdsBounds, CoordinateSegmenter, Segmenter};
