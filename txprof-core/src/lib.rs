//! # txprof-core
//!
//! Value types shared by the two txprof analysis paths:
//!
//! - the **per-gene path**, which splits each transcript into 5'UTR, CDS and 3'UTR
//!   and reports base composition per region ([`GeneCompositionRow`]);
//! - the **distribution path**, which turns a population of feature occurrences
//!   into a normalized positional density across the transcript body
//!   ([`DistributionBin`]).
//!
//! The two paths share nothing at runtime. They only agree on the
//! [`RegionLabel`] vocabulary.
//!
//! ## Example
//!
//! ```rust
//! use txprof_core::models::{RegionLabel, SequenceRecord};
//!
//! let record = SequenceRecord::new("tx1", b"acgtACGTacgt".to_vec())
//!     .with_description("CDS=5-8");
//!
//! assert_eq!(record.annotation("CDS"), Some("5-8"));
//! assert_eq!(RegionLabel::FiveUtr.column_prefix(), "5'UTR");
//! ```
pub mod config;
pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use config::*;
pub use errors::*;
pub use models::*;

pub mod consts {
    /// Literal text written for a missing count or ratio.
    pub const NA: &str = "NA";
    pub const DEFAULT_BINS: u32 = 100;
    pub const DEFAULT_RESOLUTION: usize = 300;
    /// Descriptor key carrying 1-based inclusive CDS bounds, e.g. `CDS=61-1020`.
    pub const CDS_KEY: &str = "CDS";
}
