//! # txprof-distribution
//!
//! Positional density of feature occurrences across a population of transcripts.
//!
//! Each input row is one occurrence of a feature (a motif, a modification
//! site, ...) at `start` on a transcript of known region lengths. The
//! aggregator turns these into a histogram of relative positions,
//! normalized by the number of distinct genes, and labels each bin with the
//! region it falls in on an average transcript.
//!
//! ## Example
//!
//! ```rust
//! use txprof_core::models::PopulationFeatureRow;
//! use txprof_distribution::PositionalAggregator;
//!
//! let rows = vec![
//!     PopulationFeatureRow::new("g1", 100, 10, 80, 10, 10),
//!     PopulationFeatureRow::new("g2", 100, 10, 80, 10, 55),
//! ];
//!
//! let table = PositionalAggregator::new(10).unwrap().aggregate(&rows).unwrap();
//! assert_eq!(table.total_genes, 2);
//! assert_eq!(table.density_sum(), 1.0);
//! ```
pub mod aggregate;
pub mod boundaries;
pub mod errors;
pub mod filter;
pub mod histogram;
pub mod smoothing;

pub use aggregate::{DistributionTable, PositionalAggregator};
pub use boundaries::RegionBoundaries;
pub use errors::DistributionError;
pub use filter::{FilterReport, filter_population};
pub use smoothing::{CubicSpline, MIN_SPLINE_POINTS, Smoothing, smooth_distribution, try_smooth};
