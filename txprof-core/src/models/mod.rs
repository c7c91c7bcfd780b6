pub mod composition;
pub mod distribution;
pub mod population;
pub mod record;
pub mod region;

// re-export for cleaner imports
pub use self::composition::{Base, CompositionRecord, GeneCompositionRow};
pub use self::distribution::{DistributionBin, SmoothedCurve};
pub use self::population::PopulationFeatureRow;
pub use self::record::SequenceRecord;
pub use self::region::{RegionLabel, RegionLengthRow, RegionLengths, RegionTriple};
