use serde::Serialize;

use super::region::RegionLabel;

/// A relative-position bin with its normalized occurrence density.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBin {
    pub bin_index: usize,
    /// Bin midpoint as a percentage of transcript length
    pub midpoint: f64,
    /// Raw number of occurrences in this bin
    pub count: u64,
    /// `count / total_genes`: average occurrences per gene in this bin
    pub density: f64,
    /// Region the midpoint falls in, using population-average boundaries
    pub region: RegionLabel,
}

/// A resampled curve through the bin midpoints, for plotting only.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SmoothedCurve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl SmoothedCurve {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
