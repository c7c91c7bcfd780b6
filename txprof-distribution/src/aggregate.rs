use std::collections::HashSet;

use log::{debug, info};
use serde::Serialize;

use txprof_core::models::{DistributionBin, PopulationFeatureRow};
use txprof_core::{BinRange, DistributionConfig};

use crate::boundaries::RegionBoundaries;
use crate::errors::DistributionError;
use crate::filter::{FilterReport, filter_population};
use crate::histogram::{histogram, observed_range};

/// The canonical distribution output and how it was derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionTable {
    pub bins: Vec<DistributionBin>,
    /// Distinct gene ids among the retained rows
    pub total_genes: usize,
    /// Retained rows, i.e. feature occurrences
    pub total_occurrences: usize,
    pub boundaries: RegionBoundaries,
    pub filter: FilterReport,
    /// Relative-position interval covered by the bins
    pub range: (f64, f64),
}

impl DistributionTable {
    /// Equals `total_occurrences / total_genes` up to rounding.
    pub fn density_sum(&self) -> f64 {
        self.bins.iter().map(|b| b.density).sum()
    }
}

///
/// Bins feature occurrences by their relative position along the transcript
/// and normalizes each bin by the number of distinct genes.
///
/// The whole population has to be materialized before any bin is final.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalAggregator {
    bins: usize,
    bin_range: BinRange,
}

impl PositionalAggregator {
    pub fn new(bins: u32) -> Result<Self, DistributionError> {
        if bins == 0 {
            return Err(DistributionError::InvalidBinCount(bins));
        }
        Ok(Self {
            bins: bins as usize,
            bin_range: BinRange::default(),
        })
    }

    pub fn with_bin_range(mut self, bin_range: BinRange) -> Self {
        self.bin_range = bin_range;
        self
    }

    pub fn from_config(config: &DistributionConfig) -> Result<Self, DistributionError> {
        Ok(Self::new(config.bins)?.with_bin_range(config.bin_range))
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    ///
    /// Build the per-bin density table.
    ///
    /// Steps:
    /// 1. drop rows missing a region or with an unusable position
    /// 2. `rel = start / mRNA_Length` per remaining row
    /// 3. histogram of `rel` over the configured range
    /// 4. `density = count / distinct genes`
    /// 5. label each bin midpoint with the population-average boundaries
    ///
    /// Fails with [`DistributionError::EmptyPopulation`] when nothing survives
    /// filtering.
    ///
    pub fn aggregate(
        &self,
        rows: &[PopulationFeatureRow],
    ) -> Result<DistributionTable, DistributionError> {
        let (retained, filter) = filter_population(rows);

        let total_genes = retained
            .iter()
            .map(|r| r.id.as_str())
            .collect::<HashSet<&str>>()
            .len();
        if total_genes == 0 {
            return Err(DistributionError::EmptyPopulation { rows: rows.len() });
        }

        let boundaries = RegionBoundaries::from_population(retained.iter().copied())
            .ok_or(DistributionError::EmptyPopulation { rows: rows.len() })?;

        let rel: Vec<f64> = retained.iter().map(|r| r.relative_position()).collect();
        let range = match self.bin_range {
            BinRange::Unit => (0.0, 1.0),
            BinRange::Observed => observed_range(&rel)
                .ok_or(DistributionError::EmptyPopulation { rows: rows.len() })?,
        };
        debug!(
            "Binning {} positions into {} bins over [{}, {}]",
            rel.len(),
            self.bins,
            range.0,
            range.1
        );

        let hist = histogram(&rel, self.bins, range);

        let bins = hist
            .counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let midpoint = hist.midpoint(i) * 100.0;
                DistributionBin {
                    bin_index: i,
                    midpoint,
                    count,
                    density: count as f64 / total_genes as f64,
                    region: boundaries.label(midpoint),
                }
            })
            .collect();

        info!(
            "{} occurrences over {} genes ({} rows dropped); 5'UTR ≤ {:.2}%, 3'UTR ≥ {:.2}%",
            retained.len(),
            total_genes,
            filter.excluded(),
            boundaries.five_utr_pct,
            boundaries.three_utr_start()
        );

        Ok(DistributionTable {
            bins,
            total_genes,
            total_occurrences: retained.len(),
            boundaries,
            filter,
            range,
        })
    }
}
