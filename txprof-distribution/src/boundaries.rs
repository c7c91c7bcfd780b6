use serde::Serialize;

use txprof_core::models::{PopulationFeatureRow, RegionLabel};

///
/// Population-average UTR proportions, as percentages of transcript length.
///
/// These are the same two cut points for every bin, derived from mean
/// lengths across the population. Individual transcripts have their own UTR
/// proportions, so a bin labeled CDS here may well lie in a UTR for a given
/// gene. The labels are approximate.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionBoundaries {
    pub five_utr_pct: f64,
    pub three_utr_pct: f64,
}

impl RegionBoundaries {
    /// `mean(5'UTR) / mean(mRNA) * 100` and the 3'UTR analogue; `None` on an empty population.
    pub fn from_population<'a, I>(rows: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a PopulationFeatureRow>,
    {
        let (mut mrna, mut five, mut three) = (0f64, 0f64, 0f64);
        let mut n = 0usize;
        for row in rows {
            mrna += row.mrna_length as f64;
            five += row.five_utr_length as f64;
            three += row.three_utr_length as f64;
            n += 1;
        }

        if n == 0 || mrna <= 0.0 {
            return None;
        }

        // the row count cancels out of the ratio of means
        Some(Self {
            five_utr_pct: five * 100.0 / mrna,
            three_utr_pct: three * 100.0 / mrna,
        })
    }

    /// Three-prime cut point, in percent.
    pub fn three_utr_start(&self) -> f64 {
        100.0 - self.three_utr_pct
    }

    /// Label for a position given in percent of transcript length.
    pub fn label(&self, midpoint_pct: f64) -> RegionLabel {
        if midpoint_pct <= self.five_utr_pct {
            RegionLabel::FiveUtr
        } else if midpoint_pct >= self.three_utr_start() {
            RegionLabel::ThreeUtr
        } else {
            RegionLabel::Cds
        }
    }
}
