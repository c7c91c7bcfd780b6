use serde::{Deserialize, Serialize};

///
/// One feature occurrence on one transcript, as produced by the upstream
/// filtering/annotation step.
///
/// A gene with several occurrences contributes several rows sharing the same
/// `id`. Lengths are signed so that degenerate rows (zero or negative region
/// lengths) can be read and then excluded explicitly.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationFeatureRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "mRNA_Length", alias = "mrna_length")]
    pub mrna_length: i64,
    #[serde(rename = "5UTR_length", alias = "five_utr_length")]
    pub five_utr_length: i64,
    #[serde(rename = "CDS_Length", alias = "cds_length")]
    pub cds_length: i64,
    #[serde(rename = "3UTR_Length", alias = "three_utr_Length", alias = "three_utr_length")]
    pub three_utr_length: i64,
    pub start: i64,
}

impl PopulationFeatureRow {
    pub fn new(
        id: impl Into<String>,
        mrna_length: i64,
        five_utr_length: i64,
        cds_length: i64,
        three_utr_length: i64,
        start: i64,
    ) -> Self {
        Self {
            id: id.into(),
            mrna_length,
            five_utr_length,
            cds_length,
            three_utr_length,
            start,
        }
    }

    /// All three regions are present (strictly positive length).
    pub fn has_all_regions(&self) -> bool {
        self.five_utr_length > 0 && self.cds_length > 0 && self.three_utr_length > 0
    }

    /// `start` lies on a transcript of positive length.
    pub fn has_valid_position(&self) -> bool {
        self.mrna_length > 0 && (0..=self.mrna_length).contains(&self.start)
    }

    /// Fraction of the transcript preceding the occurrence, in `[0, 1]` for valid rows.
    pub fn relative_position(&self) -> f64 {
        self.start as f64 / self.mrna_length as f64
    }
}
