use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

///
/// The three canonical parts of a transcript, in 5' to 3' order.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionLabel {
    #[serde(rename = "5' UTR")]
    FiveUtr,
    #[serde(rename = "CDS")]
    Cds,
    #[serde(rename = "3' UTR")]
    ThreeUtr,
}

impl RegionLabel {
    pub const ALL: [RegionLabel; 3] = [RegionLabel::FiveUtr, RegionLabel::Cds, RegionLabel::ThreeUtr];

    /// Prefix used for per-gene table columns, e.g. `5'UTR_A_ratio`.
    pub fn column_prefix(&self) -> &'static str {
        match self {
            RegionLabel::FiveUtr => "5'UTR",
            RegionLabel::Cds => "CDS",
            RegionLabel::ThreeUtr => "3'UTR",
        }
    }

    /// Label used in the distribution table.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionLabel::FiveUtr => "5' UTR",
            RegionLabel::Cds => "CDS",
            RegionLabel::ThreeUtr => "3' UTR",
        }
    }
}

impl Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// 5'UTR, CDS and 3'UTR slices of one sequence.
///
/// The slices borrow from the record they were cut from. Any of them may be
/// empty.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionTriple<'a> {
    pub five_utr: &'a [u8],
    pub cds: &'a [u8],
    pub three_utr: &'a [u8],
}

impl RegionTriple<'_> {
    pub fn lengths(&self) -> RegionLengths {
        RegionLengths {
            five_utr: self.five_utr.len(),
            cds: self.cds.len(),
            three_utr: self.three_utr.len(),
        }
    }

    /// The three regions joined back together, in order.
    pub fn concat(&self) -> Vec<u8> {
        [self.five_utr, self.cds, self.three_utr].concat()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegionLengths {
    pub five_utr: usize,
    pub cds: usize,
    pub three_utr: usize,
}

impl RegionLengths {
    pub fn get(&self, label: RegionLabel) -> usize {
        match label {
            RegionLabel::FiveUtr => self.five_utr,
            RegionLabel::Cds => self.cds,
            RegionLabel::ThreeUtr => self.three_utr,
        }
    }

    pub fn total(&self) -> usize {
        self.five_utr + self.cds + self.three_utr
    }
}

/// Region lengths for one gene, as written to the length table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionLengthRow {
    pub gene_id: String,
    pub lengths: RegionLengths,
}
