use serde::Serialize;

use super::region::RegionLabel;

///
/// The four counted nucleotides, in table column order.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Base {
    A,
    T,
    C,
    G,
}

impl Base {
    /// Column order of the per-gene table: A, T, C, G.
    pub const ORDER: [Base; 4] = [Base::A, Base::T, Base::C, Base::G];

    pub fn index(self) -> usize {
        match self {
            Base::A => 0,
            Base::T => 1,
            Base::C => 2,
            Base::G => 3,
        }
    }

    /// Case-insensitive; anything outside A/T/C/G (N, IUPAC codes, gaps) is `None`.
    pub fn from_byte(byte: u8) -> Option<Base> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(Base::A),
            b'T' => Some(Base::T),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::T => 'T',
            Base::C => 'C',
            Base::G => 'G',
        }
    }
}

///
/// Base counts and ratios for one region.
///
/// `None` is the NA value: the region was empty, or (under the default zero
/// policy) the base does not occur in it. A count and its ratio are always
/// both present or both missing. Ratios are relative to the full region
/// length, so symbols outside A/T/C/G lower every ratio.
///
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CompositionRecord {
    pub length: usize,
    pub counts: [Option<u64>; 4],
    pub ratios: [Option<f64>; 4],
}

impl CompositionRecord {
    /// All-NA record for an absent region.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn count(&self, base: Base) -> Option<u64> {
        self.counts[base.index()]
    }

    pub fn ratio(&self, base: Base) -> Option<f64> {
        self.ratios[base.index()]
    }

    /// Sum of the present counts.
    pub fn counted(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    pub fn is_all_na(&self) -> bool {
        self.counts.iter().all(Option::is_none) && self.ratios.iter().all(Option::is_none)
    }
}

/// One row of the per-gene composition table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneCompositionRow {
    pub gene_id: String,
    pub five_utr: CompositionRecord,
    pub cds: CompositionRecord,
    pub three_utr: CompositionRecord,
}

impl GeneCompositionRow {
    pub fn region(&self, label: RegionLabel) -> &CompositionRecord {
        match label {
            RegionLabel::FiveUtr => &self.five_utr,
            RegionLabel::Cds => &self.cds,
            RegionLabel::ThreeUtr => &self.three_utr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(b'a', Some(Base::A))]
    #[case(b'G', Some(Base::G))]
    #[case(b't', Some(Base::T))]
    #[case(b'N', None)]
    #[case(b'u', None)]
    fn test_base_from_byte(#[case] byte: u8, #[case] expected: Option<Base>) {
        assert_eq!(Base::from_byte(byte), expected);
    }

    #[rstest]
    fn test_order_matches_index() {
        for (i, base) in Base::ORDER.iter().enumerate() {
            assert_eq!(base.index(), i);
        }
        let letters: String = Base::ORDER.iter().map(|b| b.as_char()).collect();
        assert_eq!(letters, "ATCG");
    }

    #[rstest]
    fn test_empty_record_is_all_na() {
        let record = CompositionRecord::empty();
        assert!(record.is_all_na());
        assert_eq!(record.counted(), 0);
        assert_eq!(record.ratio(Base::C), None);
    }
}
