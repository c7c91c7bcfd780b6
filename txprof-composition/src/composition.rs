//! Base composition of a single region.

use txprof_core::ZeroCountPolicy;
use txprof_core::models::{Base, CompositionRecord};

/// Case-insensitive A/T/C/G counts in [`Base::ORDER`]; other symbols are skipped.
pub fn count_bases(region: &[u8]) -> [u64; 4] {
    let mut counts = [0u64; 4];
    for base in region.iter().filter_map(|b| Base::from_byte(*b)) {
        counts[base.index()] += 1;
    }
    counts
}

///
/// Calculate counts and ratios of A, T, C and G for one region.
///
/// Ratios use the full region length as denominator, so symbols outside
/// A/T/C/G (`N`, IUPAC codes) count toward the length but toward no base.
/// An empty region is all NA. Under [`ZeroCountPolicy::Na`] a base absent
/// from a non-empty region is NA too, for both its count and its ratio.
///
/// Arguments:
/// - region: the region's bases
/// - policy: how to report a zero count
///
pub fn calc_composition(region: &[u8], policy: ZeroCountPolicy) -> CompositionRecord {
    let length = region.len();
    if length == 0 {
        return CompositionRecord::empty();
    }

    let counts = count_bases(region);
    let mut record = CompositionRecord {
        length,
        ..Default::default()
    };

    for base in Base::ORDER {
        let i = base.index();
        if counts[i] == 0 && policy == ZeroCountPolicy::Na {
            continue;
        }
        record.counts[i] = Some(counts[i]);
        record.ratios[i] = Some(counts[i] as f64 / length as f64);
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(ZeroCountPolicy::Na)]
    #[case(ZeroCountPolicy::Zero)]
    fn test_empty_region_is_all_na(#[case] policy: ZeroCountPolicy) {
        let record = calc_composition(b"", policy);
        assert!(record.is_all_na());
        assert_eq!(record.length, 0);
    }

    #[rstest]
    fn test_balanced_cds() {
        let record = calc_composition(b"ACGT", ZeroCountPolicy::Na);
        for base in Base::ORDER {
            assert_eq!(record.count(base), Some(1));
            assert_eq!(record.ratio(base), Some(0.25));
        }
    }

    #[rstest]
    fn test_case_insensitive() {
        let record = calc_composition(b"aAtTcCgG", ZeroCountPolicy::Na);
        assert_eq!(record.count(Base::A), Some(2));
        assert_eq!(record.count(Base::G), Some(2));
    }

    #[rstest]
    fn test_ambiguous_symbols_dilute_ratios() {
        let record = calc_composition(b"AANN", ZeroCountPolicy::Na);
        assert_eq!(record.count(Base::A), Some(2));
        assert_eq!(record.ratio(Base::A), Some(0.5));
        assert_eq!(record.count(Base::C), None);
        assert_eq!(record.ratio(Base::C), None);
    }

    #[rstest]
    fn test_only_non_acgt_symbols() {
        let record = calc_composition(b"NNNN", ZeroCountPolicy::Na);
        assert!(record.is_all_na());
        assert_eq!(record.length, 4);
    }

    #[rstest]
    fn test_zero_policy_keeps_real_zeros() {
        let record = calc_composition(b"AAAA", ZeroCountPolicy::Zero);
        assert_eq!(record.count(Base::A), Some(4));
        assert_eq!(record.ratio(Base::A), Some(1.0));
        assert_eq!(record.count(Base::T), Some(0));
        assert_eq!(record.ratio(Base::T), Some(0.0));
    }

    #[rstest]
    #[case(b"ACGTACGTNN".as_slice())]
    #[case(b"acgu".as_slice())]
    #[case(b"GGGG".as_slice())]
    #[case(b"a-c-g-t".as_slice())]
    fn test_counts_never_exceed_length(#[case] region: &[u8]) {
        let record = calc_composition(region, ZeroCountPolicy::Na);
        let counted = record.counted() as usize;
        let all_acgt = region.iter().all(|b| Base::from_byte(*b).is_some());

        assert!(counted <= region.len());
        assert_eq!(counted == region.len(), all_acgt);

        let ratio_sum: f64 = record.ratios.iter().flatten().sum();
        assert!(ratio_sum <= 1.0 + 1e-12);
    }

    #[rstest]
    fn test_count_and_ratio_present_together() {
        let record = calc_composition(b"CCGNa", ZeroCountPolicy::Na);
        for base in Base::ORDER {
            assert_eq!(record.count(base).is_some(), record.ratio(base).is_some());
        }
    }
}
