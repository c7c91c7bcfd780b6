//! Per-gene composition rows built from segmented records.

use log::{debug, info, warn};
use serde::Serialize;

use txprof_core::models::{GeneCompositionRow, RegionLengthRow, RegionTriple, SequenceRecord};
use txprof_core::{CompositionConfig, SegmentStrategy, ZeroCountPolicy};

use crate::composition::calc_composition;
use crate::errors::SegmentError;
use crate::segment::Segmenter;

/// Counts of what happened to each record of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    /// Records seen
    pub records: usize,
    /// Rows produced
    pub emitted: usize,
    /// Records excluded for out-of-range, inverted or unparseable CDS bounds
    pub malformed: usize,
    /// Records excluded because they carry no CDS annotation
    pub unannotated: usize,
}

impl ProfileSummary {
    pub fn skipped(&self) -> usize {
        self.malformed + self.unannotated
    }
}

/// Rows of one batch, in source order, with the exclusion counts.
#[derive(Debug, Clone)]
pub struct ProfileBatch<T> {
    pub rows: Vec<T>,
    pub summary: ProfileSummary,
}

impl<T> ProfileBatch<T> {
    /// Split each row in two, keeping the summary with the first half.
    pub fn unzip<A, B>(self, f: impl Fn(T) -> (A, B)) -> (ProfileBatch<A>, Vec<B>) {
        let (left, right) = self.rows.into_iter().map(f).unzip();
        (
            ProfileBatch {
                rows: left,
                summary: self.summary,
            },
            right,
        )
    }
}

/// Both per-gene rows of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneProfile {
    pub composition: GeneCompositionRow,
    pub lengths: RegionLengthRow,
}

fn length_row(id: &str, triple: RegionTriple<'_>) -> RegionLengthRow {
    RegionLengthRow {
        gene_id: id.to_string(),
        lengths: triple.lengths(),
    }
}

enum Outcome<T> {
    Row(T),
    Unannotated,
    Malformed(SegmentError),
}

///
/// Turns sequence records into per-gene rows.
///
/// Each record is independent: a record whose segmentation fails is left out
/// and counted, the rest of the batch is unaffected.
///
pub struct ProfileBuilder<S: Segmenter = SegmentStrategy> {
    segmenter: S,
    zero_policy: ZeroCountPolicy,
}

impl ProfileBuilder<SegmentStrategy> {
    pub fn from_config(config: &CompositionConfig) -> Self {
        ProfileBuilder::new(config.strategy, config.zero_policy)
    }
}

impl<S: Segmenter> ProfileBuilder<S> {
    pub fn new(segmenter: S, zero_policy: ZeroCountPolicy) -> Self {
        Self {
            segmenter,
            zero_policy,
        }
    }

    fn composition_row(&self, id: &str, triple: RegionTriple<'_>) -> GeneCompositionRow {
        GeneCompositionRow {
            gene_id: id.to_string(),
            five_utr: calc_composition(triple.five_utr, self.zero_policy),
            cds: calc_composition(triple.cds, self.zero_policy),
            three_utr: calc_composition(triple.three_utr, self.zero_policy),
        }
    }

    ///
    /// Composition row for a single record.
    ///
    /// `Ok(None)` when the record has no usable annotation.
    ///
    pub fn build(&self, record: &SequenceRecord) -> Result<Option<GeneCompositionRow>, SegmentError> {
        Ok(self
            .segmenter
            .segment(record)?
            .map(|triple| self.composition_row(&record.id, triple)))
    }

    /// Composition rows for a batch, in source order.
    pub fn build_all(&self, records: &[SequenceRecord]) -> ProfileBatch<GeneCompositionRow> {
        let batch = self.collect_rows(records, |record, triple| {
            self.composition_row(&record.id, triple)
        });
        info!(
            "Built {} composition rows from {} records ({} malformed, {} without CDS annotation)",
            batch.summary.emitted,
            batch.summary.records,
            batch.summary.malformed,
            batch.summary.unannotated
        );
        batch
    }

    /// Region length rows for a batch, in source order.
    pub fn lengths_all(&self, records: &[SequenceRecord]) -> ProfileBatch<RegionLengthRow> {
        self.collect_rows(records, |record, triple| length_row(&record.id, triple))
    }

    ///
    /// Composition and length rows for a batch, from one segmentation of
    /// each record.
    ///
    pub fn profile_all(&self, records: &[SequenceRecord]) -> ProfileBatch<GeneProfile> {
        let batch = self.collect_rows(records, |record, triple| GeneProfile {
            composition: self.composition_row(&record.id, triple),
            lengths: length_row(&record.id, triple),
        });
        info!(
            "Profiled {} of {} records ({} malformed, {} without CDS annotation)",
            batch.summary.emitted,
            batch.summary.records,
            batch.summary.malformed,
            batch.summary.unannotated
        );
        batch
    }

    fn outcome<T, F>(&self, record: &SequenceRecord, f: &F) -> Outcome<T>
    where
        F: Fn(&SequenceRecord, RegionTriple<'_>) -> T,
    {
        match self.segmenter.segment(record) {
            Ok(Some(triple)) => Outcome::Row(f(record, triple)),
            Ok(None) => Outcome::Unannotated,
            Err(e) => Outcome::Malformed(e),
        }
    }

    fn collect_rows<T, F>(&self, records: &[SequenceRecord], f: F) -> ProfileBatch<T>
    where
        T: Send,
        F: Fn(&SequenceRecord, RegionTriple<'_>) -> T + Sync,
    {
        #[cfg(feature = "parallel")]
        let outcomes: Vec<Outcome<T>> = {
            use rayon::prelude::*;
            records.par_iter().map(|r| self.outcome(r, &f)).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<Outcome<T>> = records.iter().map(|r| self.outcome(r, &f)).collect();

        let mut summary = ProfileSummary {
            records: records.len(),
            ..Default::default()
        };
        let mut rows = Vec::with_capacity(records.len());

        for (record, outcome) in records.iter().zip(outcomes) {
            match outcome {
                Outcome::Row(row) => rows.push(row),
                Outcome::Unannotated => {
                    debug!("{}: no CDS annotation, skipping", record.id);
                    summary.unannotated += 1;
                }
                Outcome::Malformed(e) => {
                    warn!("{}: {}, skipping", record.id, e);
                    summary.malformed += 1;
                }
            }
        }
        summary.emitted = rows.len();

        ProfileBatch { rows, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use txprof_core::models::Base;

    use crate::segment::{CasePatternSegmenter, CoordinateSegmenter};

    #[fixture]
    fn annotated_records() -> Vec<SequenceRecord> {
        vec![
            SequenceRecord::new("ok1", b"0123456789".to_vec()).with_description("CDS=3-7"),
            SequenceRecord::new("inverted", b"ACGTACGT".to_vec()).with_description("CDS=5-2"),
            SequenceRecord::new("bare", b"ACGTACGT".to_vec()),
            SequenceRecord::new("ok2", b"aaACGTtt".to_vec()).with_description("CDS=3-6"),
            SequenceRecord::new("garbled", b"ACGT".to_vec()).with_description("CDS=x-y"),
        ]
    }

    #[rstest]
    fn test_case_pattern_scenario() {
        let builder = ProfileBuilder::new(CasePatternSegmenter, ZeroCountPolicy::Na);
        let record = SequenceRecord::new("tx1", b"acgtACGTacgt".to_vec());
        let row = builder.build(&record).unwrap().unwrap();

        assert_eq!(row.gene_id, "tx1");
        for base in Base::ORDER {
            assert_eq!(row.cds.count(base), Some(1));
            assert_eq!(row.cds.ratio(base), Some(0.25));
            assert_eq!(row.five_utr.count(base), Some(1));
        }
    }

    #[rstest]
    fn test_all_uppercase_scenario() {
        let builder = ProfileBuilder::new(CasePatternSegmenter, ZeroCountPolicy::Na);
        let record = SequenceRecord::new("tx1", b"ACGTACGT".to_vec());
        let row = builder.build(&record).unwrap().unwrap();

        assert!(row.five_utr.is_all_na());
        assert!(row.three_utr.is_all_na());
        for base in Base::ORDER {
            assert_eq!(row.cds.count(base), Some(2));
            assert_eq!(row.cds.ratio(base), Some(0.25));
        }
    }

    #[rstest]
    fn test_exclusions_are_counted(annotated_records: Vec<SequenceRecord>) {
        let builder = ProfileBuilder::new(CoordinateSegmenter, ZeroCountPolicy::Na);
        let batch = builder.build_all(&annotated_records);

        let ids: Vec<&str> = batch.rows.iter().map(|r| r.gene_id.as_str()).collect();
        assert_eq!(ids, vec!["ok1", "ok2"]);
        assert_eq!(
            batch.summary,
            ProfileSummary {
                records: 5,
                emitted: 2,
                malformed: 2,
                unannotated: 1,
            }
        );
        assert_eq!(batch.summary.skipped(), 3);
    }

    #[rstest]
    fn test_inverted_bounds_increment_malformed_once() {
        let builder = ProfileBuilder::new(SegmentStrategy::Coordinates, ZeroCountPolicy::Na);
        let records =
            vec![SequenceRecord::new("inv", b"ACGTACGT".to_vec()).with_description("CDS=5-2")];

        let batch = builder.build_all(&records);
        assert!(batch.rows.is_empty());
        assert_eq!(batch.summary.malformed, 1);

        let single = builder.build(&records[0]);
        assert_eq!(
            single,
            Err(SegmentError::MalformedAnnotation { start: 5, end: 2, len: 8 })
        );
    }

    #[rstest]
    fn test_lengths_follow_segmentation(annotated_records: Vec<SequenceRecord>) {
        let builder = ProfileBuilder::new(SegmentStrategy::Coordinates, ZeroCountPolicy::Na);
        let batch = builder.lengths_all(&annotated_records);

        assert_eq!(batch.rows.len(), 2);
        assert_eq!(batch.rows[0].lengths.five_utr, 2);
        assert_eq!(batch.rows[0].lengths.cds, 5);
        assert_eq!(batch.rows[0].lengths.three_utr, 3);
        assert_eq!(batch.summary.malformed, 2);
    }

    #[rstest]
    fn test_profile_all_matches_separate_passes(annotated_records: Vec<SequenceRecord>) {
        let builder = ProfileBuilder::new(SegmentStrategy::Coordinates, ZeroCountPolicy::Na);
        let (composition, lengths) = builder
            .profile_all(&annotated_records)
            .unzip(|p| (p.composition, p.lengths));

        let separate = builder.build_all(&annotated_records);
        assert_eq!(composition.rows, separate.rows);
        assert_eq!(composition.summary, separate.summary);
        assert_eq!(lengths, builder.lengths_all(&annotated_records).rows);
    }

    #[rstest]
    fn test_rebuild_is_identical(annotated_records: Vec<SequenceRecord>) {
        let builder = ProfileBuilder::new(SegmentStrategy::Coordinates, ZeroCountPolicy::Na);
        let first = builder.build_all(&annotated_records);
        let second = builder.build_all(&annotated_records);
        assert_eq!(first.rows, second.rows);
        assert_eq!(first.summary, second.summary);
    }
}
