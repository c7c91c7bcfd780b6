//! Region segmentation of a single transcript.
//!
//! Two strategies cut a sequence into 5'UTR, CDS and 3'UTR:
//!
//! - [`CasePatternSegmenter`]: UTRs are written in lowercase, the CDS in
//!   uppercase (the convention of many transcript FASTA dumps).
//! - [`CoordinateSegmenter`]: the descriptor carries `CDS=start-end`,
//!   1-based and inclusive.
//!
//! Both implement [`Segmenter`], and [`SegmentStrategy`] picks one at runtime.

use std::ops::Range;
use std::str::FromStr;

use txprof_core::consts::CDS_KEY;
use txprof_core::models::{RegionTriple, SequenceRecord};
use txprof_core::SegmentStrategy;

use crate::errors::SegmentError;

/// Cuts one record into its three regions.
pub trait Segmenter: Send + Sync {
    /// Returns `Ok(None)` when the record carries no annotation this strategy
    /// can use; the caller decides whether to drop it.
    fn segment<'a>(
        &self,
        record: &'a SequenceRecord,
    ) -> Result<Option<RegionTriple<'a>>, SegmentError>;
}

///
/// Case-based segmentation.
///
/// Three independent scans over the sequence:
///
/// 1. 5'UTR: the run of lowercase letters at the very start.
/// 2. CDS: the *first* run of uppercase letters anywhere in the sequence.
/// 3. 3'UTR: the run of lowercase letters at the very end, never reaching back
///    into the 5'UTR run.
///
/// The scans assume the case partition is strictly `lower* UPPER* lower*`.
/// Anything else (e.g. `aaCCggTTaa`) is not rejected: the CDS is the first
/// uppercase run and interior segments are silently left out.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct CasePatternSegmenter;

impl CasePatternSegmenter {
    pub fn split(seq: &[u8]) -> RegionTriple<'_> {
        let five_end = seq
            .iter()
            .position(|b| !b.is_ascii_lowercase())
            .unwrap_or(seq.len());

        let cds = match seq.iter().position(u8::is_ascii_uppercase) {
            Some(cds_start) => {
                let run = seq[cds_start..]
                    .iter()
                    .position(|b| !b.is_ascii_uppercase())
                    .unwrap_or(seq.len() - cds_start);
                &seq[cds_start..cds_start + run]
            }
            None => &seq[..0],
        };

        // all-lowercase sequences belong to the 5'UTR alone
        let three_start = seq
            .iter()
            .rposition(|b| !b.is_ascii_lowercase())
            .map_or(0, |i| i + 1)
            .max(five_end);

        RegionTriple {
            five_utr: &seq[..five_end],
            cds,
            three_utr: &seq[three_start..],
        }
    }
}

impl Segmenter for CasePatternSegmenter {
    fn segment<'a>(
        &self,
        record: &'a SequenceRecord,
    ) -> Result<Option<RegionTriple<'a>>, SegmentError> {
        Ok(Some(Self::split(&record.seq)))
    }
}

///
/// CDS bounds as written in a descriptor: 1-based, inclusive.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdsBounds {
    pub start: usize,
    pub end: usize,
}

impl CdsBounds {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Bounds from the record's `CDS=` token, `None` when the token is absent.
    pub fn from_record(record: &SequenceRecord) -> Result<Option<Self>, SegmentError> {
        record.annotation(CDS_KEY).map(str::parse).transpose()
    }

    ///
    /// Convert to a 0-based half-open range over a sequence of length `len`.
    ///
    /// Fails when `start < 1`, `start > end` or `end > len`.
    ///
    pub fn to_range(&self, len: usize) -> Result<Range<usize>, SegmentError> {
        if self.start < 1 || self.start > self.end || self.end > len {
            return Err(SegmentError::MalformedAnnotation {
                start: self.start,
                end: self.end,
                len,
            });
        }
        Ok(self.start - 1..self.end)
    }
}

impl FromStr for CdsBounds {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || SegmentError::UnparseableAnnotation(s.to_string());
        let (start, end) = s.trim().split_once('-').ok_or_else(unparseable)?;
        let start = start.parse::<usize>().map_err(|_| unparseable())?;
        let end = end.parse::<usize>().map_err(|_| unparseable())?;
        Ok(CdsBounds { start, end })
    }
}

///
/// Coordinate-based segmentation from a `CDS=start-end` descriptor token.
///
/// 5'UTR is everything before the CDS, 3'UTR everything after it, so the
/// three regions always concatenate back to the full sequence.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateSegmenter;

impl CoordinateSegmenter {
    pub fn split(seq: &[u8], bounds: CdsBounds) -> Result<RegionTriple<'_>, SegmentError> {
        let cds = bounds.to_range(seq.len())?;
        Ok(RegionTriple {
            five_utr: &seq[..cds.start],
            cds: &seq[cds.clone()],
            three_utr: &seq[cds.end..],
        })
    }
}

impl Segmenter for CoordinateSegmenter {
    fn segment<'a>(
        &self,
        record: &'a SequenceRecord,
    ) -> Result<Option<RegionTriple<'a>>, SegmentError> {
        match CdsBounds::from_record(record)? {
            Some(bounds) => Self::split(&record.seq, bounds).map(Some),
            None => Ok(None),
        }
    }
}

impl Segmenter for SegmentStrategy {
    fn segment<'a>(
        &self,
        record: &'a SequenceRecord,
    ) -> Result<Option<RegionTriple<'a>>, SegmentError> {
        match self {
            SegmentStrategy::CasePattern => CasePatternSegmenter.segment(record),
            SegmentStrategy::Coordinates => CoordinateSegmenter.segment(record),
        }
    }
}
