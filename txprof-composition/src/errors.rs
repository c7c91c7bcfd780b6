use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("Malformed CDS annotation {start}-{end} for a sequence of length {len}")]
    MalformedAnnotation { start: usize, end: usize, len: usize },

    #[error("Unparseable CDS annotation: `{0}`")]
    UnparseableAnnotation(String),
}
