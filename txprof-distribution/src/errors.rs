use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    #[error("No population rows left after filtering ({rows} read), density is undefined")]
    EmptyPopulation { rows: usize },

    #[error("Bin count must be at least 1, got {0}")]
    InvalidBinCount(u32),

    #[error("Cubic spline needs at least {required} points, got {points}")]
    DegenerateBinning { points: usize, required: usize },

    #[error("Spline knots must be finite and strictly increasing")]
    SingularSpline,
}
