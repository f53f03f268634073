use thiserror::Error;

/// Top-level error type for the tubetrain geometry core.
#[derive(Debug, Error)]
pub enum TubetrainError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while validating construction-time configuration.
///
/// Per-step queries (`pose_at`, `step`, containment tests) are pure
/// arithmetic over reals and never fail; every invalid input is rejected
/// here, before any query can run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("segment {index}: {reason}")]
    InvalidSegment { index: usize, reason: String },

    #[error("path must contain at least one segment")]
    EmptyPath,

    #[error("invalid cart dimensions: {0}")]
    InvalidCartDimensions(String),

    #[error("invalid coupler layout: {0}")]
    InvalidCouplerLayout(String),

    #[error("tube sampling needs at least 2 samples, got {0}")]
    InvalidSampling(usize),

    #[error("tube half-width must be positive, got {0}")]
    InvalidTubeWidth(f64),
}

/// Convenience type alias for results using [`TubetrainError`].
pub type Result<T> = std::result::Result<T, TubetrainError>;
