use thiserror::Error;

/// Top-level error type for the region-partition engine.
#[derive(Debug, Error)]
pub enum RegionsplitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Partition(#[from] PartitionError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// User-facing rejections of a drawn boundary.
///
/// All of these are recoverable: the host shows a message and lets the user
/// draw again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("curve must start and end outside the square")]
    InvalidBounds,

    #[error("curve intersects itself")]
    SelfIntersection,

    #[error("boundary must cross the square's perimeter exactly twice, found {found}")]
    InvalidIntersectionCount { found: usize },

    #[error("boundary has zero length")]
    DegenerateBoundary,
}

/// Internal inconsistencies of the region partitioner.
#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("boundary endpoints are not neighbours after angular sort (indices {start} and {end} of {len})")]
    SpliceFailed { start: usize, end: usize, len: usize },

    #[error("boundary endpoint missing from sorted polygon")]
    EndpointMissing,
}

/// Errors loading a level fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed fixture: {0}")]
    Json(#[from] serde_json::Error),

    #[error("best boundary needs at least 2 points, got {0}")]
    BestTooShort(usize),
}

/// Errors loading or validating the engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`RegionsplitError`].
pub type Result<T> = std::result::Result<T, RegionsplitError>;
