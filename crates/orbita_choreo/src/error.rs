//! Error types for timeline construction and config loading

use thiserror::Error;

/// A segment list that cannot form a valid timeline.
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("timeline has no segments")]
    Empty,

    #[error("segment {index} boundary {until} is not in (0, 1]")]
    BoundaryOutOfRange { index: usize, until: f32 },

    #[error("segment {index} boundary {until} does not ascend past {previous}")]
    BoundaryNotAscending {
        index: usize,
        until: f32,
        previous: f32,
    },

    #[error("final segment boundary is {last}, expected exactly 1.0")]
    Unterminated { last: f32 },
}

/// Failure to turn a `choreography.toml` into a timeline.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read choreography config")]
    Io(#[from] std::io::Error),

    #[error("failed to parse choreography config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid timeline in choreography config")]
    Invalid(#[from] TimelineError),
}
