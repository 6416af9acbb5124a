//! Error types for barra.

use chrono::TimeDelta;
use thiserror::Error;

/// Error for an invalid bar duration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The configured bar duration is zero or negative.
    #[error("bar duration must be positive, got {duration}")]
    NonPositive {
        /// The rejected duration.
        duration: TimeDelta,
    },
}
