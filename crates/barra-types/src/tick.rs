//! Tick data representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single tick representing a price observation.
///
/// Ticks are consumed by the aggregator and discarded after being folded
/// into the current bar; they are never retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Timestamp of the observation (UTC).
    pub timestamp: DateTime<Utc>,
    /// Observed price.
    pub price: f64,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }
}
