//! OHLC bar data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable OHLC bar.
///
/// A bar summarises every price observed within one time span. Once built it
/// is never mutated; only the aggregator's builder produces one, which keeps
/// `low <= open <= high` and `low <= close <= high` true by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar open time (timestamp of the tick that opened the bar).
    pub start: DateTime<Utc>,
    /// Opening price (first tick folded into the bar).
    pub open: f64,
    /// Highest price during the span.
    pub high: f64,
    /// Lowest price during the span.
    pub low: f64,
    /// Closing price (last tick folded into the bar).
    pub close: f64,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            start,
            open,
            high,
            low,
            close,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) bar.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Returns the typical price ((high + low + close) / 3).
    #[must_use]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}
