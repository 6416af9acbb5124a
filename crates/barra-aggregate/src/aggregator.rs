//! Streaming tick-to-bar aggregation.

use barra_channel::BarChannel;
use barra_types::{Bar, DurationError, Tick};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, trace};

/// Streaming bar aggregator.
///
/// Folds a time-ordered tick stream into bars of fixed duration, publishing
/// each bar to the aggregator's [`BarChannel`] the moment a later tick lands
/// on or beyond its boundary.
#[derive(Debug)]
pub struct BarAggregator {
    duration: TimeDelta,
    current: Option<BarBuilder>,
    channel: BarChannel,
}

impl BarAggregator {
    /// Creates a new aggregator producing bars of the given duration.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError::NonPositive`] if `duration` is zero or
    /// negative.
    pub fn new(duration: TimeDelta) -> Result<Self, DurationError> {
        if duration <= TimeDelta::zero() {
            return Err(DurationError::NonPositive { duration });
        }
        Ok(Self {
            duration,
            current: None,
            channel: BarChannel::new(),
        })
    }

    /// Returns a handle to the channel finalized bars are published on.
    #[must_use]
    pub fn channel(&self) -> BarChannel {
        self.channel.clone()
    }

    /// Returns the bar duration being aggregated to.
    #[must_use]
    pub const fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Folds one price observation into the stream.
    ///
    /// While `timestamp - start` is strictly less than the bar duration the
    /// price updates the current bar in place. Once the elapsed span reaches
    /// the duration (equality included) the current bar is finalized and
    /// published, and a new bar opens at `timestamp`. Only that path
    /// publishes; the in-progress bar is never emitted.
    ///
    /// A timestamp earlier than the current bar's start yields a negative
    /// elapsed span and therefore folds into the current bar.
    pub fn update(&mut self, timestamp: DateTime<Utc>, price: f64) {
        match self.current.take() {
            Some(mut builder) if timestamp - builder.start < self.duration => {
                // Same bar, update it
                builder.update(price);
                trace!(start = %builder.start, price, "tick folded");
                self.current = Some(builder);
            }
            Some(builder) => {
                // Boundary reached, finish the old bar and open a new one
                let completed = builder.finish();
                debug!(start = %completed.start, close = completed.close, "bar finalized");
                self.channel.publish(completed);
                self.current = Some(BarBuilder::new(timestamp, price));
            }
            None => {
                // First tick
                self.current = Some(BarBuilder::new(timestamp, price));
            }
        }
    }

    /// Folds a [`Tick`] into the stream.
    pub fn process(&mut self, tick: Tick) {
        self.update(tick.timestamp, tick.price);
    }

    /// Returns a snapshot of the in-progress bar, if any.
    ///
    /// The snapshot never traverses the channel.
    #[must_use]
    pub fn current(&self) -> Option<Bar> {
        self.current.as_ref().map(BarBuilder::snapshot)
    }

    /// Finishes aggregation, returning any remaining partial bar.
    ///
    /// The partial bar is handed to the caller only; it is not published.
    #[must_use]
    pub fn finish(self) -> Option<Bar> {
        self.current.map(BarBuilder::finish)
    }
}

/// Builder for the in-progress bar.
#[derive(Debug)]
struct BarBuilder {
    start: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

impl BarBuilder {
    /// Creates a new builder from the opening tick.
    const fn new(start: DateTime<Utc>, price: f64) -> Self {
        Self {
            start,
            open: price,
            high: price,
            low: price,
            close: price,
        }
    }

    /// Folds a price into the bar. `start` and `open` are untouched.
    fn update(&mut self, price: f64) {
        self.high = self.high.max(price);
        self.low = self.low.min(price);
        self.close = price;
    }

    /// Finishes building and returns the immutable bar.
    const fn finish(self) -> Bar {
        Bar::new(self.start, self.open, self.high, self.low, self.close)
    }

    /// Returns the bar as it currently stands.
    const fn snapshot(&self) -> Bar {
        Bar::new(self.start, self.open, self.high, self.low, self.close)
    }
}
