//! Streaming tick-to-OHLC bar aggregation with demand-gated delivery.
//!
//! This is a facade crate that re-exports functionality from the barra
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use barra_lib::prelude::*;
//! use chrono::{TimeDelta, TimeZone, Utc};
//!
//! struct Printer;
//!
//! impl BarSubscriber for Printer {
//!     fn on_bar(&mut self, bar: Bar) {
//!         println!("{} O:{} H:{} L:{} C:{}", bar.start, bar.open, bar.high, bar.low, bar.close);
//!     }
//! }
//!
//! fn main() -> Result<(), DurationError> {
//!     let mut aggregator = BarAggregator::new(TimeDelta::minutes(5))?;
//!     let channel = aggregator.channel();
//!     let id = channel.subscribe(Box::new(Printer));
//!
//!     let start = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
//!     aggregator.update(start, 10.0);
//!     aggregator.update(start + TimeDelta::minutes(1), 12.0);
//!     aggregator.update(start + TimeDelta::minutes(5), 11.0);
//!
//!     // One bar is buffered; deliver it
//!     let delivered = channel.request(id, 1).expect("positive demand");
//!     assert_eq!(delivered, 1);
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/barralabs/barra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use barra_types::{Bar, DurationError, Tick};

// Re-export delivery
pub use barra_channel::{BarChannel, BarSubscriber, ChannelError, SubscriptionId};

// Re-export aggregation
pub use barra_aggregate::BarAggregator;

/// Prelude module for convenient imports.
///
/// ```
/// use barra_lib::prelude::*;
/// ```
pub mod prelude {
    pub use barra_aggregate::BarAggregator;
    pub use barra_channel::{BarChannel, BarSubscriber, ChannelError, SubscriptionId};
    pub use barra_types::{Bar, DurationError, Tick};
}
