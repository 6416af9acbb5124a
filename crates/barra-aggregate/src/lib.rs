//! Tick-to-bar aggregation for barra.
//!
//! This crate provides the streaming aggregation core:
//!
//! - [`BarAggregator`] - Folds ordered ticks into fixed-duration bars and
//!   publishes each finalized bar to its [`BarChannel`](barra_channel::BarChannel)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/barralabs/barra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;

pub use aggregator::BarAggregator;
