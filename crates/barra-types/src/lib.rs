//! Core types for barra bar aggregation.
//!
//! This crate provides the fundamental data structures used throughout barra:
//!
//! - [`Tick`] - A single timestamped price observation
//! - [`Bar`] - An immutable OHLC bar covering one time span
//! - [`DurationError`] - Rejection of a non-positive bar duration

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/barralabs/barra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod error;
mod tick;

pub use bar::Bar;
pub use error::DurationError;
pub use tick::Tick;
