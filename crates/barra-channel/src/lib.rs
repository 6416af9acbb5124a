//! Demand-gated bar delivery for barra.
//!
//! This crate provides the delivery surface between the aggregator and
//! downstream consumers:
//!
//! - [`BarChannel`] - Broadcast channel with per-subscription demand accounting
//! - [`BarSubscriber`] - Consumer-side delivery hooks
//! - [`ChannelError`] - Flow-control rejections

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/barralabs/barra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod channel;
mod subscriber;

pub use channel::{BarChannel, ChannelError, SubscriptionId};
pub use subscriber::BarSubscriber;
