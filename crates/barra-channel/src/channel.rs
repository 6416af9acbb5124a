//! Broadcast channel with per-subscription demand accounting.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use barra_types::Bar;
use thiserror::Error;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::BarSubscriber;

/// Identifier of one subscription on a [`BarChannel`].
pub type SubscriptionId = Uuid;

/// Errors for flow-control violations on a [`BarChannel`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// `request` was called with zero demand.
    #[error("requested demand must be positive")]
    ZeroDemand,

    /// The subscription id is not registered on this channel.
    #[error("unknown subscription: {0}")]
    UnknownSubscription(SubscriptionId),
}

/// Broadcast channel delivering finalized bars under subscriber demand.
///
/// Every subscription sees every published bar, in finalize order and at most
/// once. The channel buffers bars without limit, but never pushes more bars
/// to a subscription than its outstanding demand; one subscription's unmet
/// demand never delays delivery to another.
///
/// The handle is cheap to clone; clones share the same delivery state.
#[derive(Clone, Default)]
pub struct BarChannel {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    slots: Vec<SubscriberSlot>,
}

struct SubscriberSlot {
    id: SubscriptionId,
    consumer: Box<dyn BarSubscriber>,
    buffer: VecDeque<Bar>,
    demand: u64,
}

impl SubscriberSlot {
    /// Delivers buffered bars, oldest first, while demand remains.
    fn drain(&mut self) -> usize {
        let mut delivered = 0;
        while self.demand > 0 {
            let Some(bar) = self.buffer.pop_front() else {
                break;
            };
            self.demand -= 1;
            delivered += 1;
            trace!(subscription = %self.id, start = %bar.start, "delivering bar");
            self.consumer.on_bar(bar);
        }
        delivered
    }
}

impl BarChannel {
    /// Creates a new channel with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a consumer and returns its subscription id.
    ///
    /// The consumer's [`on_subscribe`](BarSubscriber::on_subscribe) hook runs
    /// before this call returns. The new subscription holds zero outstanding
    /// demand, so nothing is delivered until [`request`](Self::request).
    pub fn subscribe(&self, mut consumer: Box<dyn BarSubscriber>) -> SubscriptionId {
        let id = Uuid::new_v4();
        consumer.on_subscribe(id);
        self.lock().slots.push(SubscriberSlot {
            id,
            consumer,
            buffer: VecDeque::new(),
            demand: 0,
        });
        debug!(subscription = %id, "subscriber registered");
        id
    }

    /// Removes a subscription, dropping any bars still buffered for it.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::UnknownSubscription`] for an unregistered id.
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<(), ChannelError> {
        let mut inner = self.lock();
        let index = inner
            .slots
            .iter()
            .position(|slot| slot.id == id)
            .ok_or(ChannelError::UnknownSubscription(id))?;
        let slot = inner.slots.remove(index);
        debug!(subscription = %id, undelivered = slot.buffer.len(), "subscriber removed");
        Ok(())
    }

    /// Adds `n` to the subscription's outstanding demand, then delivers up to
    /// `n` already-buffered bars immediately, oldest first.
    ///
    /// Returns the number of bars delivered by this call; demand not consumed
    /// here is held for future publishes.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::ZeroDemand`] if `n` is zero (no state change)
    /// and [`ChannelError::UnknownSubscription`] for an unregistered id.
    pub fn request(&self, id: SubscriptionId, n: u64) -> Result<usize, ChannelError> {
        if n == 0 {
            return Err(ChannelError::ZeroDemand);
        }
        let mut inner = self.lock();
        let slot = inner
            .slots
            .iter_mut()
            .find(|slot| slot.id == id)
            .ok_or(ChannelError::UnknownSubscription(id))?;
        slot.demand = slot.demand.saturating_add(n);
        Ok(slot.drain())
    }

    /// Publishes a finalized bar to every subscription.
    ///
    /// The producer side of the channel. The bar is appended to each
    /// subscription's buffer, then subscriptions holding positive demand are
    /// drained synchronously within this call.
    pub fn publish(&self, bar: Bar) {
        let mut inner = self.lock();
        debug!(start = %bar.start, subscribers = inner.slots.len(), "publishing bar");
        for slot in &mut inner.slots {
            slot.buffer.push_back(bar);
            slot.drain();
        }
    }

    /// Returns the number of active subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock().slots.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicking subscriber callback poisons the lock but leaves the
        // delivery state consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for BarChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarChannel")
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}
