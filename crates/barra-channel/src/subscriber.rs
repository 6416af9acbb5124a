//! Consumer-side delivery hooks.

use barra_types::Bar;

use crate::SubscriptionId;

/// Consumer side of a [`BarChannel`](crate::BarChannel).
///
/// Hooks run synchronously inside channel calls. `on_bar` runs while the
/// channel's internal lock is held; implementations must not call back into
/// the channel from it.
pub trait BarSubscriber: Send {
    /// Called once, before the [`subscribe`](crate::BarChannel::subscribe)
    /// call that registered this consumer returns. The new subscription holds
    /// zero outstanding demand.
    fn on_subscribe(&mut self, _id: SubscriptionId) {}

    /// Called once per delivered bar, in finalize order.
    fn on_bar(&mut self, bar: Bar);
}
