//! Typed, synchronous change notification
//!
//! Each service owns one [`ChangeNotifier`] per kind of change it publishes.
//! Observers are plain callbacks; delivery happens on the caller's thread,
//! once per `notify`, with nothing queued.

mod notifier;

pub use notifier::{ChangeNotifier, SubscriptionId};
