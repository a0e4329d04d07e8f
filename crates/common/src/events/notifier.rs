//! Observer registry

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Fan-out of change events to registered callbacks.
///
/// `notify` snapshots the observer list and releases the lock before calling
/// out, so a callback may subscribe, unsubscribe or read the service that
/// notified it.
pub struct ChangeNotifier<T> {
    observers: RwLock<Vec<(SubscriptionId, Observer<T>)>>,
    next_id: AtomicU64,
}

impl<T> ChangeNotifier<T> {
    pub fn new() -> Self {
        Self { observers: RwLock::new(Vec::new()), next_id: AtomicU64::new(1) }
    }

    /// Register a callback invoked for every subsequent notification.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, Arc::new(observer)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Deliver `value` to every observer registered at the time of the call.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<Observer<T>> =
            self.observers.read().iter().map(|(_, observer)| Arc::clone(observer)).collect();

        trace!(observers = snapshot.len(), "delivering change notification");
        for observer in snapshot {
            observer(value);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }
}

impl<T> Default for ChangeNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ChangeNotifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier").field("observers", &self.observer_count()).finish()
    }
}
