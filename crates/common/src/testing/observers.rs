//! Notification recording
//!
//! ```
//! use imagefeed_common::events::ChangeNotifier;
//! use imagefeed_common::testing::Recorder;
//!
//! let notifier = ChangeNotifier::<u32>::new();
//! let recorder = Recorder::attach(&notifier);
//! notifier.notify(&7);
//! assert_eq!(recorder.events(), vec![7]);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::events::ChangeNotifier;

/// Collects every value delivered by a [`ChangeNotifier`].
#[derive(Debug)]
pub struct Recorder<T> {
    events: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    /// Subscribe a new recorder to `notifier`.
    pub fn attach(notifier: &ChangeNotifier<T>) -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        notifier.subscribe(move |value: &T| sink.lock().push(value.clone()));
        Self { events }
    }

    pub fn events(&self) -> Vec<T> {
        self.events.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.events.lock().len()
    }

    pub fn last(&self) -> Option<T> {
        self.events.lock().last().cloned()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self { events: Arc::clone(&self.events) }
    }
}
