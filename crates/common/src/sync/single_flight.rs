//! Single-flight slot
//!
//! A [`SingleFlight`] holds at most one pending operation:
//!
//! ```text
//! Idle ──begin(k)──▶ Pending(k, gen) ──commit / drop──▶ Idle
//!                          │
//!                   begin(k') (supersede)
//!                          ▼
//!                  Pending(k', gen+1)   old ticket cancelled
//! ```
//!
//! The caller runs its future through [`FlightTicket::run`], which races it
//! against the ticket's cancellation token. A superseded call resolves to
//! `None` and, since [`FlightTicket::commit`] re-checks the generation under
//! the slot lock, can never publish a result after a newer call took over.
//!
//! ```
//! # tokio_test::block_on(async {
//! use imagefeed_common::sync::{Admission, DuplicatePolicy, SingleFlight};
//!
//! let flight = SingleFlight::new(DuplicatePolicy::Reject);
//! let Admission::Started(ticket) = flight.begin("code-a".to_string()) else { unreachable!() };
//! assert!(matches!(flight.begin("code-a".to_string()), Admission::Rejected));
//!
//! let value = ticket.run(async { 42 }).await;
//! assert_eq!(value, Some(42));
//! assert_eq!(ticket.commit(|| value), Some(Some(42)));
//! assert!(!flight.is_pending());
//! # });
//! ```

use std::fmt;
use std::future::Future;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// What `begin` does when an operation is already pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Same key: reject the newcomer, leave the pending call alone.
    /// Different key: supersede.
    Reject,
    /// Always supersede the pending call.
    Supersede,
}

enum FlightState<K> {
    Idle,
    Pending { key: K, generation: u64, cancel: CancellationToken },
}

struct Slot<K> {
    state: FlightState<K>,
    next_generation: u64,
}

impl<K> Slot<K> {
    fn is_current(&self, generation: u64) -> bool {
        matches!(self.state, FlightState::Pending { generation: current, .. } if current == generation)
    }
}

/// At most one pending operation keyed by `K`.
pub struct SingleFlight<K> {
    slot: Mutex<Slot<K>>,
    policy: DuplicatePolicy,
}

/// Result of [`SingleFlight::begin`].
pub enum Admission<'a, K> {
    Started(FlightTicket<'a, K>),
    /// An operation with the same key is already pending.
    Rejected,
}

/// Ownership of the pending slot for one call.
///
/// Dropping a ticket that is still current returns the slot to idle.
pub struct FlightTicket<'a, K> {
    flight: &'a SingleFlight<K>,
    generation: u64,
    cancel: CancellationToken,
}

impl<K: PartialEq> SingleFlight<K> {
    /// Try to take the slot for `key`.
    ///
    /// A pending call that gets superseded has its cancellation token
    /// triggered before this returns.
    pub fn begin(&self, key: K) -> Admission<'_, K> {
        let mut slot = self.slot.lock();

        if let FlightState::Pending { key: pending, generation, cancel } = &slot.state {
            if self.policy == DuplicatePolicy::Reject && *pending == key {
                debug!(generation, "duplicate request rejected");
                return Admission::Rejected;
            }
            debug!(generation, "superseding pending request");
            cancel.cancel();
        }

        let generation = slot.next_generation;
        slot.next_generation += 1;
        let cancel = CancellationToken::new();
        slot.state = FlightState::Pending { key, generation, cancel: cancel.clone() };

        Admission::Started(FlightTicket { flight: self, generation, cancel })
    }
}

impl<K> SingleFlight<K> {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self { slot: Mutex::new(Slot { state: FlightState::Idle, next_generation: 1 }), policy }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.slot.lock().state, FlightState::Pending { .. })
    }

    /// Cancel whatever is pending and return to idle.
    pub fn cancel_pending(&self) {
        let mut slot = self.slot.lock();
        if let FlightState::Pending { cancel, .. } = &slot.state {
            cancel.cancel();
        }
        slot.state = FlightState::Idle;
    }
}

impl<K> fmt::Debug for SingleFlight<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleFlight")
            .field("policy", &self.policy)
            .field("pending", &self.is_pending())
            .finish()
    }
}

impl<K> FlightTicket<'_, K> {
    /// Drive `fut` unless this call gets superseded first.
    ///
    /// Returns `None` when cancelled; `fut` is dropped at that point.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => None,
            output = fut => Some(output),
        }
    }

    /// Whether a newer call has taken the slot.
    pub fn is_superseded(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Publish the result of this call and return the slot to idle.
    ///
    /// `publish` runs under the slot lock, only while this ticket is still
    /// current. It must not await and should stay short: `begin` and
    /// `is_pending` wait on the same lock. Returns `None` if the call was
    /// superseded in the meantime.
    pub fn commit<R>(self, publish: impl FnOnce() -> R) -> Option<R> {
        let mut slot = self.flight.slot.lock();
        if !slot.is_current(self.generation) {
            return None;
        }
        let output = publish();
        slot.state = FlightState::Idle;
        drop(slot);
        Some(output)
    }
}

impl<K> Drop for FlightTicket<'_, K> {
    fn drop(&mut self) {
        let mut slot = self.flight.slot.lock();
        if slot.is_current(self.generation) {
            slot.state = FlightState::Idle;
        }
    }
}
