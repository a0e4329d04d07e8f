//! Modular common utilities shared across ImageFeed crates.
//!
//! Nothing in here knows about photos or the photo API; these are the generic
//! building blocks the services are assembled from.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: OAuth authorization URL building and redirect parsing
//! - `runtime`: async infrastructure (change notification, single-flight,
//!   clocks)
//! - `platform`: platform integrations (keychain)
//! - `observability`: optional tracing (implied by `runtime`)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod auth;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod events;
#[cfg(feature = "runtime")]
pub mod sync;
#[cfg(feature = "runtime")]
pub mod time;

// Platform tier
// -------------------------------------------------------------------
#[cfg(feature = "platform")]
pub mod security;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(feature = "test-utils")]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use auth::{build_authorization_url, parse_redirect, AuthorizeRequest, RedirectOutcome};
#[cfg(feature = "runtime")]
pub use events::{ChangeNotifier, SubscriptionId};
#[cfg(feature = "platform")]
pub use security::{KeychainError, KeychainProvider};
#[cfg(feature = "runtime")]
pub use sync::{Admission, DuplicatePolicy, FlightTicket, SingleFlight};
#[cfg(feature = "runtime")]
pub use time::{Clock, SystemClock};
