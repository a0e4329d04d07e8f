//! # ImageFeed Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for token persistence and the photo API
//! - The services the front end drives: token exchange, photo list,
//!   profile/avatar and session
//!
//! ## Architecture Principles
//! - Only depends on `imagefeed-common` and `imagefeed-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

pub mod auth;
pub mod outcome;
pub mod photos;
pub mod profile;
pub mod session;

pub use auth::ports::{TokenExchanger, TokenStorage};
pub use auth::TokenExchangeService;
pub use outcome::FlightOutcome;
pub use photos::ports::PhotoSource;
pub use photos::{PageLoad, PhotoListService};
pub use profile::ports::ProfileSource;
pub use profile::{AvatarService, ProfileService};
pub use session::SessionService;
