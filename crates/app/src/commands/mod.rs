//! Commands driven by the CLI
//!
//! Each command runs against an [`AppContext`](crate::AppContext) and returns
//! domain results; rendering is left to the caller.

pub mod auth;
pub mod feed;
pub mod profile;

pub use auth::{authorization_url, login, logout, LoginOutcome};
pub use feed::{load_feed, set_like};
pub use profile::{show_profile, ProfileView};
