//! Domain types and models

pub mod auth;
pub mod photo;
pub mod profile;

pub use auth::AccessToken;
pub use photo::{Photo, PhotoSize};
pub use profile::Profile;
