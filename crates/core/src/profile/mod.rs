//! Signed-in user profile and avatar

pub mod avatar;
pub mod ports;
pub mod service;

pub use avatar::AvatarService;
pub use service::ProfileService;
