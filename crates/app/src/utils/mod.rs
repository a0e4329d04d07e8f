//! Logging and presentation helpers

pub mod logging;
pub mod messages;
