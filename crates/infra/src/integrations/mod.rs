//! External service integrations

pub mod unsplash;
