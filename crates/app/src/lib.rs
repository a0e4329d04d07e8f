//! # ImageFeed App
//!
//! Application layer - commands and the CLI entry point.
//!
//! This crate contains:
//! - Commands (front end → services bridge)
//! - Application context (dependency injection)
//! - Logging setup and user-facing error messages
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

pub use context::AppContext;
