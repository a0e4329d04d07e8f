//! Paginated photo feed

pub mod ports;
pub mod service;

pub use service::{PageLoad, PhotoListService};
