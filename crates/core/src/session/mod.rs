//! Session lifecycle

mod service;

pub use service::SessionService;
