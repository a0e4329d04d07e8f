//! Access token acquisition

pub mod exchange;
pub mod ports;

pub use exchange::TokenExchangeService;
