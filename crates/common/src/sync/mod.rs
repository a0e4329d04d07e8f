//! Concurrency primitives
//!
//! - [`SingleFlight`]: at most one in-progress operation, with duplicate
//!   rejection or supersede-by-newer semantics.

mod single_flight;

pub use single_flight::{Admission, DuplicatePolicy, FlightTicket, SingleFlight};
