//! Testing utilities and helpers
//!
//! - **[`observers`]**: record notifications delivered by a `ChangeNotifier`
//! - **[`temp`]**: temporary directory helpers
//! - **[`time`]**: controllable clock

pub mod observers;
pub mod temp;
pub mod time;

pub use observers::Recorder;
pub use temp::TempDir;
pub use time::MockClock;
