//! Shared utilities for the stakeview dashboard.

pub mod logging;
pub mod time;

pub use logging::{init_tracing, LogFormat};
pub use time::humanize_seconds;
