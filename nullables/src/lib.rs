//! Nullable infrastructure for deterministic testing.
//!
//! The external world is reached through the `stakeview-client` traits;
//! this crate provides test-friendly implementations that:
//! - Serve scripted values instead of touching the network
//! - Record every submission for assertions
//! - Fail on demand to drive error paths
//!
//! Usage: swap the real gateway/price source for nullables in tests.

pub mod gateway;
pub mod price;

pub use gateway::{NullGateway, RecordedSubmission};
pub use price::NullPriceSource;
