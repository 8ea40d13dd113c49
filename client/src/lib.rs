//! Typed gateway to the staking contracts.
//!
//! Everything the dashboard knows about the outside world goes through the
//! [`ContractGateway`] trait: contract reads, write submissions, event
//! history, and the latest block number. [`RpcGateway`] implements it over
//! JSON/HTTP against a node; test doubles substitute it in the `nullables`
//! crate. [`ReadingWatcher`] drives per-block refreshes.

pub mod error;
pub mod gateway;
pub mod price;
pub mod rpc;
pub mod watcher;

pub use error::ClientError;
pub use gateway::{ContractGateway, ContractId, EventKind, LogEntry};
pub use price::{format_usd, HttpPriceSource, PriceSource};
pub use rpc::RpcGateway;
pub use watcher::{ReadingField, ReadingWatcher, WatchUpdate};
