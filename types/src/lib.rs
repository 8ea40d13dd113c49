//! Fundamental types for the stakeview dashboard.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: token amounts, loosely-typed contract values and their
//! normalization boundary, account addresses, and transaction hashes.

pub mod address;
pub mod amount;
pub mod hash;
pub mod value;

pub use address::AccountAddress;
pub use amount::{AmountParseError, TokenAmount};
pub use hash::TxHash;
pub use value::ContractValue;
