//! The narrow typed adapter the rest of the workspace talks to.
//!
//! Consumers never see raw JSON: reads come back as [`ContractValue`] and
//! go through the normalization boundary in `stakeview-types`; event logs
//! come back as [`LogEntry`] lists for the ledger to decode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

use stakeview_types::{ContractValue, TokenAmount, TxHash};

use crate::error::ClientError;

/// The two contracts the dashboard observes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractId {
    /// The crowd-staking contract: threshold, deadline, balances, actions.
    Staker,
    /// The escrow contract funds are forwarded to on success.
    Escrow,
}

impl ContractId {
    /// Wire name used in gateway requests.
    pub fn name(&self) -> &'static str {
        match self {
            ContractId::Staker => "staker",
            ContractId::Escrow => "escrow",
        }
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The three event streams the Staker contract emits.
///
/// Doubles as the kind tag on decoded ledger entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Stake,
    Execute,
    Withdraw,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Stake, EventKind::Execute, EventKind::Withdraw];

    /// The event name as emitted by the contract.
    pub fn event_name(&self) -> &'static str {
        match self {
            EventKind::Stake => "Stake",
            EventKind::Execute => "Execute",
            EventKind::Withdraw => "Withdraw",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// One decoded-enough log entry from an event history fetch.
///
/// Args stay loosely typed; the ledger applies the per-event decoding
/// convention. Block number and transaction hash may be absent for
/// entries the node has not fully indexed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub args: Vec<ContractValue>,
    #[serde(default)]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
}

/// Gateway to the chain: contract reads, write submissions, event history.
///
/// All methods are async and fallible; implementations map transport
/// failures into [`ClientError`] with human-readable context.
pub trait ContractGateway: Send + Sync {
    /// Read a named contract value. Loosely typed by design; callers
    /// normalize via the `ContractValue` conversions.
    fn read_value(
        &self,
        contract: ContractId,
        function: &str,
        args: &[ContractValue],
    ) -> impl Future<Output = Result<ContractValue, ClientError>> + Send;

    /// Native-currency balance held by a contract.
    fn balance_of(
        &self,
        contract: ContractId,
    ) -> impl Future<Output = Result<ContractValue, ClientError>> + Send;

    /// Submit a state-changing call, optionally attaching transferred value.
    fn submit(
        &self,
        contract: ContractId,
        function: &str,
        args: &[ContractValue],
        value: Option<TokenAmount>,
    ) -> impl Future<Output = Result<TxHash, ClientError>> + Send;

    /// Full history of one event stream, oldest first as delivered.
    fn event_history(
        &self,
        contract: ContractId,
        event: EventKind,
    ) -> impl Future<Output = Result<Vec<LogEntry>, ClientError>> + Send;

    /// Number of the latest block the node has seen.
    fn latest_block(&self) -> impl Future<Output = Result<u64, ClientError>> + Send;
}
