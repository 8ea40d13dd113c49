//! Decoded staking events.

use serde::Serialize;

use stakeview_client::{EventKind, LogEntry};
use stakeview_types::{AccountAddress, TokenAmount, TxHash};

/// One decoded entry in the unified ledger.
///
/// Immutable once observed; ordering key is the block number.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StakerEvent {
    pub kind: EventKind,
    pub actor: Option<AccountAddress>,
    pub amount: TokenAmount,
    pub block_number: Option<u64>,
    pub tx_hash: Option<TxHash>,
}

impl StakerEvent {
    /// Decode a raw log entry per the contract's event conventions:
    /// Stake and Withdraw carry `(actor, amount)`, Execute carries
    /// `(amount)` and no actor.
    ///
    /// Missing or malformed args fall back to no actor / zero amount —
    /// a partially indexed entry still gets a row.
    pub fn decode(kind: EventKind, entry: &LogEntry) -> Self {
        let (actor, amount) = match kind {
            EventKind::Stake | EventKind::Withdraw => {
                let actor = entry
                    .args
                    .first()
                    .and_then(|v| v.as_text())
                    .map(AccountAddress::new);
                let amount = entry
                    .args
                    .get(1)
                    .map(|v| v.as_amount())
                    .unwrap_or(TokenAmount::ZERO);
                (actor, amount)
            }
            EventKind::Execute => {
                let amount = entry
                    .args
                    .first()
                    .map(|v| v.as_amount())
                    .unwrap_or(TokenAmount::ZERO);
                (None, amount)
            }
        };

        Self {
            kind,
            actor,
            amount,
            block_number: entry.block_number,
            tx_hash: entry.transaction_hash.clone().map(TxHash::new),
        }
    }

    /// Sort key: absent block numbers sort as zero (oldest).
    pub fn order_key(&self) -> u64 {
        self.block_number.unwrap_or(0)
    }
}
