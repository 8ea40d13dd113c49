//! The ledger view: source snapshots, loading latch, filter, display rows.

use serde::{Deserialize, Serialize};

use stakeview_client::{EventKind, LogEntry};

use crate::event::StakerEvent;
use crate::merge::merge_events;

/// Selectable event filter. A pure projection over the merged sequence;
/// the underlying merge is never affected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventFilter {
    #[default]
    All,
    Stake,
    Execute,
    Withdraw,
}

impl EventFilter {
    pub fn matches(&self, kind: EventKind) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Stake => kind == EventKind::Stake,
            EventFilter::Execute => kind == EventKind::Execute,
            EventFilter::Withdraw => kind == EventKind::Withdraw,
        }
    }

    /// Parse a query-string value; anything unrecognized selects All.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "stake" => EventFilter::Stake,
            "execute" => EventFilter::Execute,
            "withdraw" => EventFilter::Withdraw,
            _ => EventFilter::All,
        }
    }
}

/// One row of the activity table, ready for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LedgerRow {
    pub kind: EventKind,
    /// Actor address, or "N/A" for events that carry none.
    pub actor: String,
    /// Trimmed decimal token amount.
    pub amount: String,
    /// Truncated hash for display, or "N/A" when absent.
    pub tx: String,
    /// Block-explorer hyperlink, when both hash and explorer are known.
    pub tx_link: Option<String>,
}

/// The event ledger view-model.
///
/// Holds the latest snapshot of each source stream and the merged
/// sequence. Loading stays true until every stream has delivered once.
pub struct LedgerView {
    stake: Vec<LogEntry>,
    execute: Vec<LogEntry>,
    withdraw: Vec<LogEntry>,
    delivered: [bool; 3],
    merged: Vec<StakerEvent>,
    explorer_url: Option<String>,
}

impl LedgerView {
    /// `explorer_url` is the block-explorer base, e.g.
    /// `https://sepolia.etherscan.io`; rows link to `<base>/tx/<hash>`.
    pub fn new(explorer_url: Option<String>) -> Self {
        Self {
            stake: Vec::new(),
            execute: Vec::new(),
            withdraw: Vec::new(),
            delivered: [false; 3],
            merged: Vec::new(),
            explorer_url,
        }
    }

    /// Replace one stream's snapshot and re-merge.
    pub fn apply_history(&mut self, event: EventKind, entries: Vec<LogEntry>) {
        match event {
            EventKind::Stake => self.stake = entries,
            EventKind::Execute => self.execute = entries,
            EventKind::Withdraw => self.withdraw = entries,
        }
        self.delivered[Self::slot(event)] = true;
        self.merged = merge_events(&self.stake, &self.execute, &self.withdraw);
    }

    fn slot(event: EventKind) -> usize {
        match event {
            EventKind::Stake => 0,
            EventKind::Execute => 1,
            EventKind::Withdraw => 2,
        }
    }

    /// True until every one of the three streams has delivered its first
    /// snapshot; latched, never re-triggers afterwards.
    pub fn is_loading(&self) -> bool {
        !self.delivered.iter().all(|d| *d)
    }

    /// The merged, newest-first sequence.
    pub fn merged(&self) -> &[StakerEvent] {
        &self.merged
    }

    /// The merged sequence restricted to one kind, relative order kept.
    pub fn filtered(&self, filter: EventFilter) -> Vec<&StakerEvent> {
        self.merged
            .iter()
            .filter(|e| filter.matches(e.kind))
            .collect()
    }

    /// Display rows for the given filter.
    pub fn rows(&self, filter: EventFilter) -> Vec<LedgerRow> {
        self.filtered(filter)
            .into_iter()
            .map(|e| self.row(e))
            .collect()
    }

    fn row(&self, event: &StakerEvent) -> LedgerRow {
        let actor = event
            .actor
            .as_ref()
            .map(|a| a.as_str().to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let (tx, tx_link) = match &event.tx_hash {
            Some(hash) => {
                let link = self
                    .explorer_url
                    .as_ref()
                    .map(|base| format!("{}/tx/{}", base.trim_end_matches('/'), hash));
                (hash.short(), link)
            }
            None => ("N/A".to_string(), None),
        };
        LedgerRow {
            kind: event.kind,
            actor,
            amount: event.amount.format_tokens(),
            tx,
            tx_link,
        }
    }
}

impl Default for LedgerView {
    fn default() -> Self {
        Self::new(None)
    }
}
