//! Block-driven refresh loop.
//!
//! Subscribed reads follow the chain head: the watcher polls the latest
//! block number on an interval and, whenever it advances, re-reads every
//! subscribed value and re-fetches the three event histories, emitting
//! updates over an mpsc channel. Failures are logged and skipped; the
//! next block re-delivers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use stakeview_types::{AccountAddress, ContractValue};

use crate::gateway::{ContractGateway, ContractId, EventKind, LogEntry};

/// The subscribed contract readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadingField {
    Threshold,
    TimeLeft,
    MyStake,
    TotalStaked,
    OpenForWithdraw,
    Completed,
    EscrowBalance,
}

/// One update emitted by the watcher.
#[derive(Clone, Debug)]
pub enum WatchUpdate {
    Reading {
        field: ReadingField,
        value: ContractValue,
    },
    History {
        event: EventKind,
        entries: Vec<LogEntry>,
    },
}

/// Spawns and owns the polling task.
pub struct ReadingWatcher {
    handle: JoinHandle<()>,
}

impl ReadingWatcher {
    /// Start watching. Returns the watcher handle and the update stream.
    ///
    /// `account` is the caller whose per-user stake is subscribed.
    pub fn spawn<G>(
        gateway: Arc<G>,
        account: AccountAddress,
        poll_interval: Duration,
    ) -> (Self, mpsc::Receiver<WatchUpdate>)
    where
        G: ContractGateway + 'static,
    {
        let (tx, rx) = mpsc::channel(64);
        let handle = tokio::spawn(async move {
            run(gateway, account, poll_interval, tx).await;
        });
        (Self { handle }, rx)
    }

    /// Stop the polling task.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

async fn run<G: ContractGateway>(
    gateway: Arc<G>,
    account: AccountAddress,
    poll_interval: Duration,
    tx: mpsc::Sender<WatchUpdate>,
) {
    let mut interval = tokio::time::interval(poll_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last_block: Option<u64> = None;

    loop {
        interval.tick().await;

        let block = match gateway.latest_block().await {
            Ok(b) => b,
            Err(e) => {
                warn!("block number poll failed: {e}");
                continue;
            }
        };
        if last_block == Some(block) {
            continue;
        }
        debug!("new block {block}, refreshing readings");
        last_block = Some(block);

        if refresh(&*gateway, &account, &tx).await.is_err() {
            // Receiver dropped; the dashboard is shutting down.
            return;
        }
    }
}

/// One full refresh pass: every reading, then every event stream.
async fn refresh<G: ContractGateway>(
    gateway: &G,
    account: &AccountAddress,
    tx: &mpsc::Sender<WatchUpdate>,
) -> Result<(), mpsc::error::SendError<WatchUpdate>> {
    let my_stake_args = [ContractValue::Text(account.as_str().to_string())];
    let reads: [(ReadingField, ContractId, &str, &[ContractValue]); 4] = [
        (ReadingField::Threshold, ContractId::Staker, "threshold", &[]),
        (ReadingField::TimeLeft, ContractId::Staker, "timeLeft", &[]),
        (ReadingField::MyStake, ContractId::Staker, "balances", &my_stake_args),
        (
            ReadingField::OpenForWithdraw,
            ContractId::Staker,
            "openForWithdraw",
            &[],
        ),
    ];

    for (field, contract, function, args) in reads {
        match gateway.read_value(contract, function, args).await {
            Ok(value) => tx.send(WatchUpdate::Reading { field, value }).await?,
            Err(e) => warn!("read {contract}.{function} failed: {e}"),
        }
    }

    match gateway
        .read_value(ContractId::Escrow, "completed", &[])
        .await
    {
        Ok(value) => {
            tx.send(WatchUpdate::Reading {
                field: ReadingField::Completed,
                value,
            })
            .await?
        }
        Err(e) => warn!("read escrow.completed failed: {e}"),
    }

    for (field, contract) in [
        (ReadingField::TotalStaked, ContractId::Staker),
        (ReadingField::EscrowBalance, ContractId::Escrow),
    ] {
        match gateway.balance_of(contract).await {
            Ok(value) => tx.send(WatchUpdate::Reading { field, value }).await?,
            Err(e) => warn!("balance of {contract} failed: {e}"),
        }
    }

    for event in EventKind::ALL {
        match gateway.event_history(ContractId::Staker, event).await {
            Ok(entries) => tx.send(WatchUpdate::History { event, entries }).await?,
            Err(e) => warn!("history fetch for {event} failed: {e}"),
        }
    }

    Ok(())
}
