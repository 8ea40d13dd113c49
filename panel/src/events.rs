//! Panel lifecycle notifications for injected observers.

use serde::Serialize;

use stakeview_types::TxHash;

use crate::status::DerivedStatus;

/// The three user actions the panel can submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StakerAction {
    Stake,
    Execute,
    Withdraw,
}

impl StakerAction {
    /// The contract function the action invokes.
    pub fn function_name(&self) -> &'static str {
        match self {
            StakerAction::Stake => "stake",
            StakerAction::Execute => "execute",
            StakerAction::Withdraw => "withdraw",
        }
    }
}

/// Panel events observers can subscribe to via the [`PanelBus`].
#[derive(Clone, Debug)]
pub enum PanelEvent {
    /// The derived status flags changed.
    StatusChanged { status: DerivedStatus },
    /// A write submission went out.
    SubmissionStarted { action: StakerAction },
    /// A write submission was accepted.
    SubmissionConfirmed { action: StakerAction, tx_hash: TxHash },
    /// A write submission failed.
    SubmissionFailed { action: StakerAction, reason: String },
}

/// Synchronous fan-out bus for panel events.
///
/// Listeners are invoked inline on the updating thread; keep handlers
/// fast to avoid stalling update application.
pub struct PanelBus {
    listeners: Vec<Box<dyn Fn(&PanelEvent) + Send + Sync>>,
}

impl PanelBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&PanelEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &PanelEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl Default for PanelBus {
    fn default() -> Self {
        Self::new()
    }
}
