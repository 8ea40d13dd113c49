//! Display snapshot of the panel, ready for serialization.

use serde::Serialize;

use stakeview_client::format_usd;
use stakeview_utils::humanize_seconds;

use crate::panel::StatusPanel;
use crate::status::DerivedStatus;

/// A render-ready view of the panel state.
///
/// All formatting happens here; the price is looked up by the caller
/// beforehand (a failed lookup passes `None` and the USD fields are
/// simply omitted).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PanelSnapshot {
    pub status: DerivedStatus,
    /// Humanized remaining time, absent before the first delivery.
    pub time_left: Option<String>,
    /// Caller's stake as a trimmed decimal token string.
    pub my_stake: String,
    pub total_staked: String,
    pub threshold: String,
    pub total_staked_usd: Option<String>,
    pub threshold_usd: Option<String>,
    /// Escrow completion: when true the dashboard shows the success
    /// banner with the escrowed balance.
    pub completed: bool,
    pub escrow_balance: Option<String>,
    pub escrow_balance_usd: Option<String>,
    pub stake_input: String,
    pub is_submitting: bool,
    pub can_stake: bool,
    pub can_execute: bool,
    pub can_withdraw: bool,
}

impl PanelSnapshot {
    /// Capture the current panel state.
    pub fn capture(panel: &StatusPanel, price_usd: Option<f64>) -> Self {
        let readings = panel.readings();
        let total_staked = readings.total_staked_amount();
        let threshold = readings.threshold_amount();
        let completed = readings.completed_flag();
        let escrow_balance = completed.then(|| readings.escrow_balance_amount());

        Self {
            status: panel.status(),
            time_left: readings
                .time_left
                .as_ref()
                .map(|v| humanize_seconds(v.as_seconds())),
            my_stake: readings.my_stake_amount().format_tokens(),
            total_staked: total_staked.format_tokens(),
            threshold: threshold.format_tokens(),
            total_staked_usd: price_usd.map(|p| format_usd(total_staked, p)),
            threshold_usd: price_usd.map(|p| format_usd(threshold, p)),
            completed,
            escrow_balance: escrow_balance.map(|b| b.format_tokens()),
            escrow_balance_usd: escrow_balance
                .zip(price_usd)
                .map(|(b, p)| format_usd(b, p)),
            stake_input: panel.stake_input().to_string(),
            is_submitting: panel.is_submitting(),
            can_stake: panel.can_stake(),
            can_execute: panel.can_execute(),
            can_withdraw: panel.can_withdraw(),
        }
    }
}
