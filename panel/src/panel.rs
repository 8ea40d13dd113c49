//! The status/action panel.

use tracing::{debug, info, warn};

use stakeview_client::{ContractGateway, ContractId, ReadingField};
use stakeview_types::{ContractValue, TokenAmount, TxHash};

use crate::events::{PanelBus, PanelEvent, StakerAction};
use crate::readings::ContractReadings;
use crate::status::DerivedStatus;

/// Outcome of a submission workflow, for the caller driving the panel.
///
/// The panel's own state never carries error detail; failures are logged
/// and reported to the observer bus.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was sent (empty or invalid input).
    NotSubmitted(String),
    /// The gateway accepted the submission.
    Confirmed(TxHash),
    /// The gateway reported a failure.
    Failed(String),
}

/// The status/action panel view-model.
///
/// Owns the subscribed readings, the derived flags, and the panel-local
/// UI state (stake input, submission-in-flight marker). All mutation is
/// synchronous apart from the gateway round-trip inside the submission
/// workflows.
pub struct StatusPanel {
    readings: ContractReadings,
    status: DerivedStatus,
    stake_input: String,
    is_submitting: bool,
    bus: PanelBus,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self {
            readings: ContractReadings::default(),
            status: DerivedStatus::default(),
            stake_input: String::new(),
            is_submitting: false,
            bus: PanelBus::new(),
        }
    }

    /// Register an observer for panel lifecycle events.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&PanelEvent) + Send + Sync>) {
        self.bus.subscribe(listener);
    }

    /// Apply a delivered reading and recompute the derived flags.
    pub fn apply_update(&mut self, field: ReadingField, value: ContractValue) {
        self.readings.apply(field, value);
        let previous = self.status;
        self.status.recompute(&self.readings);
        if previous != self.status {
            debug!(status = ?self.status, "derived status changed");
            self.bus.emit(&PanelEvent::StatusChanged {
                status: self.status,
            });
        }
    }

    pub fn readings(&self) -> &ContractReadings {
        &self.readings
    }

    pub fn status(&self) -> DerivedStatus {
        self.status
    }

    pub fn stake_input(&self) -> &str {
        &self.stake_input
    }

    pub fn set_stake_input(&mut self, input: impl Into<String>) {
        self.stake_input = input.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    // ── Enablement policy ───────────────────────────────────────────────

    /// Staking is allowed unless the campaign completed or a submission
    /// is already in flight.
    pub fn can_stake(&self) -> bool {
        !self.readings.completed_flag() && !self.is_submitting
    }

    /// Execution is allowed once the deadline passed, while not completed.
    pub fn can_execute(&self) -> bool {
        !self.readings.completed_flag() && self.status.deadline_passed
    }

    /// Withdrawal is allowed when open, not completed, and the caller has
    /// a nonzero stake.
    pub fn can_withdraw(&self) -> bool {
        !self.readings.completed_flag()
            && self.status.open_for_withdraw
            && !self.readings.my_stake_amount().is_zero()
    }

    // ── Submission workflows ────────────────────────────────────────────

    /// Submit the current stake input as a value-carrying `stake` call.
    ///
    /// Empty input is a no-op; unparseable input is rejected without
    /// submitting. On success the input clears; on failure it is left
    /// unchanged for the user to retry. The in-flight marker is released
    /// on every exit path.
    pub async fn submit_stake<G: ContractGateway>(&mut self, gateway: &G) -> SubmitOutcome {
        if self.stake_input.trim().is_empty() {
            return SubmitOutcome::NotSubmitted("empty stake amount".to_string());
        }
        let amount = match TokenAmount::parse_decimal(&self.stake_input) {
            Ok(amount) => amount,
            Err(e) => {
                return SubmitOutcome::NotSubmitted(format!("invalid stake amount: {e}"));
            }
        };

        self.is_submitting = true;
        self.bus.emit(&PanelEvent::SubmissionStarted {
            action: StakerAction::Stake,
        });

        let result = gateway
            .submit(ContractId::Staker, "stake", &[], Some(amount))
            .await;
        self.is_submitting = false;

        match result {
            Ok(tx_hash) => {
                info!(%tx_hash, "stake submitted");
                self.stake_input.clear();
                self.bus.emit(&PanelEvent::SubmissionConfirmed {
                    action: StakerAction::Stake,
                    tx_hash: tx_hash.clone(),
                });
                SubmitOutcome::Confirmed(tx_hash)
            }
            Err(e) => {
                warn!("stake submission failed: {e}");
                self.bus.emit(&PanelEvent::SubmissionFailed {
                    action: StakerAction::Stake,
                    reason: e.to_string(),
                });
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }

    /// Submit the no-argument `execute` call.
    pub async fn submit_execute<G: ContractGateway>(&mut self, gateway: &G) -> SubmitOutcome {
        self.submit_plain(gateway, StakerAction::Execute).await
    }

    /// Submit the no-argument `withdraw` call.
    pub async fn submit_withdraw<G: ContractGateway>(&mut self, gateway: &G) -> SubmitOutcome {
        self.submit_plain(gateway, StakerAction::Withdraw).await
    }

    async fn submit_plain<G: ContractGateway>(
        &mut self,
        gateway: &G,
        action: StakerAction,
    ) -> SubmitOutcome {
        self.bus.emit(&PanelEvent::SubmissionStarted { action });

        match gateway
            .submit(ContractId::Staker, action.function_name(), &[], None)
            .await
        {
            Ok(tx_hash) => {
                info!(%tx_hash, "{} submitted", action.function_name());
                self.bus.emit(&PanelEvent::SubmissionConfirmed {
                    action,
                    tx_hash: tx_hash.clone(),
                });
                SubmitOutcome::Confirmed(tx_hash)
            }
            Err(e) => {
                warn!("{} submission failed: {e}", action.function_name());
                self.bus.emit(&PanelEvent::SubmissionFailed {
                    action,
                    reason: e.to_string(),
                });
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stakeview_nullables::NullGateway;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn panel_with_flags(completed: bool, deadline_passed: bool, open: bool) -> StatusPanel {
        let mut panel = StatusPanel::new();
        panel.apply_update(ReadingField::Completed, ContractValue::Flag(completed));
        panel.apply_update(
            ReadingField::TimeLeft,
            ContractValue::Number(if deadline_passed { 0 } else { 300 }),
        );
        panel.apply_update(ReadingField::OpenForWithdraw, ContractValue::Flag(open));
        panel
    }

    #[tokio::test]
    async fn test_successful_stake_clears_input() {
        let gateway = NullGateway::new();
        let mut panel = StatusPanel::new();
        panel.set_stake_input("1.5");

        let outcome = panel.submit_stake(&gateway).await;
        assert!(matches!(outcome, SubmitOutcome::Confirmed(_)));
        assert_eq!(panel.stake_input(), "");
        assert!(!panel.is_submitting());

        let subs = gateway.submissions();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].function, "stake");
        assert!(subs[0].args.is_empty());
        assert_eq!(
            subs[0].value,
            Some(TokenAmount::parse_decimal("1.5").unwrap())
        );
    }

    #[tokio::test]
    async fn test_failed_stake_leaves_input_and_releases_flag() {
        let gateway = NullGateway::new();
        gateway.fail_next_submit("out of gas");
        let mut panel = StatusPanel::new();
        panel.set_stake_input("2");

        let outcome = panel.submit_stake(&gateway).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(panel.stake_input(), "2");
        assert!(!panel.is_submitting());
        assert!(gateway.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_empty_stake_input_is_noop() {
        let gateway = NullGateway::new();
        let mut panel = StatusPanel::new();

        let outcome = panel.submit_stake(&gateway).await;
        assert!(matches!(outcome, SubmitOutcome::NotSubmitted(_)));
        assert!(gateway.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_stake_input_not_submitted() {
        let gateway = NullGateway::new();
        let mut panel = StatusPanel::new();
        panel.set_stake_input("ten tokens");

        let outcome = panel.submit_stake(&gateway).await;
        assert!(matches!(outcome, SubmitOutcome::NotSubmitted(_)));
        assert_eq!(panel.stake_input(), "ten tokens");
        assert!(gateway.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_execute_and_withdraw_invoke_plain_calls() {
        let gateway = NullGateway::new();
        let mut panel = StatusPanel::new();

        panel.submit_execute(&gateway).await;
        panel.submit_withdraw(&gateway).await;

        let subs = gateway.submissions();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].function, "execute");
        assert_eq!(subs[1].function, "withdraw");
        assert!(subs.iter().all(|s| s.value.is_none() && s.args.is_empty()));
    }

    #[test]
    fn test_stake_enablement() {
        let panel = panel_with_flags(false, false, false);
        assert!(panel.can_stake());

        let panel = panel_with_flags(true, false, false);
        assert!(!panel.can_stake());
    }

    #[test]
    fn test_execute_enablement_requires_deadline() {
        let panel = panel_with_flags(false, false, false);
        assert!(!panel.can_execute());

        let panel = panel_with_flags(false, true, false);
        assert!(panel.can_execute());

        let panel = panel_with_flags(true, true, false);
        assert!(!panel.can_execute());
    }

    #[test]
    fn test_withdraw_enablement_requires_open_and_stake() {
        let mut panel = panel_with_flags(false, true, true);
        assert!(!panel.can_withdraw(), "zero stake blocks withdraw");

        panel.apply_update(
            ReadingField::MyStake,
            ContractValue::Text("1000000000000000000".into()),
        );
        assert!(panel.can_withdraw());

        panel.apply_update(ReadingField::OpenForWithdraw, ContractValue::Flag(false));
        assert!(!panel.can_withdraw());
    }

    #[test]
    fn test_status_change_notifies_observers() {
        let changes = Arc::new(AtomicUsize::new(0));
        let mut panel = StatusPanel::new();
        let seen = Arc::clone(&changes);
        panel.subscribe(Box::new(move |event| {
            if matches!(event, PanelEvent::StatusChanged { .. }) {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        }));

        panel.apply_update(ReadingField::TimeLeft, ContractValue::Number(0));
        assert_eq!(changes.load(Ordering::SeqCst), 1);

        // Same value again: status unchanged, no notification.
        panel.apply_update(ReadingField::TimeLeft, ContractValue::Number(0));
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }
}
