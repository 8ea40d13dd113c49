//! Nullable gateway — scripted reads, recorded writes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use stakeview_client::{ClientError, ContractGateway, ContractId, EventKind, LogEntry};
use stakeview_types::{ContractValue, TokenAmount, TxHash};

/// A write submission recorded by [`NullGateway`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedSubmission {
    pub contract: ContractId,
    pub function: String,
    pub args: Vec<ContractValue>,
    pub value: Option<TokenAmount>,
}

/// A test gateway that serves scripted values and records submissions
/// instead of talking to a node.
///
/// Reads without a scripted value fail with a gateway error, which doubles
/// as the way to exercise read-failure paths.
#[derive(Default)]
pub struct NullGateway {
    reads: Mutex<HashMap<(ContractId, String), ContractValue>>,
    balances: Mutex<HashMap<ContractId, ContractValue>>,
    histories: Mutex<HashMap<EventKind, Vec<LogEntry>>>,
    submissions: Mutex<Vec<RecordedSubmission>>,
    submit_failures: Mutex<Vec<String>>,
    block: AtomicU64,
}

fn unpoison<'a, T>(r: Result<MutexGuard<'a, T>, PoisonError<MutexGuard<'a, T>>>) -> MutexGuard<'a, T> {
    r.unwrap_or_else(PoisonError::into_inner)
}

impl NullGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the value served for a contract read.
    pub fn set_read(&self, contract: ContractId, function: &str, value: ContractValue) {
        unpoison(self.reads.lock()).insert((contract, function.to_string()), value);
    }

    /// Script a contract's native balance.
    pub fn set_balance(&self, contract: ContractId, value: ContractValue) {
        unpoison(self.balances.lock()).insert(contract, value);
    }

    /// Script the history served for an event stream.
    pub fn set_history(&self, event: EventKind, entries: Vec<LogEntry>) {
        unpoison(self.histories.lock()).insert(event, entries);
    }

    /// Make the next submission fail with the given message.
    pub fn fail_next_submit(&self, message: &str) {
        unpoison(self.submit_failures.lock()).push(message.to_string());
    }

    /// Advance the scripted block number by one.
    pub fn advance_block(&self) {
        self.block.fetch_add(1, Ordering::SeqCst);
    }

    pub fn set_block(&self, block: u64) {
        self.block.store(block, Ordering::SeqCst);
    }

    /// All submissions recorded so far (for assertions).
    pub fn submissions(&self) -> Vec<RecordedSubmission> {
        unpoison(self.submissions.lock()).clone()
    }

    /// Clear all scripted state and recordings.
    pub fn reset(&self) {
        unpoison(self.reads.lock()).clear();
        unpoison(self.balances.lock()).clear();
        unpoison(self.histories.lock()).clear();
        unpoison(self.submissions.lock()).clear();
        unpoison(self.submit_failures.lock()).clear();
        self.block.store(0, Ordering::SeqCst);
    }
}

impl ContractGateway for NullGateway {
    async fn read_value(
        &self,
        contract: ContractId,
        function: &str,
        _args: &[ContractValue],
    ) -> Result<ContractValue, ClientError> {
        unpoison(self.reads.lock())
            .get(&(contract, function.to_string()))
            .cloned()
            .ok_or_else(|| ClientError::Node(format!("no scripted value for {contract}.{function}")))
    }

    async fn balance_of(&self, contract: ContractId) -> Result<ContractValue, ClientError> {
        unpoison(self.balances.lock())
            .get(&contract)
            .cloned()
            .ok_or_else(|| ClientError::Node(format!("no scripted balance for {contract}")))
    }

    async fn submit(
        &self,
        contract: ContractId,
        function: &str,
        args: &[ContractValue],
        value: Option<TokenAmount>,
    ) -> Result<TxHash, ClientError> {
        if let Some(message) = unpoison(self.submit_failures.lock()).pop() {
            return Err(ClientError::Rejected(message));
        }
        let mut submissions = unpoison(self.submissions.lock());
        submissions.push(RecordedSubmission {
            contract,
            function: function.to_string(),
            args: args.to_vec(),
            value,
        });
        Ok(TxHash::new(format!("0xnull{:04}", submissions.len())))
    }

    async fn event_history(
        &self,
        _contract: ContractId,
        event: EventKind,
    ) -> Result<Vec<LogEntry>, ClientError> {
        Ok(unpoison(self.histories.lock())
            .get(&event)
            .cloned()
            .unwrap_or_default())
    }

    async fn latest_block(&self) -> Result<u64, ClientError> {
        Ok(self.block.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_read_roundtrip() {
        let gateway = NullGateway::new();
        gateway.set_read(ContractId::Staker, "threshold", ContractValue::Number(10));

        let value = gateway
            .read_value(ContractId::Staker, "threshold", &[])
            .await
            .unwrap();
        assert_eq!(value, ContractValue::Number(10));
    }

    #[tokio::test]
    async fn test_unscripted_read_fails() {
        let gateway = NullGateway::new();
        let result = gateway.read_value(ContractId::Staker, "timeLeft", &[]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_submissions_recorded_in_order() {
        let gateway = NullGateway::new();
        gateway
            .submit(ContractId::Staker, "execute", &[], None)
            .await
            .unwrap();
        gateway
            .submit(
                ContractId::Staker,
                "stake",
                &[],
                Some(TokenAmount::from_tokens(1)),
            )
            .await
            .unwrap();

        let subs = gateway.submissions();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].function, "execute");
        assert_eq!(subs[1].function, "stake");
        assert_eq!(subs[1].value, Some(TokenAmount::from_tokens(1)));
    }

    #[tokio::test]
    async fn test_scripted_failure_consumed_once() {
        let gateway = NullGateway::new();
        gateway.fail_next_submit("out of gas");

        let first = gateway.submit(ContractId::Staker, "stake", &[], None).await;
        assert!(first.is_err());
        assert!(gateway.submissions().is_empty());

        let second = gateway.submit(ContractId::Staker, "stake", &[], None).await;
        assert!(second.is_ok());
        assert_eq!(gateway.submissions().len(), 1);
    }

    #[tokio::test]
    async fn test_unscripted_history_is_empty() {
        let gateway = NullGateway::new();
        let entries = gateway
            .event_history(ContractId::Staker, EventKind::Stake)
            .await
            .unwrap();
        assert!(entries.is_empty());
    }
}
