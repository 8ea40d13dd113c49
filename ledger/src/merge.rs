//! Merging the three event streams into one ordered sequence.

use stakeview_client::{EventKind, LogEntry};

use crate::event::StakerEvent;

/// Merge the three source lists into one sequence sorted by block number
/// descending. Entries with an absent block number sort as zero (oldest);
/// the sort is stable, so ties keep input order.
pub fn merge_events(
    stake: &[LogEntry],
    execute: &[LogEntry],
    withdraw: &[LogEntry],
) -> Vec<StakerEvent> {
    let mut all = Vec::with_capacity(stake.len() + execute.len() + withdraw.len());
    all.extend(stake.iter().map(|e| StakerEvent::decode(EventKind::Stake, e)));
    all.extend(
        execute
            .iter()
            .map(|e| StakerEvent::decode(EventKind::Execute, e)),
    );
    all.extend(
        withdraw
            .iter()
            .map(|e| StakerEvent::decode(EventKind::Withdraw, e)),
    );
    all.sort_by_key(|e| std::cmp::Reverse(e.order_key()));
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use stakeview_types::ContractValue;

    fn entry(args: Vec<ContractValue>, block: Option<u64>) -> LogEntry {
        LogEntry {
            args,
            block_number: block,
            transaction_hash: None,
        }
    }

    #[test]
    fn test_merge_orders_newest_first() {
        let stake = vec![entry(
            vec![
                ContractValue::Text("0xaaaa".into()),
                ContractValue::Text("1000000000000000000".into()),
            ],
            Some(5),
        )];
        let execute = vec![entry(
            vec![ContractValue::Text("2000000000000000000".into())],
            Some(6),
        )];

        let merged = merge_events(&stake, &execute, &[]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].kind, EventKind::Execute);
        assert_eq!(merged[0].block_number, Some(6));
        assert_eq!(merged[1].kind, EventKind::Stake);
        assert_eq!(merged[1].block_number, Some(5));
    }

    #[test]
    fn test_absent_block_number_sorts_oldest() {
        let stake = vec![entry(vec![], None), entry(vec![], Some(3))];
        let withdraw = vec![entry(vec![], Some(1))];

        let merged = merge_events(&stake, &[], &withdraw);
        let keys: Vec<u64> = merged.iter().map(|e| e.order_key()).collect();
        assert_eq!(keys, vec![3, 1, 0]);
    }

    #[test]
    fn test_merge_of_empty_lists_is_empty() {
        assert!(merge_events(&[], &[], &[]).is_empty());
    }

    #[test]
    fn test_ties_keep_source_order() {
        let stake = vec![entry(vec![], Some(7))];
        let execute = vec![entry(vec![], Some(7))];
        let withdraw = vec![entry(vec![], Some(7))];

        let merged = merge_events(&stake, &execute, &withdraw);
        let kinds: Vec<EventKind> = merged.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Stake, EventKind::Execute, EventKind::Withdraw]
        );
    }
}
