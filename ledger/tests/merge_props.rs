use proptest::prelude::*;

use stakeview_client::LogEntry;
use stakeview_ledger::{merge_events, EventFilter, EventKind, LedgerView};

fn entries(blocks: &[Option<u64>]) -> Vec<LogEntry> {
    blocks
        .iter()
        .map(|b| LogEntry {
            args: vec![],
            block_number: *b,
            transaction_hash: None,
        })
        .collect()
}

fn block_list() -> impl Strategy<Value = Vec<Option<u64>>> {
    prop::collection::vec(prop::option::of(0u64..1_000), 0..20)
}

proptest! {
    /// The merged sequence is sorted by block number descending for any
    /// interleaving of the three input lists, absent treated as zero.
    #[test]
    fn merged_is_sorted_descending(
        stake in block_list(),
        execute in block_list(),
        withdraw in block_list(),
    ) {
        let merged = merge_events(&entries(&stake), &entries(&execute), &entries(&withdraw));
        prop_assert_eq!(merged.len(), stake.len() + execute.len() + withdraw.len());
        for pair in merged.windows(2) {
            prop_assert!(pair[0].order_key() >= pair[1].order_key());
        }
    }

    /// Filtering returns exactly the matching subset, relative order kept.
    #[test]
    fn filter_is_exact_ordered_subset(
        stake in block_list(),
        execute in block_list(),
        withdraw in block_list(),
    ) {
        let mut view = LedgerView::default();
        view.apply_history(EventKind::Stake, entries(&stake));
        view.apply_history(EventKind::Execute, entries(&execute));
        view.apply_history(EventKind::Withdraw, entries(&withdraw));

        for (filter, kind) in [
            (EventFilter::Stake, EventKind::Stake),
            (EventFilter::Execute, EventKind::Execute),
            (EventFilter::Withdraw, EventKind::Withdraw),
        ] {
            let expected: Vec<_> = view
                .merged()
                .iter()
                .filter(|e| e.kind == kind)
                .collect();
            let actual = view.filtered(filter);
            prop_assert_eq!(actual, expected);
        }

        prop_assert_eq!(view.filtered(EventFilter::All).len(), view.merged().len());
    }
}
