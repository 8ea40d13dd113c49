//! Event ledger view-model.
//!
//! Three independently-fetched event streams (Stake, Execute, Withdraw)
//! merge into one chronologically ordered, filterable sequence. The view
//! owns a loading latch that clears once every stream has delivered its
//! first snapshot and never re-triggers.

pub mod event;
pub mod merge;
pub mod view;

pub use event::StakerEvent;
pub use merge::merge_events;
pub use view::{EventFilter, LedgerRow, LedgerView};

pub use stakeview_client::EventKind;
