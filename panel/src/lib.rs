//! Status/action panel view-model.
//!
//! Holds the latest contract readings, recomputes the derived status flags
//! synchronously on every update, owns the stake-input/is-submitting UI
//! state, and runs the three write workflows through the gateway.

pub mod display;
pub mod events;
pub mod panel;
pub mod readings;
pub mod status;

pub use display::PanelSnapshot;
pub use events::{PanelBus, PanelEvent, StakerAction};
pub use panel::{StatusPanel, SubmitOutcome};
pub use readings::ContractReadings;
pub use status::DerivedStatus;
