//! Derived status flags.

use serde::Serialize;

use crate::readings::ContractReadings;

/// The three boolean status flags shown by the panel.
///
/// Pure functions of the latest readings; recomputed synchronously on
/// every reading change via [`DerivedStatus::recompute`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DerivedStatus {
    pub threshold_met: bool,
    pub deadline_passed: bool,
    pub open_for_withdraw: bool,
}

impl DerivedStatus {
    /// Recompute from the given readings.
    ///
    /// - `threshold_met`: aggregate stake >= threshold; false when either
    ///   input has not been delivered yet.
    /// - `deadline_passed`: time left normalized to zero seconds; an
    ///   absent reading keeps the prior value.
    /// - `open_for_withdraw`: mirrors the flag; absent reads as closed.
    pub fn recompute(&mut self, readings: &ContractReadings) {
        self.threshold_met = match (&readings.total_staked, &readings.threshold) {
            (Some(balance), Some(threshold)) => balance.as_amount() >= threshold.as_amount(),
            _ => false,
        };

        if let Some(time_left) = &readings.time_left {
            self.deadline_passed = time_left.as_seconds() == 0;
        }

        self.open_for_withdraw = readings
            .open_for_withdraw
            .as_ref()
            .map(|v| v.as_flag())
            .unwrap_or(false);
    }
}
