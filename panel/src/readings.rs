//! Latest-value store for the subscribed contract readings.

use stakeview_client::ReadingField;
use stakeview_types::{ContractValue, TokenAmount};

/// The latest delivered value per subscribed reading.
///
/// Every field is `None` until its first delivery; consumers go through
/// the normalized accessors, which apply the defined fallbacks.
#[derive(Clone, Debug, Default)]
pub struct ContractReadings {
    pub threshold: Option<ContractValue>,
    pub time_left: Option<ContractValue>,
    pub my_stake: Option<ContractValue>,
    pub total_staked: Option<ContractValue>,
    pub open_for_withdraw: Option<ContractValue>,
    pub completed: Option<ContractValue>,
    pub escrow_balance: Option<ContractValue>,
}

impl ContractReadings {
    /// Store a delivered value.
    pub fn apply(&mut self, field: ReadingField, value: ContractValue) {
        let slot = match field {
            ReadingField::Threshold => &mut self.threshold,
            ReadingField::TimeLeft => &mut self.time_left,
            ReadingField::MyStake => &mut self.my_stake,
            ReadingField::TotalStaked => &mut self.total_staked,
            ReadingField::OpenForWithdraw => &mut self.open_for_withdraw,
            ReadingField::Completed => &mut self.completed,
            ReadingField::EscrowBalance => &mut self.escrow_balance,
        };
        *slot = Some(value);
    }

    /// The escrow completion flag; absent reads as not completed.
    pub fn completed_flag(&self) -> bool {
        self.completed.as_ref().map(|v| v.as_flag()).unwrap_or(false)
    }

    /// The caller's own stake; absent reads as zero.
    pub fn my_stake_amount(&self) -> TokenAmount {
        self.my_stake
            .as_ref()
            .map(|v| v.as_amount())
            .unwrap_or(TokenAmount::ZERO)
    }

    /// The contract's aggregate stake; absent reads as zero.
    pub fn total_staked_amount(&self) -> TokenAmount {
        self.total_staked
            .as_ref()
            .map(|v| v.as_amount())
            .unwrap_or(TokenAmount::ZERO)
    }

    /// The execution threshold; absent reads as zero.
    pub fn threshold_amount(&self) -> TokenAmount {
        self.threshold
            .as_ref()
            .map(|v| v.as_amount())
            .unwrap_or(TokenAmount::ZERO)
    }

    /// The escrow contract's balance; absent reads as zero.
    pub fn escrow_balance_amount(&self) -> TokenAmount {
        self.escrow_balance
            .as_ref()
            .map(|v| v.as_amount())
            .unwrap_or(TokenAmount::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overwrites_latest() {
        let mut readings = ContractReadings::default();
        readings.apply(ReadingField::TimeLeft, ContractValue::Number(120));
        readings.apply(ReadingField::TimeLeft, ContractValue::Number(60));
        assert_eq!(readings.time_left, Some(ContractValue::Number(60)));
    }

    #[test]
    fn test_absent_defaults() {
        let readings = ContractReadings::default();
        assert!(!readings.completed_flag());
        assert!(readings.my_stake_amount().is_zero());
        assert!(readings.total_staked_amount().is_zero());
    }
}
