use proptest::prelude::*;

use stakeview_types::{ContractValue, TokenAmount};

proptest! {
    /// A boolean read yields the same flag whether delivered natively or
    /// as a "true"/"false" string.
    #[test]
    fn flag_representation_agreement(b in any::<bool>()) {
        let native = ContractValue::Flag(b);
        let text = ContractValue::Text(b.to_string());
        prop_assert_eq!(native.as_flag(), b);
        prop_assert_eq!(text.as_flag(), b);
    }

    /// Flag normalization is case-insensitive for string input.
    #[test]
    fn flag_text_case_insensitive(b in any::<bool>()) {
        let upper = ContractValue::Text(b.to_string().to_uppercase());
        prop_assert_eq!(upper.as_flag(), b);
    }

    /// An amount read yields the same wei whether delivered as a number
    /// or as its decimal string form.
    #[test]
    fn amount_representation_agreement(wei in 0u64..u64::MAX) {
        let native = ContractValue::Number(wei);
        let text = ContractValue::Text(wei.to_string());
        prop_assert_eq!(native.as_amount(), TokenAmount::new(wei as u128));
        prop_assert_eq!(text.as_amount(), TokenAmount::new(wei as u128));
    }

    /// A seconds read yields the same count from numeric and string form.
    #[test]
    fn seconds_representation_agreement(secs in 0u64..u64::MAX) {
        let native = ContractValue::Number(secs);
        let text = ContractValue::Text(secs.to_string());
        prop_assert_eq!(native.as_seconds(), secs);
        prop_assert_eq!(text.as_seconds(), secs);
    }

    /// Amount normalization never panics on arbitrary text.
    #[test]
    fn amount_tolerates_arbitrary_text(s in ".*") {
        let _ = ContractValue::Text(s.clone()).as_amount();
        let _ = ContractValue::Text(s.clone()).as_seconds();
        let _ = ContractValue::Text(s).as_flag();
    }

    /// parse_decimal and format_tokens round-trip.
    #[test]
    fn amount_decimal_roundtrip(wei in 0u128..u128::MAX / 2) {
        let amount = TokenAmount::new(wei);
        let formatted = amount.format_tokens();
        prop_assert_eq!(TokenAmount::parse_decimal(&formatted), Ok(amount));
    }

    /// Threshold comparison agrees across representations: normalized
    /// balance >= normalized threshold iff the raw integers compare so.
    #[test]
    fn threshold_comparison_representation_free(
        balance in 0u64..u64::MAX,
        threshold in 0u64..u64::MAX,
    ) {
        let b = ContractValue::Text(balance.to_string()).as_amount();
        let t = ContractValue::Number(threshold).as_amount();
        prop_assert_eq!(b >= t, balance >= threshold);
    }

    /// saturating_sub never panics and floors at zero.
    #[test]
    fn amount_saturating_sub(a in 0u128..1_000_000, b in 0u128..1_000_000) {
        let result = TokenAmount::new(a).saturating_sub(TokenAmount::new(b));
        if b > a {
            prop_assert_eq!(result, TokenAmount::ZERO);
        } else {
            prop_assert_eq!(result, TokenAmount::new(a - b));
        }
    }
}
