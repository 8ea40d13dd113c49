//! Loosely-typed contract read values and their normalization boundary.
//!
//! Gateway reads arrive as one of three JSON shapes: a string, a boolean,
//! or an integer. Every consumer goes through the conversion functions here
//! rather than coercing inline; normalization never fails — unparseable
//! input falls back to a defined default (zero amount, zero seconds,
//! false flag).

use serde::{Deserialize, Serialize};

use crate::amount::TokenAmount;

/// A scalar value read from a contract, before normalization.
///
/// The variant order matters for untagged deserialization: booleans and
/// numbers must be tried before the catch-all string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContractValue {
    Flag(bool),
    Number(u64),
    Text(String),
}

impl ContractValue {
    /// Normalize to a wei-denominated amount.
    ///
    /// Numbers are taken as raw wei; strings are parsed as integer wei.
    /// Anything else is zero.
    pub fn as_amount(&self) -> TokenAmount {
        match self {
            ContractValue::Number(n) => TokenAmount::new(*n as u128),
            ContractValue::Text(s) => s
                .trim()
                .parse::<u128>()
                .map(TokenAmount::new)
                .unwrap_or(TokenAmount::ZERO),
            ContractValue::Flag(_) => TokenAmount::ZERO,
        }
    }

    /// Normalize to a non-negative seconds count.
    pub fn as_seconds(&self) -> u64 {
        match self {
            ContractValue::Number(n) => *n,
            ContractValue::Text(s) => s.trim().parse().unwrap_or(0),
            ContractValue::Flag(_) => 0,
        }
    }

    /// Normalize to a boolean.
    ///
    /// Strings compare case-insensitively against "true"; numbers are true
    /// when nonzero.
    pub fn as_flag(&self) -> bool {
        match self {
            ContractValue::Flag(b) => *b,
            ContractValue::Text(s) => s.trim().eq_ignore_ascii_case("true"),
            ContractValue::Number(n) => *n != 0,
        }
    }

    /// The raw text, when the value is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContractValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for ContractValue {
    fn from(b: bool) -> Self {
        ContractValue::Flag(b)
    }
}

impl From<u64> for ContractValue {
    fn from(n: u64) -> Self {
        ContractValue::Number(n)
    }
}

impl From<&str> for ContractValue {
    fn from(s: &str) -> Self {
        ContractValue::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_from_all_representations() {
        assert!(ContractValue::Flag(true).as_flag());
        assert!(!ContractValue::Flag(false).as_flag());
        assert!(ContractValue::Text("true".into()).as_flag());
        assert!(ContractValue::Text("TRUE".into()).as_flag());
        assert!(!ContractValue::Text("false".into()).as_flag());
        assert!(!ContractValue::Text("yes".into()).as_flag());
        assert!(ContractValue::Number(1).as_flag());
        assert!(!ContractValue::Number(0).as_flag());
    }

    #[test]
    fn test_amount_from_all_representations() {
        assert_eq!(
            ContractValue::Number(42).as_amount(),
            TokenAmount::new(42)
        );
        assert_eq!(
            ContractValue::Text("10000000000000000000".into()).as_amount(),
            TokenAmount::new(10_000_000_000_000_000_000)
        );
        assert_eq!(
            ContractValue::Text("not a number".into()).as_amount(),
            TokenAmount::ZERO
        );
        assert_eq!(ContractValue::Flag(true).as_amount(), TokenAmount::ZERO);
    }

    #[test]
    fn test_seconds_from_all_representations() {
        assert_eq!(ContractValue::Number(5).as_seconds(), 5);
        assert_eq!(ContractValue::Text("0".into()).as_seconds(), 0);
        assert_eq!(ContractValue::Text(" 120 ".into()).as_seconds(), 120);
        assert_eq!(ContractValue::Text("-3".into()).as_seconds(), 0);
        assert_eq!(ContractValue::Flag(true).as_seconds(), 0);
    }

    #[test]
    fn test_untagged_json_shapes() {
        let v: ContractValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, ContractValue::Flag(true));

        let v: ContractValue = serde_json::from_str("1234").unwrap();
        assert_eq!(v, ContractValue::Number(1234));

        let v: ContractValue = serde_json::from_str("\"9999000000000000000000\"").unwrap();
        assert_eq!(v, ContractValue::Text("9999000000000000000000".into()));
    }
}
