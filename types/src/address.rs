//! Account address type with `0x` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A hex account address as delivered by the gateway.
///
/// Stored verbatim; [`AccountAddress::is_valid`] checks the canonical
/// 20-byte hex form. Event decoding must tolerate arbitrary strings, so
/// construction never fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// The standard prefix for hex addresses.
    pub const PREFIX: &'static str = "0x";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a well-formed 20-byte hex address.
    pub fn is_valid(&self) -> bool {
        self.0.len() == 42
            && self.0.starts_with(Self::PREFIX)
            && self.0[2..].chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
