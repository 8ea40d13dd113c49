//! Token amount type for the native currency.
//!
//! Amounts are represented as fixed-point integers (u128, wei-denominated)
//! to avoid floating-point errors. The smallest unit is 1 wei; one whole
//! token is 10^18 wei.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Number of wei in one whole token.
pub const WEI_PER_TOKEN: u128 = 1_000_000_000_000_000_000;

/// A native token amount, stored as raw wei (u128) for precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenAmount(u128);

/// Error parsing a decimal token string into a [`TokenAmount`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("empty amount")]
    Empty,

    #[error("invalid digit in amount: {0:?}")]
    InvalidDigit(char),

    #[error("too many decimal places (max 18)")]
    TooManyDecimals,

    #[error("amount overflows u128 wei")]
    Overflow,
}

impl TokenAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(wei: u128) -> Self {
        Self(wei)
    }

    /// Construct from a whole-token count.
    pub fn from_tokens(tokens: u128) -> Self {
        Self(tokens * WEI_PER_TOKEN)
    }

    pub fn wei(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Parse a decimal token string (e.g. `"9.999"`) into wei.
    ///
    /// Accepts at most 18 fractional digits. Whitespace around the value is
    /// ignored. An empty integer part is allowed (`".5"`), an empty string
    /// is not.
    pub fn parse_decimal(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(AmountParseError::Empty);
        }
        if frac_part.len() > 18 {
            return Err(AmountParseError::TooManyDecimals);
        }
        if let Some(c) = int_part.chars().find(|c| !c.is_ascii_digit()) {
            return Err(AmountParseError::InvalidDigit(c));
        }
        if let Some(c) = frac_part.chars().find(|c| !c.is_ascii_digit()) {
            return Err(AmountParseError::InvalidDigit(c));
        }

        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| AmountParseError::Overflow)?
        };

        // Pad the fraction to 18 digits so "5" after the dot means 0.5 tokens.
        let mut frac: u128 = 0;
        if !frac_part.is_empty() {
            frac = frac_part.parse().map_err(|_| AmountParseError::Overflow)?;
            for _ in 0..(18 - frac_part.len()) {
                frac = frac.checked_mul(10).ok_or(AmountParseError::Overflow)?;
            }
        }

        whole
            .checked_mul(WEI_PER_TOKEN)
            .and_then(|w| w.checked_add(frac))
            .map(Self)
            .ok_or(AmountParseError::Overflow)
    }

    /// Format as a trimmed decimal token string (`"9.999"`, `"10"`).
    pub fn format_tokens(&self) -> String {
        let whole = self.0 / WEI_PER_TOKEN;
        let frac = self.0 % WEI_PER_TOKEN;
        if frac == 0 {
            return whole.to_string();
        }
        let frac = format!("{frac:018}");
        format!("{}.{}", whole, frac.trim_end_matches('0'))
    }

    /// Approximate value as a float of whole tokens, for price conversion
    /// display only.
    pub fn as_tokens_f64(&self) -> f64 {
        self.0 as f64 / WEI_PER_TOKEN as f64
    }
}

impl Add for TokenAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for TokenAmount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wei", self.0)
    }
}
