// Path: crates/types/src/uint.rs

//! Unsigned token amounts in decimal text.
//!
//! Balances and staking amounts are carried as decimal strings at both the
//! data and wire boundaries because they routinely exceed the 53-bit range
//! that is safe inside JSON number literals. `Uint` keeps them as an exact
//! `u128` in memory.

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;
use crate::Result;

/// An unsigned token amount with exact decimal text round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uint(u128);

impl Uint {
    /// The amount zero.
    pub const ZERO: Uint = Uint(0);

    /// Wraps a raw amount.
    pub const fn new(amount: u128) -> Self {
        Uint(amount)
    }

    /// Returns the raw amount.
    pub const fn value(self) -> u128 {
        self.0
    }

    /// Parses a non-negative decimal integer string.
    ///
    /// Signs, empty strings and non-digit characters fail with
    /// [`CodecError::InvalidAmount`]; so do values beyond 128 bits.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::InvalidAmount {
                path: String::new(),
                value: text.to_string(),
            });
        }
        let amount: u128 = text.parse().map_err(|_| CodecError::InvalidAmount {
            path: String::new(),
            value: text.to_string(),
        })?;
        Ok(Uint(amount))
    }

    /// Formats the canonical decimal text form.
    pub fn format(self) -> String {
        self.0.to_string()
    }

    /// Exact addition; `None` on overflow.
    pub fn checked_add(self, rhs: Uint) -> Option<Uint> {
        self.0.checked_add(rhs.0).map(Uint)
    }

    /// Exact subtraction; `None` on underflow.
    pub fn checked_sub(self, rhs: Uint) -> Option<Uint> {
        self.0.checked_sub(rhs.0).map(Uint)
    }
}

impl From<u64> for Uint {
    fn from(v: u64) -> Self {
        Uint(u128::from(v))
    }
}

impl From<u128> for Uint {
    fn from(v: u128) -> Self {
        Uint(v)
    }
}

impl fmt::Display for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Uint {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Uint::parse(s)
    }
}
