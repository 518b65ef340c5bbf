// Path: crates/types/src/coin.rs

//! Token balances as a `(denomination, amount)` pair.

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;
use crate::uint::Uint;
use crate::Result;

/// Denomination length bounds.
const MIN_DENOM_LEN: usize = 3;
const MAX_DENOM_LEN: usize = 128;

/// A token balance: a validated denomination and a non-negative amount.
///
/// The amount is stored as decimal text on both the data and wire
/// boundaries, with no implicit unit scaling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coin {
    denom: String,
    amount: Uint,
}

impl Coin {
    /// Builds a coin, validating the denomination charset
    /// (alphanumeric, 3 to 128 characters).
    pub fn new(denom: impl Into<String>, amount: Uint) -> Result<Self> {
        let denom = denom.into();
        validate_denom(&denom)?;
        Ok(Coin { denom, amount })
    }

    /// Parses the combined text form, e.g. `"1000000uluna"`.
    ///
    /// The amount is the leading run of digits; everything after it is the
    /// denomination. A missing amount or denomination fails with
    /// [`CodecError::InvalidAmount`].
    pub fn parse(text: &str) -> Result<Self> {
        let split = text
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| CodecError::InvalidAmount {
                path: String::new(),
                value: text.to_string(),
            })?;
        let (amount, denom) = text.split_at(split);
        let amount = Uint::parse(amount).map_err(|_| CodecError::InvalidAmount {
            path: String::new(),
            value: text.to_string(),
        })?;
        Coin::new(denom, amount)
    }

    /// The validated denomination.
    pub fn denom(&self) -> &str {
        &self.denom
    }

    /// The amount.
    pub fn amount(&self) -> Uint {
        self.amount
    }
}

fn validate_denom(denom: &str) -> Result<()> {
    let len_ok = (MIN_DENOM_LEN..=MAX_DENOM_LEN).contains(&denom.len());
    if !len_ok || !denom.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(CodecError::InvalidEncoding {
            path: String::new(),
            reason: format!("invalid denomination `{denom}`"),
        });
    }
    Ok(())
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Coin::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_combined_form() {
        let coin = Coin::parse("1000000uluna").unwrap();
        assert_eq!(coin.denom(), "uluna");
        assert_eq!(coin.amount(), Uint::new(1_000_000));
        assert_eq!(coin.to_string(), "1000000uluna");
    }

    #[test]
    fn test_parse_rejects_missing_parts() {
        // No denomination at all.
        assert!(Coin::parse("1000000").is_err());
        // No amount.
        assert!(matches!(
            Coin::parse("uluna"),
            Err(CodecError::InvalidAmount { .. })
        ));
        // Negative amounts never reach the denomination.
        assert!(matches!(
            Coin::parse("-5uluna"),
            Err(CodecError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_denom_charset_bounds() {
        assert!(Coin::new("uluna", Uint::ZERO).is_ok());
        // Too short, too long, bad characters.
        assert!(Coin::new("ab", Uint::ZERO).is_err());
        assert!(Coin::new("a".repeat(129), Uint::ZERO).is_err());
        assert!(Coin::new("ibc/transfer", Uint::ZERO).is_err());
    }
}
