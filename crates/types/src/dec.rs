// Path: crates/types/src/dec.rs

//! Fixed-point decimal with exactly 18 fractional digits.
//!
//! `Dec` is the text-safe representation of on-chain decimals (validator
//! commission rates, delegator shares). Values are carried as an `i128`
//! mantissa scaled by `10^18`, so arithmetic and parsing are exact and no
//! value ever passes through a binary float.
//!
//! Two text forms exist and must not be confused:
//! - the **data** form is a decimal point string, zero-padded to exactly
//!   18 fractional digits on output (`"0.200000000000000000"`);
//! - the **wire** form is the bare mantissa in decimal
//!   (`"200000000000000000"`), matching how the chain's protobuf schema
//!   carries decimals inside string fields.

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;
use crate::{Result, DECIMAL_PLACES};

/// `10^18`, the scale factor between a mantissa and one whole unit.
const FRACTIONAL: i128 = 1_000_000_000_000_000_000;

/// A fixed-point decimal with exactly 18 fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dec(i128);

impl Dec {
    /// The decimal value zero.
    pub const ZERO: Dec = Dec(0);
    /// The decimal value one.
    pub const ONE: Dec = Dec(FRACTIONAL);

    /// Builds a decimal directly from a `10^18`-scaled mantissa.
    pub const fn from_mantissa(mantissa: i128) -> Self {
        Dec(mantissa)
    }

    /// Returns the `10^18`-scaled mantissa.
    pub const fn mantissa(self) -> i128 {
        self.0
    }

    /// Parses the decimal point ("data") form.
    ///
    /// Accepts an optional leading `-`, an integer part and at most 18
    /// fractional digits. More than 18 fractional digits fail with
    /// [`CodecError::InvalidDecimalPrecision`]; any non-numeric input fails
    /// with [`CodecError::InvalidAmount`].
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || CodecError::InvalidAmount {
            path: String::new(),
            value: text.to_string(),
        };

        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };
        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if digits.contains('.') && frac_part.is_empty() {
            return Err(invalid());
        }
        if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac_part.len() > DECIMAL_PLACES as usize {
            return Err(CodecError::InvalidDecimalPrecision {
                path: String::new(),
                value: text.to_string(),
            });
        }

        let int: i128 = int_part.parse().map_err(|_| invalid())?;
        let mut frac: i128 = if frac_part.is_empty() {
            0
        } else {
            frac_part.parse().map_err(|_| invalid())?
        };
        for _ in frac_part.len()..DECIMAL_PLACES as usize {
            frac *= 10;
        }

        let mantissa = int
            .checked_mul(FRACTIONAL)
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(invalid)?;
        Ok(Dec(if negative { -mantissa } else { mantissa }))
    }

    /// Formats the canonical data form, zero-padded to exactly 18 fractional
    /// digits (`"0.2"` parses and formats back as `"0.200000000000000000"`).
    pub fn format(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let int = abs / FRACTIONAL.unsigned_abs();
        let frac = abs % FRACTIONAL.unsigned_abs();
        format!("{sign}{int}.{frac:018}")
    }

    /// Parses the wire form: the bare `10^18`-scaled mantissa in decimal.
    pub fn from_wire_string(text: &str) -> Result<Self> {
        let mantissa: i128 = text.parse().map_err(|_| CodecError::InvalidAmount {
            path: String::new(),
            value: text.to_string(),
        })?;
        Ok(Dec(mantissa))
    }

    /// Formats the wire form: the bare mantissa in decimal.
    pub fn to_wire_string(self) -> String {
        self.0.to_string()
    }

    /// Exact addition; `None` on overflow.
    pub fn checked_add(self, rhs: Dec) -> Option<Dec> {
        self.0.checked_add(rhs.0).map(Dec)
    }

    /// Exact subtraction; `None` on overflow.
    pub fn checked_sub(self, rhs: Dec) -> Option<Dec> {
        self.0.checked_sub(rhs.0).map(Dec)
    }

    /// True for values strictly below zero.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for Dec {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Dec::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zero_pads_to_eighteen_digits() {
        let d = Dec::parse("0.2").unwrap();
        assert_eq!(d.format(), "0.200000000000000000");
        // Reparsing the canonical form is a fixed point.
        assert_eq!(Dec::parse(&d.format()).unwrap(), d);
    }

    #[test]
    fn test_parse_whole_numbers() {
        assert_eq!(Dec::parse("100").unwrap().format(), "100.000000000000000000");
        assert_eq!(Dec::parse("0").unwrap(), Dec::ZERO);
        assert_eq!(Dec::parse("1").unwrap(), Dec::ONE);
    }

    #[test]
    fn test_parse_negative() {
        let d = Dec::parse("-0.5").unwrap();
        assert!(d.is_negative());
        assert_eq!(d.format(), "-0.500000000000000000");
    }

    #[test]
    fn test_parse_rejects_excess_precision() {
        let err = Dec::parse("0.1234567890123456789").unwrap_err();
        assert!(matches!(err, CodecError::InvalidDecimalPrecision { .. }));
        // Exactly 18 digits is fine.
        assert!(Dec::parse("0.123456789012345678").is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in ["", ".", "1.", ".5", "1.2.3", "1e5", "abc", "--1", "1,5"] {
            assert!(
                matches!(Dec::parse(bad), Err(CodecError::InvalidAmount { .. })),
                "expected `{bad}` to be rejected"
            );
        }
    }

    #[test]
    fn test_wire_form_is_the_mantissa() {
        let d = Dec::parse("0.100000000000000000").unwrap();
        assert_eq!(d.to_wire_string(), "100000000000000000");
        assert_eq!(Dec::from_wire_string("100000000000000000").unwrap(), d);
    }

    #[test]
    fn test_exact_arithmetic() {
        let a = Dec::parse("0.000000000000000001").unwrap();
        let b = Dec::parse("0.999999999999999999").unwrap();
        assert_eq!(a.checked_add(b).unwrap(), Dec::ONE);
        assert_eq!(Dec::ONE.checked_sub(a).unwrap(), b);
    }

    #[test]
    fn test_total_order() {
        let small = Dec::parse("0.1").unwrap();
        let big = Dec::parse("0.2").unwrap();
        assert!(small < big);
        assert!(Dec::parse("-1").unwrap() < Dec::ZERO);
    }
}
