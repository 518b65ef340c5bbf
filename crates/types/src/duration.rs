// Path: crates/types/src/duration.rs

//! Protobuf-style durations.
//!
//! The data form follows the proto-JSON convention: decimal seconds with up
//! to nine fractional digits and a trailing `s` (`"1209600s"`, `"0.5s"`).
//! The wire schema carries `(seconds, nanos)` as two separate fields. Only
//! non-negative durations occur in this codec (trusting periods, unbonding
//! periods, clock drift bounds).

use std::fmt;

use crate::error::CodecError;
use crate::Result;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A non-negative span of time with nanosecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    seconds: u64,
    nanos: u32,
}

impl Duration {
    /// Builds a duration from whole seconds and sub-second nanoseconds.
    pub fn new(seconds: u64, nanos: u32) -> Result<Self> {
        if nanos >= NANOS_PER_SECOND {
            return Err(CodecError::InvalidEncoding {
                path: String::new(),
                reason: format!("sub-second nanoseconds out of range: {nanos}"),
            });
        }
        Ok(Duration { seconds, nanos })
    }

    /// Parses the proto-JSON text form, e.g. `"1209600s"` or `"0.5s"`.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || CodecError::InvalidEncoding {
            path: String::new(),
            reason: format!("invalid duration `{text}`"),
        };
        let body = text.strip_suffix('s').ok_or_else(invalid)?;
        let (secs_part, frac_part) = match body.split_once('.') {
            Some((s, f)) => (s, f),
            None => (body, ""),
        };
        if secs_part.is_empty() || !secs_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if body.contains('.') && frac_part.is_empty() {
            return Err(invalid());
        }
        if frac_part.len() > 9 || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let seconds: u64 = secs_part.parse().map_err(|_| invalid())?;
        let mut nanos: u32 = if frac_part.is_empty() {
            0
        } else {
            frac_part.parse().map_err(|_| invalid())?
        };
        for _ in frac_part.len()..9 {
            nanos *= 10;
        }
        Duration::new(seconds, nanos)
    }

    /// Formats the canonical proto-JSON text form. Trailing fractional
    /// zeros are trimmed, so `format(parse(s))` is a fixed point.
    pub fn format(&self) -> String {
        if self.nanos == 0 {
            return format!("{}s", self.seconds);
        }
        let frac = format!("{:09}", self.nanos);
        format!("{}.{}s", self.seconds, frac.trim_end_matches('0'))
    }

    /// Whole seconds.
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Sub-second nanoseconds.
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Assembles a duration from the two separate wire fields.
    pub fn from_wire_fields(seconds: i64, nanos: i32) -> Result<Self> {
        let negative = |what: &str, v: i64| CodecError::InvalidEncoding {
            path: String::new(),
            reason: format!("negative duration {what} on the wire: {v}"),
        };
        let seconds = u64::try_from(seconds).map_err(|_| negative("seconds", seconds))?;
        let nanos = u32::try_from(nanos).map_err(|_| negative("nanos", i64::from(nanos)))?;
        Duration::new(seconds, nanos)
    }

    /// Splits a duration into the two separate wire fields.
    pub fn to_wire_fields(&self) -> (i64, i32) {
        (self.seconds as i64, self.nanos as i32)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
