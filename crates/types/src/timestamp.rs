// Path: crates/types/src/timestamp.rs

//! RFC3339 timestamps.
//!
//! The data form is RFC3339 text in UTC; the wire schema carries the same
//! instant as two separate fields, `(seconds, nanos)` since the Unix epoch.

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

use crate::error::CodecError;
use crate::Result;

/// A UTC point in time with nanosecond precision.
///
/// Construction validates that the instant lies in the RFC3339-formattable
/// year range (0..=9999), so encoding never fails afterwards. Ordering and
/// equality follow the underlying instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// Builds a timestamp from whole seconds and sub-second nanoseconds
    /// since the Unix epoch.
    pub fn new(seconds: i64, nanos: u32) -> Result<Self> {
        let out_of_range = |reason: &str| CodecError::InvalidEncoding {
            path: String::new(),
            reason: format!("timestamp out of range: {reason}"),
        };
        let dt = OffsetDateTime::from_unix_timestamp(seconds)
            .map_err(|e| out_of_range(&e.to_string()))?
            .replace_nanosecond(nanos)
            .map_err(|e| out_of_range(&e.to_string()))?;
        if !(0..=9999).contains(&dt.year()) {
            return Err(out_of_range("year outside 0..=9999"));
        }
        Ok(Timestamp(dt))
    }

    /// Parses RFC3339 text, normalizing any offset to UTC.
    ///
    /// Normalization can push an instant written near the year bound with a
    /// non-UTC offset outside the representable range; that input is
    /// rejected, never a panic.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = |reason: String| CodecError::InvalidEncoding {
            path: String::new(),
            reason,
        };
        let dt = OffsetDateTime::parse(text, &Rfc3339)
            .map_err(|e| invalid(format!("invalid RFC3339 timestamp `{text}`: {e}")))?
            .checked_to_offset(UtcOffset::UTC)
            .ok_or_else(|| invalid(format!("timestamp out of range: `{text}`")))?;
        if !(0..=9999).contains(&dt.year()) {
            return Err(invalid(format!("timestamp out of range: `{text}`")));
        }
        Ok(Timestamp(dt))
    }

    /// Formats the canonical RFC3339 data form.
    pub fn to_rfc3339(&self) -> String {
        // The year range is validated at construction, so RFC3339
        // formatting cannot fail here.
        self.0
            .format(&Rfc3339)
            .expect("timestamp range validated at construction")
    }

    /// Whole seconds since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.0.unix_timestamp()
    }

    /// Sub-second nanoseconds.
    pub fn nanos(&self) -> u32 {
        self.0.nanosecond()
    }

    /// Assembles a timestamp from the two separate wire fields.
    pub fn from_wire_fields(seconds: i64, nanos: i32) -> Result<Self> {
        let nanos = u32::try_from(nanos).map_err(|_| CodecError::InvalidEncoding {
            path: String::new(),
            reason: format!("negative nanoseconds on the wire: {nanos}"),
        })?;
        Timestamp::new(seconds, nanos)
    }

    /// Splits a timestamp into the two separate wire fields.
    pub fn to_wire_fields(&self) -> (i64, i32) {
        (self.seconds(), self.nanos() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_round_trip() {
        let ts = Timestamp::parse("2023-04-18T09:30:00Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2023-04-18T09:30:00Z");
        assert_eq!(Timestamp::parse(&ts.to_rfc3339()).unwrap(), ts);
    }

    #[test]
    fn test_fractional_seconds_survive() {
        let ts = Timestamp::parse("2023-04-18T09:30:00.123456789Z").unwrap();
        assert_eq!(ts.nanos(), 123_456_789);
        assert_eq!(Timestamp::parse(&ts.to_rfc3339()).unwrap(), ts);
    }

    #[test]
    fn test_offsets_normalize_to_utc() {
        let utc = Timestamp::parse("2023-04-18T09:30:00Z").unwrap();
        let offset = Timestamp::parse("2023-04-18T11:30:00+02:00").unwrap();
        assert_eq!(utc, offset);
    }

    #[test]
    fn test_wire_fields_round_trip() {
        let ts = Timestamp::new(1_700_000_000, 5).unwrap();
        let (secs, nanos) = ts.to_wire_fields();
        assert_eq!(Timestamp::from_wire_fields(secs, nanos).unwrap(), ts);
    }

    #[test]
    fn test_rejects_malformed_text() {
        for bad in ["", "2023-04-18", "18/04/2023", "2023-04-18T09:30:00"] {
            assert!(
                matches!(
                    Timestamp::parse(bad),
                    Err(CodecError::InvalidEncoding { .. })
                ),
                "expected `{bad}` to be rejected"
            );
        }
    }

    #[test]
    fn test_offset_normalization_past_the_year_bound_is_rejected() {
        // Valid RFC3339 syntax whose UTC instant leaves year 0..=9999.
        for bad in ["9999-12-31T23:30:00-01:00", "0000-01-01T00:30:00+01:00"] {
            assert!(
                matches!(
                    Timestamp::parse(bad),
                    Err(CodecError::InvalidEncoding { .. })
                ),
                "expected `{bad}` to be rejected"
            );
        }
        // Inside the bound the offset still normalizes.
        let ts = Timestamp::parse("9999-12-31T22:30:00-01:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "9999-12-31T23:30:00Z");
    }

    #[test]
    fn test_negative_wire_nanos_rejected() {
        assert!(Timestamp::from_wire_fields(0, -1).is_err());
    }

    #[test]
    fn test_ordering_follows_the_instant() {
        let early = Timestamp::new(100, 0).unwrap();
        let late = Timestamp::new(100, 1).unwrap();
        assert!(early < late);
    }
}
