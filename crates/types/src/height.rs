// Path: crates/types/src/height.rs

//! Revisioned consensus heights.
//!
//! A `Height` identifies a point in an inter-chain client's history as a
//! `(revision_number, revision_height)` pair. The wire schema carries the
//! two fields separately; the data form is one composite mapping with both
//! values as decimal strings.

use std::fmt;

/// A `(revision_number, revision_height)` pair with lexicographic ordering.
///
/// The derived `Ord` compares `revision_number` first, which is the total
/// order used for proof and consensus height comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Height {
    /// The revision (chain upgrade era) this height belongs to.
    pub revision_number: u64,
    /// The block height within the revision.
    pub revision_height: u64,
}

impl Height {
    /// Builds a height from its two components.
    pub const fn new(revision_number: u64, revision_height: u64) -> Self {
        Height {
            revision_number,
            revision_height,
        }
    }

    /// Assembles a height from the two separate wire fields.
    pub const fn from_wire_fields(revision_number: u64, revision_height: u64) -> Self {
        Height::new(revision_number, revision_height)
    }

    /// Splits a height into the two separate wire fields.
    pub const fn to_wire_fields(self) -> (u64, u64) {
        (self.revision_number, self.revision_height)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.revision_number, self.revision_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_ordering() {
        assert!(Height::new(1, 100) < Height::new(1, 200));
        assert!(Height::new(1, 200) < Height::new(2, 0));
        assert_eq!(Height::new(3, 7), Height::new(3, 7));
    }

    #[test]
    fn test_wire_fields_round_trip() {
        let h = Height::new(5, 42);
        let (n, v) = h.to_wire_fields();
        assert_eq!(Height::from_wire_fields(n, v), h);
    }
}
