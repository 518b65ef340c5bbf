// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Columbus Types
//!
//! Numeric domain types shared by every entity codec in the workspace:
//! fixed-point decimals, token amounts, consensus heights, timestamps and
//! byte-string helpers, together with the codec error taxonomy.
//!
//! ## Architectural Role
//!
//! As the base crate, `columbus-types` has minimal dependencies and no
//! knowledge of the wire schema. The entity codec layer (`columbus-codec`)
//! builds on these types; nothing here depends back on it, so the numeric
//! domain stays independently testable.
//!
//! All values are immutable once constructed. Parsing is exact: no decimal or
//! integer field ever passes through a binary floating-point representation.

/// Exactly 18 fractional digits are carried by every [`Dec`] value.
pub const DECIMAL_PLACES: u32 = 18;

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::CodecError> = std::result::Result<T, E>;

/// Base64 helpers for opaque byte-string fields (proofs, commitments).
pub mod bytes;
/// Token balances as a `(denomination, amount)` pair.
pub mod coin;
/// Fixed-point decimal with exactly 18 fractional digits.
pub mod dec;
/// Protobuf-style durations with the proto-JSON `"<seconds>s"` text form.
pub mod duration;
/// The unified error taxonomy for decode failures.
pub mod error;
/// Revisioned consensus heights with lexicographic ordering.
pub mod height;
/// A prelude containing useful extension traits like `OptionExt`.
pub mod prelude;
/// RFC3339 timestamps backed by `(seconds, nanos)` wire fields.
pub mod timestamp;
/// Arbitrary-width unsigned token amounts in decimal text.
pub mod uint;

pub use coin::Coin;
pub use dec::Dec;
pub use duration::Duration;
pub use error::{CodecError, ErrorCode};
pub use height::Height;
pub use timestamp::Timestamp;
pub use uint::Uint;
