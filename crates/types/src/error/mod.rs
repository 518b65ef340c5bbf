// Path: crates/types/src/error/mod.rs

//! The unified error taxonomy for decode failures.
//!
//! Every `from_data`/`from_wire` operation in the workspace reports one of
//! the variants below. Errors carry the full dotted field path to the value
//! that failed (e.g. `counterparty.prefix.key_prefix`); codecs extend the
//! path outward with [`CodecError::under`] as a failure propagates through
//! nested entities. Encoding, by contrast, is defined to never fail on a
//! validly constructed entity.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors raised while converting between data, wire and domain forms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A required field was absent during `from_data`/`from_wire`.
    #[error("missing field `{0}`")]
    MissingField(String),
    /// A numeric field was present but negative, non-numeric or out of range.
    #[error("invalid amount `{value}` at `{path}`")]
    InvalidAmount {
        /// Dotted path to the offending field.
        path: String,
        /// The rejected input text.
        value: String,
    },
    /// A field was present but malformed (bad base64, bad RFC3339, bad enum
    /// label, truncated wire payload, ...).
    #[error("invalid encoding at `{path}`: {reason}")]
    InvalidEncoding {
        /// Dotted path to the offending field.
        path: String,
        /// Human-readable description of the malformation.
        reason: String,
    },
    /// A decimal carried more than 18 fractional digits.
    #[error("`{value}` exceeds {max} fractional digits at `{path}`", max = crate::DECIMAL_PLACES)]
    InvalidDecimalPrecision {
        /// Dotted path to the offending field.
        path: String,
        /// The rejected input text.
        value: String,
    },
    /// A polymorphic decode met a type identifier with no registered codec.
    #[error("unknown message type `{0}`")]
    UnknownMessageType(String),
    /// The legacy amino encoding was requested for an entity family that
    /// deliberately does not define one.
    #[error("no legacy amino encoding for `{0}`")]
    UnsupportedEncoding(&'static str),
    /// A type identifier was registered twice. Fatal during initialization;
    /// never observed afterwards.
    #[error("duplicate registration of message type `{0}`")]
    DuplicateRegistration(String),
}

impl CodecError {
    /// Prefixes the field path of a path-carrying variant with `field`,
    /// threading nested failures outward one level at a time.
    ///
    /// Variants without a path (registry and registration errors) pass
    /// through unchanged.
    #[must_use]
    pub fn under(self, field: &str) -> Self {
        match self {
            Self::MissingField(path) => Self::MissingField(join(field, &path)),
            Self::InvalidAmount { path, value } => Self::InvalidAmount {
                path: join(field, &path),
                value,
            },
            Self::InvalidEncoding { path, reason } => Self::InvalidEncoding {
                path: join(field, &path),
                reason,
            },
            Self::InvalidDecimalPrecision { path, value } => Self::InvalidDecimalPrecision {
                path: join(field, &path),
                value,
            },
            other => other,
        }
    }
}

fn join(field: &str, path: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{field}.{path}")
    }
}

impl ErrorCode for CodecError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "CODEC_MISSING_FIELD",
            Self::InvalidAmount { .. } => "CODEC_INVALID_AMOUNT",
            Self::InvalidEncoding { .. } => "CODEC_INVALID_ENCODING",
            Self::InvalidDecimalPrecision { .. } => "CODEC_INVALID_DECIMAL_PRECISION",
            Self::UnknownMessageType(_) => "CODEC_UNKNOWN_MESSAGE_TYPE",
            Self::UnsupportedEncoding(_) => "CODEC_UNSUPPORTED_ENCODING",
            Self::DuplicateRegistration(_) => "CODEC_DUPLICATE_REGISTRATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_builds_dotted_paths() {
        let err = CodecError::InvalidEncoding {
            path: "key_prefix".into(),
            reason: "bad base64".into(),
        };
        let err = err.under("prefix").under("counterparty");
        assert_eq!(
            err.to_string(),
            "invalid encoding at `counterparty.prefix.key_prefix`: bad base64"
        );
    }

    #[test]
    fn test_under_fills_empty_path() {
        let err = CodecError::MissingField(String::new()).under("shares");
        assert_eq!(err, CodecError::MissingField("shares".into()));
    }

    #[test]
    fn test_under_leaves_registry_errors_untouched() {
        let err = CodecError::UnknownMessageType("/x.y.Msg".into()).under("messages");
        assert_eq!(err, CodecError::UnknownMessageType("/x.y.Msg".into()));
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            CodecError::MissingField("f".into()).code(),
            "CODEC_MISSING_FIELD"
        );
        assert_eq!(
            CodecError::UnsupportedEncoding("ibc").code(),
            "CODEC_UNSUPPORTED_ENCODING"
        );
    }
}
