// Path: crates/types/src/prelude.rs

//! A curated set of commonly used traits and types.

use crate::error::CodecError;

/// An extension trait for `Option` that converts absent values into
/// [`CodecError::MissingField`] naming the field.
///
/// Optional nested messages on the wire and optional keys in the data form
/// both surface as `Option`; codecs use `required` to reject the absence
/// instead of silently defaulting.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, CodecError>`, reporting the
    /// named field as missing if the option is `None`.
    fn required(self, field: &str) -> Result<T, CodecError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn required(self, field: &str) -> Result<T, CodecError> {
        self.ok_or_else(|| CodecError::MissingField(field.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_names_the_missing_field() {
        let missing: Option<u32> = None;
        assert_eq!(
            missing.required("proof_height"),
            Err(CodecError::MissingField("proof_height".into()))
        );
        assert_eq!(Some(7u32).required("proof_height"), Ok(7));
    }
}
