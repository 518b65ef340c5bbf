// Path: crates/types/src/bytes.rs

//! Base64 helpers for opaque byte-string fields.
//!
//! Proofs, commitments, packet payloads and headers are opaque binary
//! blobs: the data form is standard base64 text, the wire form is the raw
//! bytes, and neither is ever interpreted as text.

use base64::{engine::general_purpose::STANDARD as B64, Engine as _};

use crate::error::CodecError;
use crate::Result;

/// Encodes raw bytes as standard base64 for the data form.
pub fn to_base64(bytes: &[u8]) -> String {
    B64.encode(bytes)
}

/// Decodes standard base64 text from the data form.
///
/// Malformed input fails with [`CodecError::InvalidEncoding`].
pub fn from_base64(text: &str) -> Result<Vec<u8>> {
    B64.decode(text).map_err(|e| CodecError::InvalidEncoding {
        path: String::new(),
        reason: format!("malformed base64: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_round_trip() {
        let payload = b"\x00\x01\xfftransfer data";
        let text = to_base64(payload);
        assert_eq!(from_base64(&text).unwrap(), payload);
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(to_base64(b""), "");
        assert_eq!(from_base64("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(matches!(
            from_base64("%%%"),
            Err(CodecError::InvalidEncoding { .. })
        ));
        assert!(from_base64("a").is_err());
    }
}
