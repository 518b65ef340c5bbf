// Path: crates/codec/src/data.rs

//! Field extraction helpers for the JSON-like "data" form.
//!
//! The transport hands this crate an already-parsed `serde_json::Value`;
//! the helpers here pull typed fields out of it, reporting
//! `MissingField`/`InvalidEncoding` with the offending key so nested codecs
//! can thread full paths via [`CodecError::under`].
//!
//! Decoding matches keys by name and never depends on key order; encoding
//! preserves insertion order (`serde_json/preserve_order`).

use serde_json::{json, Map, Value};

use columbus_types::error::CodecError;
use columbus_types::{bytes, Coin, Dec, Duration, Height, Result, Timestamp, Uint};

/// A data-form mapping: field name to JSON value, insertion-ordered.
pub type DataObject = Map<String, Value>;

/// Borrows `value` as a mapping.
pub fn as_object(value: &Value) -> Result<&DataObject> {
    value.as_object().ok_or_else(|| CodecError::InvalidEncoding {
        path: String::new(),
        reason: "expected a mapping".into(),
    })
}

/// Looks up a required key.
pub fn field<'a>(data: &'a DataObject, key: &str) -> Result<&'a Value> {
    data.get(key)
        .ok_or_else(|| CodecError::MissingField(key.to_string()))
}

/// A required string field.
pub fn str_field<'a>(data: &'a DataObject, key: &str) -> Result<&'a str> {
    field(data, key)?
        .as_str()
        .ok_or_else(|| type_error(key, "a string"))
}

/// A required string field, owned.
pub fn string_field(data: &DataObject, key: &str) -> Result<String> {
    str_field(data, key).map(str::to_string)
}

/// A required bool field.
pub fn bool_field(data: &DataObject, key: &str) -> Result<bool> {
    field(data, key)?
        .as_bool()
        .ok_or_else(|| type_error(key, "a boolean"))
}

/// A required unsigned 64-bit field.
///
/// Accepts either a JSON number or decimal text; values that may exceed the
/// 53-bit safe range are canonically carried as text.
pub fn u64_field(data: &DataObject, key: &str) -> Result<u64> {
    match field(data, key)? {
        Value::Number(n) => n.as_u64().ok_or_else(|| type_error(key, "an unsigned integer")),
        Value::String(s) => s
            .parse::<u64>()
            .map_err(|_| type_error(key, "an unsigned integer")),
        _ => Err(type_error(key, "an unsigned integer")),
    }
}

/// A required signed 64-bit field, number or decimal text.
pub fn i64_field(data: &DataObject, key: &str) -> Result<i64> {
    match field(data, key)? {
        Value::Number(n) => n.as_i64().ok_or_else(|| type_error(key, "an integer")),
        Value::String(s) => s.parse::<i64>().map_err(|_| type_error(key, "an integer")),
        _ => Err(type_error(key, "an integer")),
    }
}

/// A required byte-string field: base64 text in the data form.
pub fn bytes_field(data: &DataObject, key: &str) -> Result<Vec<u8>> {
    bytes::from_base64(str_field(data, key)?).map_err(|e| e.under(key))
}

/// A required nested mapping.
pub fn obj_field<'a>(data: &'a DataObject, key: &str) -> Result<&'a DataObject> {
    field(data, key)?
        .as_object()
        .ok_or_else(|| type_error(key, "a mapping"))
}

/// A required list field.
pub fn list_field<'a>(data: &'a DataObject, key: &str) -> Result<&'a Vec<Value>> {
    field(data, key)?
        .as_array()
        .ok_or_else(|| type_error(key, "a list"))
}

/// A required fixed-point decimal field in the point form.
pub fn dec_field(data: &DataObject, key: &str) -> Result<Dec> {
    Dec::parse(str_field(data, key)?).map_err(|e| e.under(key))
}

/// A required unsigned amount field in decimal text.
pub fn uint_field(data: &DataObject, key: &str) -> Result<Uint> {
    Uint::parse(str_field(data, key)?).map_err(|e| e.under(key))
}

/// A required RFC3339 timestamp field.
pub fn timestamp_field(data: &DataObject, key: &str) -> Result<Timestamp> {
    Timestamp::parse(str_field(data, key)?).map_err(|e| e.under(key))
}

/// A required proto-JSON duration field (`"1209600s"`).
pub fn duration_field(data: &DataObject, key: &str) -> Result<Duration> {
    Duration::parse(str_field(data, key)?).map_err(|e| e.under(key))
}

/// Decodes a coin mapping, `{"denom": ..., "amount": ...}`.
pub fn coin_from_data(value: &Value) -> Result<Coin> {
    let data = as_object(value)?;
    let denom = str_field(data, "denom")?;
    let amount = uint_field(data, "amount")?;
    Coin::new(denom, amount).map_err(|e| e.under("denom"))
}

/// Encodes a coin mapping with the amount as decimal text.
pub fn coin_to_data(coin: &Coin) -> Value {
    json!({
        "denom": coin.denom(),
        "amount": coin.amount().format(),
    })
}

/// A required coin field.
pub fn coin_field(data: &DataObject, key: &str) -> Result<Coin> {
    coin_from_data(field(data, key)?).map_err(|e| e.under(key))
}

/// Decodes a composite height mapping,
/// `{"revision_number": "1", "revision_height": "100"}`.
pub fn height_from_data(value: &Value) -> Result<Height> {
    let data = as_object(value)?;
    Ok(Height::new(
        u64_field(data, "revision_number")?,
        u64_field(data, "revision_height")?,
    ))
}

/// Encodes a composite height mapping with both components as text.
pub fn height_to_data(height: Height) -> Value {
    json!({
        "revision_number": height.revision_number.to_string(),
        "revision_height": height.revision_height.to_string(),
    })
}

/// A required height field.
pub fn height_field(data: &DataObject, key: &str) -> Result<Height> {
    height_from_data(field(data, key)?).map_err(|e| e.under(key))
}

/// Resolves a status/enumeration label against its fixed ordered label
/// list; the integer code is the label's position.
pub fn label_code(labels: &'static [&'static str], label: &str) -> Result<i32> {
    labels
        .iter()
        .position(|l| *l == label)
        .map(|i| i as i32)
        .ok_or_else(|| CodecError::InvalidEncoding {
            path: String::new(),
            reason: format!("unknown label `{label}`"),
        })
}

/// Derives the human-readable label for an integer code; codes outside the
/// label list are an error, never a default.
pub fn code_label(labels: &'static [&'static str], code: i32) -> Result<&'static str> {
    usize::try_from(code)
        .ok()
        .and_then(|i| labels.get(i).copied())
        .ok_or_else(|| CodecError::InvalidEncoding {
            path: String::new(),
            reason: format!("status code {code} out of range"),
        })
}

fn type_error(key: &str, expected: &str) -> CodecError {
    CodecError::InvalidEncoding {
        path: key.to_string(),
        reason: format!("expected {expected}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataObject {
        let value = json!({
            "name": "channel-0",
            "sequence": "42",
            "small": 7,
            "flag": true,
            "payload": "aGVsbG8=",
        });
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_missing_key_names_the_field() {
        let data = sample();
        assert_eq!(
            str_field(&data, "port_id").unwrap_err(),
            CodecError::MissingField("port_id".into())
        );
    }

    #[test]
    fn test_u64_accepts_text_and_number() {
        let data = sample();
        assert_eq!(u64_field(&data, "sequence").unwrap(), 42);
        assert_eq!(u64_field(&data, "small").unwrap(), 7);
        assert!(u64_field(&data, "flag").is_err());
    }

    #[test]
    fn test_bytes_field_decodes_base64() {
        let data = sample();
        assert_eq!(bytes_field(&data, "payload").unwrap(), b"hello");
    }

    #[test]
    fn test_coin_round_trip() {
        let coin = coin_from_data(&json!({"denom": "uluna", "amount": "1000000"})).unwrap();
        assert_eq!(coin_to_data(&coin), json!({"denom": "uluna", "amount": "1000000"}));
    }

    #[test]
    fn test_height_round_trip() {
        let value = json!({"revision_number": "1", "revision_height": "100"});
        let height = height_from_data(&value).unwrap();
        assert_eq!(height, Height::new(1, 100));
        assert_eq!(height_to_data(height), value);
    }

    #[test]
    fn test_label_lookup_is_positional_and_total() {
        const LABELS: [&str; 3] = ["A", "B", "C"];
        assert_eq!(label_code(&LABELS, "B").unwrap(), 1);
        assert_eq!(code_label(&LABELS, 2).unwrap(), "C");
        assert!(label_code(&LABELS, "D").is_err());
        assert!(code_label(&LABELS, 3).is_err());
        assert!(code_label(&LABELS, -1).is_err());
    }
}
