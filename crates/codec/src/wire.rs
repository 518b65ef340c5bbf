// Path: crates/codec/src/wire.rs

//! The wire-side codec contract and domain/proto converters.
//!
//! The wire tree is the prost-generated schema from `ibc-proto`; this
//! module treats the byte-level encoder as a black box and only maps
//! between that tree and the domain types. [`WireCodec`] is the per-message
//! contract the registry dispatches through.

use prost::Message;
use serde_json::{json, Value};

use columbus_types::error::CodecError;
use columbus_types::{bytes, Coin, Duration, Height, Result, Timestamp, Uint};

use ibc_proto::cosmos::base::v1beta1::Coin as RawCoin;
use ibc_proto::google::protobuf::{
    Any as RawAny, Duration as RawDuration, Timestamp as RawTimestamp,
};
use ibc_proto::ibc::core::client::v1::Height as RawHeight;

use crate::data::{self, DataObject};

/// The four-way codec contract for message entities.
///
/// Each message has a unique type identifier (`TYPE_URL`), a wire-schema
/// descriptor (`Raw`), and total conversions between the data form, the
/// wire tree and the domain value. `from_*` rejects missing required
/// fields; `to_*` cannot fail on a constructed value.
pub trait WireCodec: Sized {
    /// The type identifier string, e.g. `/ibc.core.channel.v1.MsgRecvPacket`.
    const TYPE_URL: &'static str;

    /// The prost-generated wire-schema descriptor for this message.
    type Raw: Message + Default;

    /// Converts the wire tree into a domain value.
    fn from_wire(raw: Self::Raw) -> Result<Self>;

    /// Converts the domain value into the wire tree.
    fn to_wire(&self) -> Self::Raw;

    /// Converts a data-form mapping into a domain value.
    fn from_data(data: &DataObject) -> Result<Self>;

    /// Converts the domain value into its canonical data-form mapping.
    fn to_data(&self) -> Value;

    /// Decodes the wire tree from its binary payload, then converts it.
    fn from_wire_bytes(payload: &[u8]) -> Result<Self> {
        let raw = Self::Raw::decode(payload).map_err(|e| CodecError::InvalidEncoding {
            path: String::new(),
            reason: format!("malformed {} payload: {e}", Self::TYPE_URL),
        })?;
        Self::from_wire(raw)
    }

    /// Encodes the wire tree to its binary payload.
    fn to_wire_bytes(&self) -> Vec<u8> {
        self.to_wire().encode_to_vec()
    }

    /// Packs the message into an `Any`, deriving the type identifier from
    /// the static type rather than from data.
    fn to_any(&self) -> RawAny {
        RawAny {
            type_url: Self::TYPE_URL.to_string(),
            value: self.to_wire_bytes(),
        }
    }

    /// The legacy amino encoding. Families that never defined one keep this
    /// default, which fails with `UnsupportedEncoding` instead of producing
    /// a structurally corrupt fallback.
    fn to_amino(&self) -> Result<Value> {
        Err(CodecError::UnsupportedEncoding(Self::TYPE_URL))
    }
}

/// An `Any` payload whose concrete schema this codec does not model:
/// the type identifier plus the opaque payload blob, preserved exactly.
///
/// Used for consensus public keys, light-client headers and the fallback
/// variant of the client/consensus-state sum types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueAny {
    /// The embedded type identifier.
    pub type_url: String,
    /// The payload bytes, never interpreted.
    pub value: Vec<u8>,
}

impl OpaqueAny {
    /// Decodes the data form: `{"@type": ..., "value": <base64>}`.
    pub fn from_data(data: &DataObject) -> Result<Self> {
        Ok(OpaqueAny {
            type_url: data::string_field(data, "@type")?,
            value: data::bytes_field(data, "value")?,
        })
    }

    /// Encodes the data form with the payload as base64.
    pub fn to_data(&self) -> Value {
        json!({
            "@type": self.type_url,
            "value": bytes::to_base64(&self.value),
        })
    }

    /// Wraps a raw `Any` unchanged.
    pub fn from_wire(raw: RawAny) -> Self {
        OpaqueAny {
            type_url: raw.type_url,
            value: raw.value,
        }
    }

    /// Unwraps back into a raw `Any` unchanged.
    pub fn to_wire(&self) -> RawAny {
        RawAny {
            type_url: self.type_url.clone(),
            value: self.value.clone(),
        }
    }
}

// Converters between the numeric domain types and their ibc-proto
// counterparts. These live here rather than in `columbus-types` so the
// leaf crate stays free of the wire schema.

pub(crate) fn height_from_wire(raw: RawHeight) -> Height {
    Height::from_wire_fields(raw.revision_number, raw.revision_height)
}

pub(crate) fn height_to_wire(height: Height) -> RawHeight {
    let (revision_number, revision_height) = height.to_wire_fields();
    RawHeight {
        revision_number,
        revision_height,
    }
}

pub(crate) fn coin_from_wire(raw: &RawCoin) -> Result<Coin> {
    let amount = Uint::parse(&raw.amount).map_err(|e| e.under("amount"))?;
    Coin::new(&raw.denom, amount).map_err(|e| e.under("denom"))
}

pub(crate) fn coin_to_wire(coin: &Coin) -> RawCoin {
    RawCoin {
        denom: coin.denom().to_string(),
        amount: coin.amount().format(),
    }
}

pub(crate) fn timestamp_from_wire(raw: RawTimestamp) -> Result<Timestamp> {
    Timestamp::from_wire_fields(raw.seconds, raw.nanos)
}

pub(crate) fn timestamp_to_wire(ts: &Timestamp) -> RawTimestamp {
    let (seconds, nanos) = ts.to_wire_fields();
    RawTimestamp { seconds, nanos }
}

pub(crate) fn duration_from_wire(raw: RawDuration) -> Result<Duration> {
    Duration::from_wire_fields(raw.seconds, raw.nanos)
}

pub(crate) fn duration_to_wire(d: &Duration) -> RawDuration {
    let (seconds, nanos) = d.to_wire_fields();
    RawDuration { seconds, nanos }
}
