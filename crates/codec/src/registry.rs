// Path: crates/codec/src/registry.rs

//! The message registry: type identifier strings to concrete decoders.
//!
//! Decoding a heterogeneous message list is the one place the codec
//! dispatches on data instead of on a static type. The registry holds one
//! entry per supported message, keyed by its type identifier; the message
//! set is closed, so [`Msg`] enumerates every registrable type and
//! [`MsgRegistry::standard`] registers exactly that set.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde_json::Value;

use columbus_types::error::CodecError;
use columbus_types::Result;

use ibc_proto::google::protobuf::Any as RawAny;

use crate::data::{self, DataObject};
use crate::ibc::channel::{
    MsgAcknowledgement, MsgChannelCloseConfirm, MsgChannelCloseInit, MsgChannelOpenAck,
    MsgChannelOpenConfirm, MsgChannelOpenInit, MsgChannelOpenTry, MsgRecvPacket, MsgTimeout,
};
use crate::ibc::client::{MsgCreateClient, MsgUpdateClient, MsgUpgradeClient};
use crate::ibc::connection::{
    MsgConnectionOpenAck, MsgConnectionOpenConfirm, MsgConnectionOpenInit, MsgConnectionOpenTry,
};
use crate::staking::msgs::{MsgBeginRedelegate, MsgDelegate, MsgUndelegate};
use crate::wire::WireCodec;

macro_rules! messages {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        /// A decoded protocol message. The enum is closed: it covers exactly
        /// the set the standard registry dispatches to.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Msg {
            $($variant($ty),)+
        }

        $(
            impl From<$ty> for Msg {
                fn from(msg: $ty) -> Self {
                    Msg::$variant(msg)
                }
            }
        )+

        impl Msg {
            /// The type identifier of the wrapped message.
            pub fn type_url(&self) -> &'static str {
                match self {
                    $(Msg::$variant(_) => <$ty as WireCodec>::TYPE_URL,)+
                }
            }

            /// Packs the message into an `Any`. The identifier comes from
            /// the static type, so encoding cannot fail.
            pub fn to_any(&self) -> RawAny {
                match self {
                    $(Msg::$variant(msg) => msg.to_any(),)+
                }
            }

            /// Encodes the tagged data form: the message's data mapping with
            /// `"@type"` as the first key.
            pub fn to_data(&self) -> Value {
                let body = match self {
                    $(Msg::$variant(msg) => msg.to_data(),)+
                };
                let mut tagged = DataObject::new();
                tagged.insert("@type".into(), Value::String(self.type_url().into()));
                if let Value::Object(fields) = body {
                    tagged.extend(fields);
                }
                Value::Object(tagged)
            }

            /// The legacy amino form, for the families that define one.
            pub fn to_amino(&self) -> Result<Value> {
                match self {
                    $(Msg::$variant(msg) => msg.to_amino(),)+
                }
            }
        }

        impl MsgRegistry {
            /// The standard registry covering every [`Msg`] variant.
            pub fn standard() -> Self {
                let mut registry = MsgRegistry::new();
                $(
                    registry
                        .register::<$ty>()
                        .expect("standard message type identifiers are unique");
                )+
                registry
            }
        }
    };
}

messages! {
    Delegate => MsgDelegate,
    Undelegate => MsgUndelegate,
    BeginRedelegate => MsgBeginRedelegate,
    CreateClient => MsgCreateClient,
    UpdateClient => MsgUpdateClient,
    UpgradeClient => MsgUpgradeClient,
    ConnectionOpenInit => MsgConnectionOpenInit,
    ConnectionOpenTry => MsgConnectionOpenTry,
    ConnectionOpenAck => MsgConnectionOpenAck,
    ConnectionOpenConfirm => MsgConnectionOpenConfirm,
    ChannelOpenInit => MsgChannelOpenInit,
    ChannelOpenTry => MsgChannelOpenTry,
    ChannelOpenAck => MsgChannelOpenAck,
    ChannelOpenConfirm => MsgChannelOpenConfirm,
    ChannelCloseInit => MsgChannelCloseInit,
    ChannelCloseConfirm => MsgChannelCloseConfirm,
    RecvPacket => MsgRecvPacket,
    Acknowledgement => MsgAcknowledgement,
    Timeout => MsgTimeout,
}

type WireDecoder = fn(&[u8]) -> Result<Msg>;
type DataDecoder = fn(&DataObject) -> Result<Msg>;

struct Entry {
    from_wire_bytes: WireDecoder,
    from_data: DataDecoder,
}

fn wire_entry<M: WireCodec + Into<Msg>>(payload: &[u8]) -> Result<Msg> {
    M::from_wire_bytes(payload).map(Into::into)
}

fn data_entry<M: WireCodec + Into<Msg>>(data: &DataObject) -> Result<Msg> {
    M::from_data(data).map(Into::into)
}

/// Maps type identifier strings to decoders. Built once at startup and
/// read-only afterwards, so shared references are freely sendable across
/// threads.
pub struct MsgRegistry {
    entries: BTreeMap<&'static str, Entry>,
}

impl MsgRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        MsgRegistry {
            entries: BTreeMap::new(),
        }
    }

    /// Registers a message type under its type identifier. Registering the
    /// same identifier twice is a hard error, never a silent overwrite.
    pub fn register<M: WireCodec + Into<Msg>>(&mut self) -> Result<()> {
        if self.entries.contains_key(M::TYPE_URL) {
            return Err(CodecError::DuplicateRegistration(M::TYPE_URL.to_string()));
        }
        tracing::debug!(type_url = M::TYPE_URL, "registered message codec");
        self.entries.insert(
            M::TYPE_URL,
            Entry {
                from_wire_bytes: wire_entry::<M>,
                from_data: data_entry::<M>,
            },
        );
        Ok(())
    }

    /// Decodes a packed `Any` by looking up its embedded type identifier.
    pub fn decode_any(&self, any: &RawAny) -> Result<Msg> {
        let entry = self
            .entries
            .get(any.type_url.as_str())
            .ok_or_else(|| CodecError::UnknownMessageType(any.type_url.clone()))?;
        (entry.from_wire_bytes)(&any.value)
    }

    /// Decodes a tagged data-form value by its `"@type"` key.
    pub fn decode_data(&self, value: &Value) -> Result<Msg> {
        let data = data::as_object(value)?;
        let type_url = data::str_field(data, "@type")?;
        let entry = self
            .entries
            .get(type_url)
            .ok_or_else(|| CodecError::UnknownMessageType(type_url.to_string()))?;
        (entry.from_data)(data)
    }

    /// The number of registered message types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The registered type identifiers, in sorted order.
    pub fn type_urls(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for MsgRegistry {
    fn default() -> Self {
        MsgRegistry::standard()
    }
}

static REGISTRY: LazyLock<MsgRegistry> = LazyLock::new(MsgRegistry::standard);

/// The process-wide standard registry, built on first use.
pub fn registry() -> &'static MsgRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use columbus_types::{Coin, Height, Uint};
    use serde_json::json;

    use crate::ibc::channel::Packet;

    fn delegate() -> MsgDelegate {
        MsgDelegate {
            delegator_address: "terra1abc".into(),
            validator_address: "terravaloper1xyz".into(),
            amount: Coin::new("uluna", Uint::new(1_000_000)).unwrap(),
        }
    }

    fn recv_packet() -> MsgRecvPacket {
        MsgRecvPacket {
            packet: Packet {
                sequence: 1,
                source_port: "transfer".into(),
                source_channel: "channel-0".into(),
                destination_port: "transfer".into(),
                destination_channel: "channel-9".into(),
                data: vec![1, 2, 3],
                timeout_height: Height::new(1, 2000),
                timeout_timestamp: 0,
            },
            proof_commitment: vec![0xAA],
            proof_height: Height::new(1, 1999),
            signer: "terra1abc".into(),
        }
    }

    #[test]
    fn test_standard_registry_covers_every_message() {
        assert_eq!(registry().len(), 19);
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut r = MsgRegistry::standard();
        let err = r.register::<MsgDelegate>().unwrap_err();
        assert_eq!(
            err,
            CodecError::DuplicateRegistration("/cosmos.staking.v1beta1.MsgDelegate".into())
        );
    }

    #[test]
    fn test_unknown_type_identifier_is_rejected() {
        let any = RawAny {
            type_url: "/cosmos.gov.v1beta1.MsgVote".into(),
            value: vec![],
        };
        assert_eq!(
            registry().decode_any(&any).unwrap_err(),
            CodecError::UnknownMessageType("/cosmos.gov.v1beta1.MsgVote".into())
        );
    }

    #[test]
    fn test_any_round_trip_through_registry() {
        let msg: Msg = delegate().into();
        let decoded = registry().decode_any(&msg.to_any()).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_every_registered_type_decodes_its_own_default_payload() {
        // An empty payload is a valid encoding of every message's default
        // wire tree; nested required fields may be absent, but lookup and
        // dispatch must succeed for each identifier.
        for type_url in registry().type_urls() {
            let any = RawAny {
                type_url: type_url.to_string(),
                value: vec![],
            };
            match registry().decode_any(&any) {
                Ok(_) | Err(CodecError::MissingField(_)) => {}
                Err(other) => panic!("{type_url}: unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn test_tagged_data_round_trip_preserves_order() {
        let msgs: Vec<Msg> = vec![delegate().into(), recv_packet().into()];
        let encoded: Vec<Value> = msgs.iter().map(Msg::to_data).collect();

        // "@type" leads each mapping.
        for value in &encoded {
            let first = value.as_object().unwrap().keys().next().unwrap();
            assert_eq!(first, "@type");
        }

        let decoded: Vec<Msg> = encoded
            .iter()
            .map(|v| registry().decode_data(v).unwrap())
            .collect();
        assert_eq!(decoded, msgs);
    }

    #[test]
    fn test_untagged_data_is_rejected() {
        let err = registry()
            .decode_data(&json!({"delegator_address": "terra1abc"}))
            .unwrap_err();
        assert_eq!(err, CodecError::MissingField("@type".into()));
    }

    #[test]
    fn test_amino_dispatch_follows_the_family() {
        let staking: Msg = delegate().into();
        assert_eq!(staking.to_amino().unwrap()["type"], "staking/MsgDelegate");

        let ibc: Msg = recv_packet().into();
        assert!(matches!(
            ibc.to_amino(),
            Err(CodecError::UnsupportedEncoding(_))
        ));
    }
}
