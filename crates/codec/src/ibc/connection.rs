// Path: crates/codec/src/ibc/connection.rs

//! IBC connection entities and the connection handshake messages.

use serde_json::{json, Value};

use columbus_types::error::CodecError;
use columbus_types::prelude::OptionExt;
use columbus_types::{bytes, Height, Result};

use ibc_proto::ibc::core::commitment::v1::MerklePrefix as RawMerklePrefix;
use ibc_proto::ibc::core::connection::v1 as raw;

use crate::data::{self, DataObject};
use crate::ibc::client::AnyClientState;
use crate::wire::{height_from_wire, height_to_wire, WireCodec};

/// Connection handshake state, stored as the wire's integer code and
/// exposed through the fixed ordered label list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State(i32);

impl State {
    /// The fixed ordered label list; position is the wire code.
    pub const LABELS: [&'static str; 4] = [
        "STATE_UNINITIALIZED_UNSPECIFIED",
        "STATE_INIT",
        "STATE_TRYOPEN",
        "STATE_OPEN",
    ];

    /// Validates a wire code.
    pub fn from_code(code: i32) -> Result<Self> {
        data::code_label(&Self::LABELS, code)?;
        Ok(State(code))
    }

    /// Resolves a data-form label to its code.
    pub fn from_label(label: &str) -> Result<Self> {
        Ok(State(data::label_code(&Self::LABELS, label)?))
    }

    /// The wire code.
    pub fn code(self) -> i32 {
        self.0
    }

    /// The derived human-readable label.
    pub fn label(self) -> &'static str {
        Self::LABELS[self.0 as usize]
    }
}

/// The key-prefix under which the counterparty commits IBC state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerklePrefix {
    /// Raw store prefix bytes (base64 in the data form).
    pub key_prefix: Vec<u8>,
}

impl MerklePrefix {
    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MerklePrefix {
            key_prefix: data::bytes_field(data, "key_prefix")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({ "key_prefix": bytes::to_base64(&self.key_prefix) })
    }

    fn from_wire(raw: RawMerklePrefix) -> Self {
        MerklePrefix {
            key_prefix: raw.key_prefix,
        }
    }

    fn to_wire(&self) -> RawMerklePrefix {
        RawMerklePrefix {
            key_prefix: self.key_prefix.clone(),
        }
    }
}

/// The counterparty chain's end of a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterparty {
    /// Client on the counterparty tracking this chain.
    pub client_id: String,
    /// Counterparty connection identifier; empty until known.
    pub connection_id: String,
    /// Counterparty commitment prefix.
    pub prefix: MerklePrefix,
}

impl Counterparty {
    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(Counterparty {
            client_id: data::string_field(data, "client_id")?,
            connection_id: data::string_field(data, "connection_id")?,
            prefix: MerklePrefix::from_data(data::obj_field(data, "prefix")?)
                .map_err(|e| e.under("prefix"))?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "client_id": self.client_id,
            "connection_id": self.connection_id,
            "prefix": self.prefix.to_data(),
        })
    }

    fn from_wire(raw: raw::Counterparty) -> Result<Self> {
        Ok(Counterparty {
            client_id: raw.client_id,
            connection_id: raw.connection_id,
            prefix: MerklePrefix::from_wire(raw.prefix.required("prefix")?),
        })
    }

    fn to_wire(&self) -> raw::Counterparty {
        raw::Counterparty {
            client_id: self.client_id.clone(),
            connection_id: self.connection_id.clone(),
            prefix: Some(self.prefix.to_wire()),
        }
    }
}

/// A supported connection version: protocol identifier plus the ordering
/// features it allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    /// Protocol version identifier.
    pub identifier: String,
    /// Supported channel ordering features.
    pub features: Vec<String>,
}

impl Version {
    fn from_data(data: &DataObject) -> Result<Self> {
        let features = data::list_field(data, "features")?
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_str().map(str::to_string).ok_or_else(|| {
                    CodecError::InvalidEncoding {
                        path: format!("features[{i}]"),
                        reason: "expected a string".into(),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Version {
            identifier: data::string_field(data, "identifier")?,
            features,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "identifier": self.identifier,
            "features": self.features,
        })
    }

    fn from_wire(raw: raw::Version) -> Self {
        Version {
            identifier: raw.identifier,
            features: raw.features,
        }
    }

    fn to_wire(&self) -> raw::Version {
        raw::Version {
            identifier: self.identifier.clone(),
            features: self.features.clone(),
        }
    }
}

fn versions_from_data(data: &DataObject, key: &str) -> Result<Vec<Version>> {
    data::list_field(data, key)?
        .iter()
        .enumerate()
        .map(|(i, v)| {
            Version::from_data(data::as_object(v)?).map_err(|e| e.under(&format!("{key}[{i}]")))
        })
        .collect()
}

/// One chain's end of an open or opening connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionEnd {
    /// Client this connection is bound to.
    pub client_id: String,
    /// Versions agreed during the handshake, order preserved.
    pub versions: Vec<Version>,
    /// Handshake state.
    pub state: State,
    /// The counterparty's end.
    pub counterparty: Counterparty,
    /// Packet delay in nanoseconds.
    pub delay_period: u64,
}

impl ConnectionEnd {
    /// Decodes the data form; the state arrives as its label.
    pub fn from_data(data: &DataObject) -> Result<Self> {
        Ok(ConnectionEnd {
            client_id: data::string_field(data, "client_id")?,
            versions: versions_from_data(data, "versions")?,
            state: State::from_label(data::str_field(data, "state")?)
                .map_err(|e| e.under("state"))?,
            counterparty: Counterparty::from_data(data::obj_field(data, "counterparty")?)
                .map_err(|e| e.under("counterparty"))?,
            delay_period: data::u64_field(data, "delay_period")?,
        })
    }

    /// Encodes the data form.
    pub fn to_data(&self) -> Value {
        json!({
            "client_id": self.client_id,
            "versions": self.versions.iter().map(Version::to_data).collect::<Vec<_>>(),
            "state": self.state.label(),
            "counterparty": self.counterparty.to_data(),
            "delay_period": self.delay_period.to_string(),
        })
    }

    /// Converts from the wire tree.
    pub fn from_wire(raw: raw::ConnectionEnd) -> Result<Self> {
        Ok(ConnectionEnd {
            client_id: raw.client_id,
            versions: raw.versions.into_iter().map(Version::from_wire).collect(),
            state: State::from_code(raw.state).map_err(|e| e.under("state"))?,
            counterparty: Counterparty::from_wire(raw.counterparty.required("counterparty")?)
                .map_err(|e| e.under("counterparty"))?,
            delay_period: raw.delay_period,
        })
    }

    /// Converts to the wire tree.
    pub fn to_wire(&self) -> raw::ConnectionEnd {
        raw::ConnectionEnd {
            client_id: self.client_id.clone(),
            versions: self.versions.iter().map(Version::to_wire).collect(),
            state: self.state.code(),
            counterparty: Some(self.counterparty.to_wire()),
            delay_period: self.delay_period,
        }
    }

    /// The legacy amino encoding was never defined for IBC entities.
    pub fn to_amino(&self) -> Result<Value> {
        Err(CodecError::UnsupportedEncoding("ibc.connection.ConnectionEnd"))
    }
}

/// Start a connection handshake from this chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgConnectionOpenInit {
    /// Local client the connection binds to.
    pub client_id: String,
    /// The counterparty's end.
    pub counterparty: Counterparty,
    /// Optional preferred version.
    pub version: Option<Version>,
    /// Packet delay in nanoseconds.
    pub delay_period: u64,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgConnectionOpenInit {
    const TYPE_URL: &'static str = "/ibc.core.connection.v1.MsgConnectionOpenInit";
    type Raw = raw::MsgConnectionOpenInit;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgConnectionOpenInit {
            client_id: raw.client_id,
            counterparty: Counterparty::from_wire(raw.counterparty.required("counterparty")?)
                .map_err(|e| e.under("counterparty"))?,
            version: raw.version.map(Version::from_wire),
            delay_period: raw.delay_period,
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgConnectionOpenInit {
            client_id: self.client_id.clone(),
            counterparty: Some(self.counterparty.to_wire()),
            version: self.version.as_ref().map(Version::to_wire),
            delay_period: self.delay_period,
            signer: self.signer.clone(),
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        let version = match data.get("version") {
            Some(Value::Null) | None => None,
            Some(v) => {
                Some(Version::from_data(data::as_object(v)?).map_err(|e| e.under("version"))?)
            }
        };
        Ok(MsgConnectionOpenInit {
            client_id: data::string_field(data, "client_id")?,
            counterparty: Counterparty::from_data(data::obj_field(data, "counterparty")?)
                .map_err(|e| e.under("counterparty"))?,
            version,
            delay_period: data::u64_field(data, "delay_period")?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "client_id": self.client_id,
            "counterparty": self.counterparty.to_data(),
            "version": self.version.as_ref().map(Version::to_data),
            "delay_period": self.delay_period.to_string(),
            "signer": self.signer,
        })
    }
}

/// Answer a handshake started on the counterparty.
#[derive(Debug, Clone, PartialEq)]
pub struct MsgConnectionOpenTry {
    /// Local client the connection binds to.
    pub client_id: String,
    /// The counterparty's view of this chain's client.
    pub client_state: AnyClientState,
    /// The counterparty's end.
    pub counterparty: Counterparty,
    /// Packet delay in nanoseconds.
    pub delay_period: u64,
    /// Versions the counterparty supports, order preserved.
    pub counterparty_versions: Vec<Version>,
    /// Height the proofs were queried at.
    pub proof_height: Height,
    /// Proof the counterparty recorded INIT.
    pub proof_init: Vec<u8>,
    /// Proof of the counterparty's client state.
    pub proof_client: Vec<u8>,
    /// Proof of the counterparty's consensus state.
    pub proof_consensus: Vec<u8>,
    /// Height of the consensus state being proven.
    pub consensus_height: Height,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgConnectionOpenTry {
    const TYPE_URL: &'static str = "/ibc.core.connection.v1.MsgConnectionOpenTry";
    type Raw = raw::MsgConnectionOpenTry;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgConnectionOpenTry {
            client_id: raw.client_id,
            client_state: AnyClientState::from_wire(raw.client_state.required("client_state")?)
                .map_err(|e| e.under("client_state"))?,
            counterparty: Counterparty::from_wire(raw.counterparty.required("counterparty")?)
                .map_err(|e| e.under("counterparty"))?,
            delay_period: raw.delay_period,
            counterparty_versions: raw
                .counterparty_versions
                .into_iter()
                .map(Version::from_wire)
                .collect(),
            proof_height: height_from_wire(raw.proof_height.required("proof_height")?),
            proof_init: raw.proof_init,
            proof_client: raw.proof_client,
            proof_consensus: raw.proof_consensus,
            consensus_height: height_from_wire(raw.consensus_height.required("consensus_height")?),
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgConnectionOpenTry {
            client_id: self.client_id.clone(),
            client_state: Some(self.client_state.to_wire()),
            counterparty: Some(self.counterparty.to_wire()),
            delay_period: self.delay_period,
            counterparty_versions: self
                .counterparty_versions
                .iter()
                .map(Version::to_wire)
                .collect(),
            proof_height: Some(height_to_wire(self.proof_height)),
            proof_init: self.proof_init.clone(),
            proof_client: self.proof_client.clone(),
            proof_consensus: self.proof_consensus.clone(),
            consensus_height: Some(height_to_wire(self.consensus_height)),
            signer: self.signer.clone(),
            ..Default::default()
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgConnectionOpenTry {
            client_id: data::string_field(data, "client_id")?,
            client_state: AnyClientState::from_data(data::obj_field(data, "client_state")?)
                .map_err(|e| e.under("client_state"))?,
            counterparty: Counterparty::from_data(data::obj_field(data, "counterparty")?)
                .map_err(|e| e.under("counterparty"))?,
            delay_period: data::u64_field(data, "delay_period")?,
            counterparty_versions: versions_from_data(data, "counterparty_versions")?,
            proof_height: data::height_field(data, "proof_height")?,
            proof_init: data::bytes_field(data, "proof_init")?,
            proof_client: data::bytes_field(data, "proof_client")?,
            proof_consensus: data::bytes_field(data, "proof_consensus")?,
            consensus_height: data::height_field(data, "consensus_height")?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "client_id": self.client_id,
            "client_state": self.client_state.to_data(),
            "counterparty": self.counterparty.to_data(),
            "delay_period": self.delay_period.to_string(),
            "counterparty_versions": self
                .counterparty_versions
                .iter()
                .map(Version::to_data)
                .collect::<Vec<_>>(),
            "proof_height": data::height_to_data(self.proof_height),
            "proof_init": bytes::to_base64(&self.proof_init),
            "proof_client": bytes::to_base64(&self.proof_client),
            "proof_consensus": bytes::to_base64(&self.proof_consensus),
            "consensus_height": data::height_to_data(self.consensus_height),
            "signer": self.signer,
        })
    }
}

/// Acknowledge the counterparty's TRY step.
#[derive(Debug, Clone, PartialEq)]
pub struct MsgConnectionOpenAck {
    /// Local connection identifier.
    pub connection_id: String,
    /// Counterparty connection identifier.
    pub counterparty_connection_id: String,
    /// The agreed version.
    pub version: Version,
    /// The counterparty's view of this chain's client.
    pub client_state: AnyClientState,
    /// Height the proofs were queried at.
    pub proof_height: Height,
    /// Proof the counterparty recorded TRYOPEN.
    pub proof_try: Vec<u8>,
    /// Proof of the counterparty's client state.
    pub proof_client: Vec<u8>,
    /// Proof of the counterparty's consensus state.
    pub proof_consensus: Vec<u8>,
    /// Height of the consensus state being proven.
    pub consensus_height: Height,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgConnectionOpenAck {
    const TYPE_URL: &'static str = "/ibc.core.connection.v1.MsgConnectionOpenAck";
    type Raw = raw::MsgConnectionOpenAck;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgConnectionOpenAck {
            connection_id: raw.connection_id,
            counterparty_connection_id: raw.counterparty_connection_id,
            version: Version::from_wire(raw.version.required("version")?),
            client_state: AnyClientState::from_wire(raw.client_state.required("client_state")?)
                .map_err(|e| e.under("client_state"))?,
            proof_height: height_from_wire(raw.proof_height.required("proof_height")?),
            proof_try: raw.proof_try,
            proof_client: raw.proof_client,
            proof_consensus: raw.proof_consensus,
            consensus_height: height_from_wire(raw.consensus_height.required("consensus_height")?),
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgConnectionOpenAck {
            connection_id: self.connection_id.clone(),
            counterparty_connection_id: self.counterparty_connection_id.clone(),
            version: Some(self.version.to_wire()),
            client_state: Some(self.client_state.to_wire()),
            proof_height: Some(height_to_wire(self.proof_height)),
            proof_try: self.proof_try.clone(),
            proof_client: self.proof_client.clone(),
            proof_consensus: self.proof_consensus.clone(),
            consensus_height: Some(height_to_wire(self.consensus_height)),
            signer: self.signer.clone(),
            ..Default::default()
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgConnectionOpenAck {
            connection_id: data::string_field(data, "connection_id")?,
            counterparty_connection_id: data::string_field(data, "counterparty_connection_id")?,
            version: Version::from_data(data::obj_field(data, "version")?)
                .map_err(|e| e.under("version"))?,
            client_state: AnyClientState::from_data(data::obj_field(data, "client_state")?)
                .map_err(|e| e.under("client_state"))?,
            proof_height: data::height_field(data, "proof_height")?,
            proof_try: data::bytes_field(data, "proof_try")?,
            proof_client: data::bytes_field(data, "proof_client")?,
            proof_consensus: data::bytes_field(data, "proof_consensus")?,
            consensus_height: data::height_field(data, "consensus_height")?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "connection_id": self.connection_id,
            "counterparty_connection_id": self.counterparty_connection_id,
            "version": self.version.to_data(),
            "client_state": self.client_state.to_data(),
            "proof_height": data::height_to_data(self.proof_height),
            "proof_try": bytes::to_base64(&self.proof_try),
            "proof_client": bytes::to_base64(&self.proof_client),
            "proof_consensus": bytes::to_base64(&self.proof_consensus),
            "consensus_height": data::height_to_data(self.consensus_height),
            "signer": self.signer,
        })
    }
}

/// Confirm the counterparty's ACK, opening the connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgConnectionOpenConfirm {
    /// Local connection identifier.
    pub connection_id: String,
    /// Proof the counterparty recorded OPEN.
    pub proof_ack: Vec<u8>,
    /// Height the proof was queried at.
    pub proof_height: Height,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgConnectionOpenConfirm {
    const TYPE_URL: &'static str = "/ibc.core.connection.v1.MsgConnectionOpenConfirm";
    type Raw = raw::MsgConnectionOpenConfirm;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgConnectionOpenConfirm {
            connection_id: raw.connection_id,
            proof_ack: raw.proof_ack,
            proof_height: height_from_wire(raw.proof_height.required("proof_height")?),
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgConnectionOpenConfirm {
            connection_id: self.connection_id.clone(),
            proof_ack: self.proof_ack.clone(),
            proof_height: Some(height_to_wire(self.proof_height)),
            signer: self.signer.clone(),
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgConnectionOpenConfirm {
            connection_id: data::string_field(data, "connection_id")?,
            proof_ack: data::bytes_field(data, "proof_ack")?,
            proof_height: data::height_field(data, "proof_height")?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "connection_id": self.connection_id,
            "proof_ack": bytes::to_base64(&self.proof_ack),
            "proof_height": data::height_to_data(self.proof_height),
            "signer": self.signer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counterparty() -> Counterparty {
        Counterparty {
            client_id: "07-tendermint-7".into(),
            connection_id: "connection-3".into(),
            prefix: MerklePrefix {
                key_prefix: b"ibc".to_vec(),
            },
        }
    }

    fn connection_end() -> ConnectionEnd {
        ConnectionEnd {
            client_id: "07-tendermint-0".into(),
            versions: vec![Version {
                identifier: "1".into(),
                features: vec!["ORDER_ORDERED".into(), "ORDER_UNORDERED".into()],
            }],
            state: State::from_label("STATE_OPEN").unwrap(),
            counterparty: counterparty(),
            delay_period: 0,
        }
    }

    #[test]
    fn test_connection_end_round_trips() {
        let end = connection_end();
        assert_eq!(ConnectionEnd::from_wire(end.to_wire()).unwrap(), end);
        let data = end.to_data();
        assert_eq!(data["state"], "STATE_OPEN");
        assert_eq!(
            ConnectionEnd::from_data(data.as_object().unwrap()).unwrap(),
            end
        );
    }

    #[test]
    fn test_connection_end_amino_is_unsupported() {
        assert!(matches!(
            connection_end().to_amino(),
            Err(CodecError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_nested_prefix_error_path() {
        let mut data = connection_end().to_data();
        data["counterparty"]["prefix"]["key_prefix"] = json!("%%%");
        let err = ConnectionEnd::from_data(data.as_object().unwrap()).unwrap_err();
        assert!(
            matches!(
                err,
                CodecError::InvalidEncoding { ref path, .. }
                    if path == "counterparty.prefix.key_prefix"
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_open_init_round_trips_with_and_without_version() {
        for version in [
            None,
            Some(Version {
                identifier: "1".into(),
                features: vec!["ORDER_UNORDERED".into()],
            }),
        ] {
            let msg = MsgConnectionOpenInit {
                client_id: "07-tendermint-0".into(),
                counterparty: counterparty(),
                version,
                delay_period: 5_000_000_000,
                signer: "terra1abc".into(),
            };
            assert_eq!(
                MsgConnectionOpenInit::from_wire(msg.to_wire()).unwrap(),
                msg
            );
            let data = msg.to_data();
            assert_eq!(
                MsgConnectionOpenInit::from_data(data.as_object().unwrap()).unwrap(),
                msg
            );
        }
    }

    #[test]
    fn test_open_confirm_round_trips() {
        let msg = MsgConnectionOpenConfirm {
            connection_id: "connection-0".into(),
            proof_ack: vec![1, 2, 3],
            proof_height: Height::new(1, 77),
            signer: "terra1abc".into(),
        };
        assert_eq!(
            MsgConnectionOpenConfirm::from_wire(msg.to_wire()).unwrap(),
            msg
        );
        let data = msg.to_data();
        assert_eq!(
            MsgConnectionOpenConfirm::from_data(data.as_object().unwrap()).unwrap(),
            msg
        );
    }

    #[test]
    fn test_state_codes_are_closed() {
        assert!(State::from_code(4).is_err());
        assert!(State::from_label("STATE_FROZEN").is_err());
        assert_eq!(State::from_code(3).unwrap().label(), "STATE_OPEN");
    }
}
