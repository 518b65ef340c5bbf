// Path: crates/codec/src/ibc/channel.rs

//! IBC channel entities, the channel handshake messages, and the packet
//! relay messages.

use serde_json::{json, Value};

use columbus_types::error::CodecError;
use columbus_types::prelude::OptionExt;
use columbus_types::{bytes, Height, Result};

use ibc_proto::ibc::core::channel::v1 as raw;

use crate::data::{self, DataObject};
use crate::wire::{height_from_wire, height_to_wire, WireCodec};

/// Channel handshake state, stored as the wire's integer code and exposed
/// through the fixed ordered label list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State(i32);

impl State {
    /// The fixed ordered label list; position is the wire code.
    pub const LABELS: [&'static str; 5] = [
        "STATE_UNINITIALIZED_UNSPECIFIED",
        "STATE_INIT",
        "STATE_TRYOPEN",
        "STATE_OPEN",
        "STATE_CLOSED",
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

/// Packet delivery ordering guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order(i32);

impl Order {
    /// The fixed ordered label list; position is the wire code.
    pub const LABELS: [&'static str; 3] = [
        "ORDER_NONE_UNSPECIFIED",
        "ORDER_UNORDERED",
        "ORDER_ORDERED",
    ];

    /// Validates a wire code.
    pub fn from_code(code: i32) -> Result<Self> {
        data::code_label(&Self::LABELS, code)?;
        Ok(Order(code))
    }

    /// Resolves a data-form label to its code.
    pub fn from_label(label: &str) -> Result<Self> {
        Ok(Order(data::label_code(&Self::LABELS, label)?))
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

/// The counterparty chain's end of a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterparty {
    /// Port on the counterparty.
    pub port_id: String,
    /// Counterparty channel identifier; empty until known.
    pub channel_id: String,
}

impl Counterparty {
    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(Counterparty {
            port_id: data::string_field(data, "port_id")?,
            channel_id: data::string_field(data, "channel_id")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "port_id": self.port_id,
            "channel_id": self.channel_id,
        })
    }

    fn from_wire(raw: raw::Counterparty) -> Self {
        Counterparty {
            port_id: raw.port_id,
            channel_id: raw.channel_id,
        }
    }

    fn to_wire(&self) -> raw::Counterparty {
        raw::Counterparty {
            port_id: self.port_id.clone(),
            channel_id: self.channel_id.clone(),
        }
    }
}

/// One chain's end of an open or opening channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Handshake state.
    pub state: State,
    /// Packet ordering guarantee.
    pub ordering: Order,
    /// The counterparty's end.
    pub counterparty: Counterparty,
    /// Connection identifiers the channel travels over, order preserved.
    pub connection_hops: Vec<String>,
    /// Application version string.
    pub version: String,
}

impl Channel {
    /// Decodes the data form; states arrive as labels.
    pub fn from_data(data: &DataObject) -> Result<Self> {
        Ok(Channel {
            state: State::from_label(data::str_field(data, "state")?)
                .map_err(|e| e.under("state"))?,
            ordering: Order::from_label(data::str_field(data, "ordering")?)
                .map_err(|e| e.under("ordering"))?,
            counterparty: Counterparty::from_data(data::obj_field(data, "counterparty")?)
                .map_err(|e| e.under("counterparty"))?,
            connection_hops: hops_from_data(data)?,
            version: data::string_field(data, "version")?,
        })
    }

    /// Encodes the data form.
    pub fn to_data(&self) -> Value {
        json!({
            "state": self.state.label(),
            "ordering": self.ordering.label(),
            "counterparty": self.counterparty.to_data(),
            "connection_hops": self.connection_hops,
            "version": self.version,
        })
    }

    /// Converts from the wire tree.
    pub fn from_wire(raw: raw::Channel) -> Result<Self> {
        Ok(Channel {
            state: State::from_code(raw.state).map_err(|e| e.under("state"))?,
            ordering: Order::from_code(raw.ordering).map_err(|e| e.under("ordering"))?,
            counterparty: Counterparty::from_wire(raw.counterparty.required("counterparty")?),
            connection_hops: raw.connection_hops,
            version: raw.version,
        })
    }

    /// Converts to the wire tree.
    pub fn to_wire(&self) -> raw::Channel {
        raw::Channel {
            state: self.state.code(),
            ordering: self.ordering.code(),
            counterparty: Some(self.counterparty.to_wire()),
            connection_hops: self.connection_hops.clone(),
            version: self.version.clone(),
            ..Default::default()
        }
    }

    /// The legacy amino encoding was never defined for IBC entities.
    pub fn to_amino(&self) -> Result<Value> {
        Err(CodecError::UnsupportedEncoding("ibc.channel.Channel"))
    }
}

fn hops_from_data(data: &DataObject) -> Result<Vec<String>> {
    data::list_field(data, "connection_hops")?
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| CodecError::InvalidEncoding {
                    path: format!("connection_hops[{i}]"),
                    reason: "expected a string".into(),
                })
        })
        .collect()
}

/// An in-flight IBC packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Send-order sequence on the source channel.
    pub sequence: u64,
    /// Source port.
    pub source_port: String,
    /// Source channel.
    pub source_channel: String,
    /// Destination port.
    pub destination_port: String,
    /// Destination channel.
    pub destination_channel: String,
    /// Opaque application payload (base64 in the data form).
    pub data: Vec<u8>,
    /// Height after which the packet times out; zero-zero means none.
    pub timeout_height: Height,
    /// Unix-nanosecond timeout; zero means none.
    pub timeout_timestamp: u64,
}

impl Packet {
    /// Decodes the data form.
    pub fn from_data(data: &DataObject) -> Result<Self> {
        Ok(Packet {
            sequence: data::u64_field(data, "sequence")?,
            source_port: data::string_field(data, "source_port")?,
            source_channel: data::string_field(data, "source_channel")?,
            destination_port: data::string_field(data, "destination_port")?,
            destination_channel: data::string_field(data, "destination_channel")?,
            data: data::bytes_field(data, "data")?,
            timeout_height: data::height_field(data, "timeout_height")?,
            timeout_timestamp: data::u64_field(data, "timeout_timestamp")?,
        })
    }

    /// Encodes the data form.
    pub fn to_data(&self) -> Value {
        json!({
            "sequence": self.sequence.to_string(),
            "source_port": self.source_port,
            "source_channel": self.source_channel,
            "destination_port": self.destination_port,
            "destination_channel": self.destination_channel,
            "data": bytes::to_base64(&self.data),
            "timeout_height": data::height_to_data(self.timeout_height),
            "timeout_timestamp": self.timeout_timestamp.to_string(),
        })
    }

    /// Converts from the wire tree. An absent timeout height collapses to
    /// the zero-zero sentinel, matching how the chain treats it.
    pub fn from_wire(raw: raw::Packet) -> Result<Self> {
        Ok(Packet {
            sequence: raw.sequence,
            source_port: raw.source_port,
            source_channel: raw.source_channel,
            destination_port: raw.destination_port,
            destination_channel: raw.destination_channel,
            data: raw.data,
            timeout_height: raw
                .timeout_height
                .map(height_from_wire)
                .unwrap_or(Height::new(0, 0)),
            timeout_timestamp: raw.timeout_timestamp,
        })
    }

    /// Converts to the wire tree.
    pub fn to_wire(&self) -> raw::Packet {
        raw::Packet {
            sequence: self.sequence,
            source_port: self.source_port.clone(),
            source_channel: self.source_channel.clone(),
            destination_port: self.destination_port.clone(),
            destination_channel: self.destination_channel.clone(),
            data: self.data.clone(),
            timeout_height: Some(height_to_wire(self.timeout_height)),
            timeout_timestamp: self.timeout_timestamp,
        }
    }
}

fn packet_field(data: &DataObject) -> Result<Packet> {
    Packet::from_data(data::obj_field(data, "packet")?).map_err(|e| e.under("packet"))
}

fn channel_field(data: &DataObject) -> Result<Channel> {
    Channel::from_data(data::obj_field(data, "channel")?).map_err(|e| e.under("channel"))
}

/// Start a channel handshake from this chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgChannelOpenInit {
    /// Local port the channel binds to.
    pub port_id: String,
    /// The proposed channel end; its state must be INIT.
    pub channel: Channel,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgChannelOpenInit {
    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgChannelOpenInit";
    type Raw = raw::MsgChannelOpenInit;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgChannelOpenInit {
            port_id: raw.port_id,
            channel: Channel::from_wire(raw.channel.required("channel")?)
                .map_err(|e| e.under("channel"))?,
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgChannelOpenInit {
            port_id: self.port_id.clone(),
            channel: Some(self.channel.to_wire()),
            signer: self.signer.clone(),
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgChannelOpenInit {
            port_id: data::string_field(data, "port_id")?,
            channel: channel_field(data)?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "port_id": self.port_id,
            "channel": self.channel.to_data(),
            "signer": self.signer,
        })
    }
}

/// Answer a handshake started on the counterparty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgChannelOpenTry {
    /// Local port the channel binds to.
    pub port_id: String,
    /// The proposed channel end; its state must be TRYOPEN.
    pub channel: Channel,
    /// Version the counterparty proposed.
    pub counterparty_version: String,
    /// Proof the counterparty recorded INIT.
    pub proof_init: Vec<u8>,
    /// Height the proof was queried at.
    pub proof_height: Height,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgChannelOpenTry {
    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgChannelOpenTry";
    type Raw = raw::MsgChannelOpenTry;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgChannelOpenTry {
            port_id: raw.port_id,
            channel: Channel::from_wire(raw.channel.required("channel")?)
                .map_err(|e| e.under("channel"))?,
            counterparty_version: raw.counterparty_version,
            proof_init: raw.proof_init,
            proof_height: height_from_wire(raw.proof_height.required("proof_height")?),
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgChannelOpenTry {
            port_id: self.port_id.clone(),
            channel: Some(self.channel.to_wire()),
            counterparty_version: self.counterparty_version.clone(),
            proof_init: self.proof_init.clone(),
            proof_height: Some(height_to_wire(self.proof_height)),
            signer: self.signer.clone(),
            ..Default::default()
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgChannelOpenTry {
            port_id: data::string_field(data, "port_id")?,
            channel: channel_field(data)?,
            counterparty_version: data::string_field(data, "counterparty_version")?,
            proof_init: data::bytes_field(data, "proof_init")?,
            proof_height: data::height_field(data, "proof_height")?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "port_id": self.port_id,
            "channel": self.channel.to_data(),
            "counterparty_version": self.counterparty_version,
            "proof_init": bytes::to_base64(&self.proof_init),
            "proof_height": data::height_to_data(self.proof_height),
            "signer": self.signer,
        })
    }
}

/// Acknowledge the counterparty's TRY step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgChannelOpenAck {
    /// Local port.
    pub port_id: String,
    /// Local channel identifier.
    pub channel_id: String,
    /// Channel identifier assigned by the counterparty.
    pub counterparty_channel_id: String,
    /// Version the counterparty settled on.
    pub counterparty_version: String,
    /// Proof the counterparty recorded TRYOPEN.
    pub proof_try: Vec<u8>,
    /// Height the proof was queried at.
    pub proof_height: Height,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgChannelOpenAck {
    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgChannelOpenAck";
    type Raw = raw::MsgChannelOpenAck;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgChannelOpenAck {
            port_id: raw.port_id,
            channel_id: raw.channel_id,
            counterparty_channel_id: raw.counterparty_channel_id,
            counterparty_version: raw.counterparty_version,
            proof_try: raw.proof_try,
            proof_height: height_from_wire(raw.proof_height.required("proof_height")?),
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgChannelOpenAck {
            port_id: self.port_id.clone(),
            channel_id: self.channel_id.clone(),
            counterparty_channel_id: self.counterparty_channel_id.clone(),
            counterparty_version: self.counterparty_version.clone(),
            proof_try: self.proof_try.clone(),
            proof_height: Some(height_to_wire(self.proof_height)),
            signer: self.signer.clone(),
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgChannelOpenAck {
            port_id: data::string_field(data, "port_id")?,
            channel_id: data::string_field(data, "channel_id")?,
            counterparty_channel_id: data::string_field(data, "counterparty_channel_id")?,
            counterparty_version: data::string_field(data, "counterparty_version")?,
            proof_try: data::bytes_field(data, "proof_try")?,
            proof_height: data::height_field(data, "proof_height")?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "port_id": self.port_id,
            "channel_id": self.channel_id,
            "counterparty_channel_id": self.counterparty_channel_id,
            "counterparty_version": self.counterparty_version,
            "proof_try": bytes::to_base64(&self.proof_try),
            "proof_height": data::height_to_data(self.proof_height),
            "signer": self.signer,
        })
    }
}

/// Confirm the counterparty's ACK, opening the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgChannelOpenConfirm {
    /// Local port.
    pub port_id: String,
    /// Local channel identifier.
    pub channel_id: String,
    /// Proof the counterparty recorded OPEN.
    pub proof_ack: Vec<u8>,
    /// Height the proof was queried at.
    pub proof_height: Height,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgChannelOpenConfirm {
    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgChannelOpenConfirm";
    type Raw = raw::MsgChannelOpenConfirm;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgChannelOpenConfirm {
            port_id: raw.port_id,
            channel_id: raw.channel_id,
            proof_ack: raw.proof_ack,
            proof_height: height_from_wire(raw.proof_height.required("proof_height")?),
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgChannelOpenConfirm {
            port_id: self.port_id.clone(),
            channel_id: self.channel_id.clone(),
            proof_ack: self.proof_ack.clone(),
            proof_height: Some(height_to_wire(self.proof_height)),
            signer: self.signer.clone(),
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgChannelOpenConfirm {
            port_id: data::string_field(data, "port_id")?,
            channel_id: data::string_field(data, "channel_id")?,
            proof_ack: data::bytes_field(data, "proof_ack")?,
            proof_height: data::height_field(data, "proof_height")?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "port_id": self.port_id,
            "channel_id": self.channel_id,
            "proof_ack": bytes::to_base64(&self.proof_ack),
            "proof_height": data::height_to_data(self.proof_height),
            "signer": self.signer,
        })
    }
}

/// Voluntarily close a channel from this end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgChannelCloseInit {
    /// Local port.
    pub port_id: String,
    /// Local channel identifier.
    pub channel_id: String,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgChannelCloseInit {
    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgChannelCloseInit";
    type Raw = raw::MsgChannelCloseInit;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgChannelCloseInit {
            port_id: raw.port_id,
            channel_id: raw.channel_id,
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgChannelCloseInit {
            port_id: self.port_id.clone(),
            channel_id: self.channel_id.clone(),
            signer: self.signer.clone(),
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgChannelCloseInit {
            port_id: data::string_field(data, "port_id")?,
            channel_id: data::string_field(data, "channel_id")?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "port_id": self.port_id,
            "channel_id": self.channel_id,
            "signer": self.signer,
        })
    }
}

/// Close this end after the counterparty closed theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgChannelCloseConfirm {
    /// Local port.
    pub port_id: String,
    /// Local channel identifier.
    pub channel_id: String,
    /// Proof the counterparty recorded CLOSED.
    pub proof_init: Vec<u8>,
    /// Height the proof was queried at.
    pub proof_height: Height,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgChannelCloseConfirm {
    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgChannelCloseConfirm";
    type Raw = raw::MsgChannelCloseConfirm;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgChannelCloseConfirm {
            port_id: raw.port_id,
            channel_id: raw.channel_id,
            proof_init: raw.proof_init,
            proof_height: height_from_wire(raw.proof_height.required("proof_height")?),
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgChannelCloseConfirm {
            port_id: self.port_id.clone(),
            channel_id: self.channel_id.clone(),
            proof_init: self.proof_init.clone(),
            proof_height: Some(height_to_wire(self.proof_height)),
            signer: self.signer.clone(),
            ..Default::default()
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgChannelCloseConfirm {
            port_id: data::string_field(data, "port_id")?,
            channel_id: data::string_field(data, "channel_id")?,
            proof_init: data::bytes_field(data, "proof_init")?,
            proof_height: data::height_field(data, "proof_height")?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "port_id": self.port_id,
            "channel_id": self.channel_id,
            "proof_init": bytes::to_base64(&self.proof_init),
            "proof_height": data::height_to_data(self.proof_height),
            "signer": self.signer,
        })
    }
}

/// Deliver a packet to the destination chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgRecvPacket {
    /// The packet being delivered.
    pub packet: Packet,
    /// Proof the source chain committed the packet.
    pub proof_commitment: Vec<u8>,
    /// Height the proof was queried at.
    pub proof_height: Height,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgRecvPacket {
    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgRecvPacket";
    type Raw = raw::MsgRecvPacket;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgRecvPacket {
            packet: Packet::from_wire(raw.packet.required("packet")?)
                .map_err(|e| e.under("packet"))?,
            proof_commitment: raw.proof_commitment,
            proof_height: height_from_wire(raw.proof_height.required("proof_height")?),
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgRecvPacket {
            packet: Some(self.packet.to_wire()),
            proof_commitment: self.proof_commitment.clone(),
            proof_height: Some(height_to_wire(self.proof_height)),
            signer: self.signer.clone(),
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgRecvPacket {
            packet: packet_field(data)?,
            proof_commitment: data::bytes_field(data, "proof_commitment")?,
            proof_height: data::height_field(data, "proof_height")?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "packet": self.packet.to_data(),
            "proof_commitment": bytes::to_base64(&self.proof_commitment),
            "proof_height": data::height_to_data(self.proof_height),
            "signer": self.signer,
        })
    }
}

/// Relay a packet acknowledgement back to the source chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgAcknowledgement {
    /// The packet that was acknowledged.
    pub packet: Packet,
    /// Opaque acknowledgement bytes written by the destination app.
    pub acknowledgement: Vec<u8>,
    /// Proof the destination chain wrote the acknowledgement.
    pub proof_acked: Vec<u8>,
    /// Height the proof was queried at.
    pub proof_height: Height,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgAcknowledgement {
    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgAcknowledgement";
    type Raw = raw::MsgAcknowledgement;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgAcknowledgement {
            packet: Packet::from_wire(raw.packet.required("packet")?)
                .map_err(|e| e.under("packet"))?,
            acknowledgement: raw.acknowledgement,
            proof_acked: raw.proof_acked,
            proof_height: height_from_wire(raw.proof_height.required("proof_height")?),
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgAcknowledgement {
            packet: Some(self.packet.to_wire()),
            acknowledgement: self.acknowledgement.clone(),
            proof_acked: self.proof_acked.clone(),
            proof_height: Some(height_to_wire(self.proof_height)),
            signer: self.signer.clone(),
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgAcknowledgement {
            packet: packet_field(data)?,
            acknowledgement: data::bytes_field(data, "acknowledgement")?,
            proof_acked: data::bytes_field(data, "proof_acked")?,
            proof_height: data::height_field(data, "proof_height")?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "packet": self.packet.to_data(),
            "acknowledgement": bytes::to_base64(&self.acknowledgement),
            "proof_acked": bytes::to_base64(&self.proof_acked),
            "proof_height": data::height_to_data(self.proof_height),
            "signer": self.signer,
        })
    }
}

/// Prove on the source chain that a packet was never received in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgTimeout {
    /// The packet that timed out.
    pub packet: Packet,
    /// Proof the packet was never received.
    pub proof_unreceived: Vec<u8>,
    /// Height the proof was queried at.
    pub proof_height: Height,
    /// Destination's next receive sequence, for ordered channels.
    pub next_sequence_recv: u64,
    /// Bech32 address of the submitter.
    pub signer: String,
}

impl WireCodec for MsgTimeout {
    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgTimeout";
    type Raw = raw::MsgTimeout;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        Ok(MsgTimeout {
            packet: Packet::from_wire(raw.packet.required("packet")?)
                .map_err(|e| e.under("packet"))?,
            proof_unreceived: raw.proof_unreceived,
            proof_height: height_from_wire(raw.proof_height.required("proof_height")?),
            next_sequence_recv: raw.next_sequence_recv,
            signer: raw.signer,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgTimeout {
            packet: Some(self.packet.to_wire()),
            proof_unreceived: self.proof_unreceived.clone(),
            proof_height: Some(height_to_wire(self.proof_height)),
            next_sequence_recv: self.next_sequence_recv,
            signer: self.signer.clone(),
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgTimeout {
            packet: packet_field(data)?,
            proof_unreceived: data::bytes_field(data, "proof_unreceived")?,
            proof_height: data::height_field(data, "proof_height")?,
            next_sequence_recv: data::u64_field(data, "next_sequence_recv")?,
            signer: data::string_field(data, "signer")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "packet": self.packet.to_data(),
            "proof_unreceived": bytes::to_base64(&self.proof_unreceived),
            "proof_height": data::height_to_data(self.proof_height),
            "next_sequence_recv": self.next_sequence_recv.to_string(),
            "signer": self.signer,
        })
    }
}
