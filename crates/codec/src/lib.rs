// Path: crates/codec/src/lib.rs
#![forbid(unsafe_code)]

//! # Columbus Codec
//!
//! Typed codecs converting protocol entities between three representations:
//! the JSON-like "data" form handed over by the LCD transport, the
//! protobuf wire tree generated by `ibc-proto`, and immutable in-memory
//! domain values.
//!
//! Two protocol families are covered: staking (delegations, validators,
//! redelegation/unbonding lifecycles) and IBC (clients, connections,
//! channels, packets). Heterogeneous message lists are resolved through the
//! [`registry`], which maps type identifier strings like
//! `/ibc.core.channel.v1.MsgRecvPacket` to concrete decoders.
//!
//! Every codec is a pure, synchronous function; decode failures come back
//! as [`columbus_types::CodecError`] with the full dotted field path, and
//! encoding never fails on a validly constructed entity.

pub mod data;
/// IBC entity families: clients, connections, channels and packets.
pub mod ibc;
pub mod registry;
pub mod staking;
pub mod wire;

pub use registry::{registry, Msg, MsgRegistry};
pub use wire::{OpaqueAny, WireCodec};
