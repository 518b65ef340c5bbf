// Path: crates/codec/src/ibc/mod.rs

//! IBC entity families.
//!
//! None of the IBC families ever defined a legacy amino form: every
//! `to_amino` here fails with `UnsupportedEncoding` rather than returning a
//! partially-built structure.

pub mod channel;
pub mod client;
pub mod connection;

pub use channel::{Channel, Packet};
pub use client::{AnyClientState, AnyConsensusState};
pub use connection::ConnectionEnd;
