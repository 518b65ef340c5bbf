// Path: crates/codec/tests/message_lists.rs

//! End-to-end decoding of heterogeneous message lists through the
//! registry, the way a transaction body arrives from the transport.

use columbus_codec::ibc::channel::{MsgRecvPacket, Packet};
use columbus_codec::ibc::connection::{
    Counterparty, MerklePrefix, MsgConnectionOpenInit,
};
use columbus_codec::registry::{registry, Msg};
use columbus_codec::staking::msgs::{MsgDelegate, MsgUndelegate};
use columbus_types::{Coin, Height, Uint};
use serde_json::{json, Value};

fn sample_msgs() -> Vec<Msg> {
    vec![
        MsgDelegate {
            delegator_address: "terra1d7aj6".into(),
            validator_address: "terravaloper1rfl2".into(),
            amount: Coin::new("uluna", Uint::new(25_000_000)).unwrap(),
        }
        .into(),
        MsgConnectionOpenInit {
            client_id: "07-tendermint-0".into(),
            counterparty: Counterparty {
                client_id: "07-tendermint-42".into(),
                connection_id: String::new(),
                prefix: MerklePrefix {
                    key_prefix: b"ibc".to_vec(),
                },
            },
            version: None,
            delay_period: 0,
            signer: "terra1d7aj6".into(),
        }
        .into(),
        MsgRecvPacket {
            packet: Packet {
                sequence: 3,
                source_port: "transfer".into(),
                source_channel: "channel-1".into(),
                destination_port: "transfer".into(),
                destination_channel: "channel-0".into(),
                data: br#"{"denom":"uluna","amount":"5"}"#.to_vec(),
                timeout_height: Height::new(1, 90_000),
                timeout_timestamp: 1_700_000_000_000_000_000,
            },
            proof_commitment: vec![0x12, 0x34],
            proof_height: Height::new(1, 89_500),
            signer: "terra1d7aj6".into(),
        }
        .into(),
        MsgUndelegate {
            delegator_address: "terra1d7aj6".into(),
            validator_address: "terravaloper1rfl2".into(),
            amount: Coin::new("uluna", Uint::new(1)).unwrap(),
        }
        .into(),
    ]
}

#[test]
fn wire_list_round_trips_in_order() {
    let msgs = sample_msgs();
    let anys: Vec<_> = msgs.iter().map(Msg::to_any).collect();
    let decoded: Vec<Msg> = anys
        .iter()
        .map(|any| registry().decode_any(any).unwrap())
        .collect();
    assert_eq!(decoded, msgs);
}

#[test]
fn data_list_round_trips_in_order() {
    let msgs = sample_msgs();
    let values: Vec<Value> = msgs.iter().map(Msg::to_data).collect();

    assert_eq!(values[0]["@type"], "/cosmos.staking.v1beta1.MsgDelegate");
    assert_eq!(
        values[2]["@type"],
        "/ibc.core.channel.v1.MsgRecvPacket"
    );

    let decoded: Vec<Msg> = values
        .iter()
        .map(|v| registry().decode_data(v).unwrap())
        .collect();
    assert_eq!(decoded, msgs);
}

#[test]
fn one_bad_entry_fails_without_decoding_the_rest() {
    let mut values: Vec<Value> = sample_msgs().iter().map(Msg::to_data).collect();
    values[1] = json!({
        "@type": "/ibc.core.connection.v1.MsgConnectionOpenInit",
        "client_id": "07-tendermint-0",
        "delay_period": "0",
        "signer": "terra1d7aj6",
    });

    let results: Vec<_> = values.iter().map(|v| registry().decode_data(v)).collect();
    assert!(results[0].is_ok());
    assert_eq!(
        results[1].clone().unwrap_err(),
        columbus_types::CodecError::MissingField("counterparty".into())
    );
    assert!(results[2].is_ok());
}

#[test]
fn amino_form_matches_the_reference_shape() {
    let msg: Msg = MsgDelegate {
        delegator_address: "terra1d7aj6".into(),
        validator_address: "terravaloper1rfl2".into(),
        amount: Coin::new("uluna", Uint::new(25_000_000)).unwrap(),
    }
    .into();

    assert_eq!(
        msg.to_amino().unwrap(),
        json!({
            "type": "staking/MsgDelegate",
            "value": {
                "delegator_address": "terra1d7aj6",
                "validator_address": "terravaloper1rfl2",
                "amount": {"denom": "uluna", "amount": "25000000"},
            },
        })
    );
}
