// Path: crates/codec/src/staking/msgs.rs

//! Staking transaction messages.
//!
//! The staking family is one of the legacy families: each message also has
//! an amino form, `{"type": "staking/...", "value": {...}}`.

use serde_json::{json, Value};

use columbus_types::prelude::OptionExt;
use columbus_types::{Coin, Result};

use ibc_proto::cosmos::staking::v1beta1 as raw;

use crate::data::{self, DataObject};
use crate::wire::{coin_from_wire, coin_to_wire, WireCodec};

/// Delegate tokens to a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgDelegate {
    /// Bech32 account address of the delegator.
    pub delegator_address: String,
    /// Bech32 operator address of the validator.
    pub validator_address: String,
    /// Amount to delegate.
    pub amount: Coin,
}

impl WireCodec for MsgDelegate {
    const TYPE_URL: &'static str = "/cosmos.staking.v1beta1.MsgDelegate";
    type Raw = raw::MsgDelegate;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        let amount = raw.amount.required("amount")?;
        Ok(MsgDelegate {
            delegator_address: raw.delegator_address,
            validator_address: raw.validator_address,
            amount: coin_from_wire(&amount).map_err(|e| e.under("amount"))?,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgDelegate {
            delegator_address: self.delegator_address.clone(),
            validator_address: self.validator_address.clone(),
            amount: Some(coin_to_wire(&self.amount)),
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgDelegate {
            delegator_address: data::string_field(data, "delegator_address")?,
            validator_address: data::string_field(data, "validator_address")?,
            amount: data::coin_field(data, "amount")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "delegator_address": self.delegator_address,
            "validator_address": self.validator_address,
            "amount": data::coin_to_data(&self.amount),
        })
    }

    fn to_amino(&self) -> Result<Value> {
        Ok(json!({
            "type": "staking/MsgDelegate",
            "value": self.to_data(),
        }))
    }
}

/// Undelegate tokens from a validator, starting the unbonding clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgUndelegate {
    /// Bech32 account address of the delegator.
    pub delegator_address: String,
    /// Bech32 operator address of the validator.
    pub validator_address: String,
    /// Amount to undelegate.
    pub amount: Coin,
}

impl WireCodec for MsgUndelegate {
    const TYPE_URL: &'static str = "/cosmos.staking.v1beta1.MsgUndelegate";
    type Raw = raw::MsgUndelegate;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        let amount = raw.amount.required("amount")?;
        Ok(MsgUndelegate {
            delegator_address: raw.delegator_address,
            validator_address: raw.validator_address,
            amount: coin_from_wire(&amount).map_err(|e| e.under("amount"))?,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgUndelegate {
            delegator_address: self.delegator_address.clone(),
            validator_address: self.validator_address.clone(),
            amount: Some(coin_to_wire(&self.amount)),
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgUndelegate {
            delegator_address: data::string_field(data, "delegator_address")?,
            validator_address: data::string_field(data, "validator_address")?,
            amount: data::coin_field(data, "amount")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "delegator_address": self.delegator_address,
            "validator_address": self.validator_address,
            "amount": data::coin_to_data(&self.amount),
        })
    }

    fn to_amino(&self) -> Result<Value> {
        Ok(json!({
            "type": "staking/MsgUndelegate",
            "value": self.to_data(),
        }))
    }
}

/// Move a delegation from one validator to another without unbonding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgBeginRedelegate {
    /// Bech32 account address of the delegator.
    pub delegator_address: String,
    /// Source validator operator address.
    pub validator_src_address: String,
    /// Destination validator operator address.
    pub validator_dst_address: String,
    /// Amount to move.
    pub amount: Coin,
}

impl WireCodec for MsgBeginRedelegate {
    const TYPE_URL: &'static str = "/cosmos.staking.v1beta1.MsgBeginRedelegate";
    type Raw = raw::MsgBeginRedelegate;

    fn from_wire(raw: Self::Raw) -> Result<Self> {
        let amount = raw.amount.required("amount")?;
        Ok(MsgBeginRedelegate {
            delegator_address: raw.delegator_address,
            validator_src_address: raw.validator_src_address,
            validator_dst_address: raw.validator_dst_address,
            amount: coin_from_wire(&amount).map_err(|e| e.under("amount"))?,
        })
    }

    fn to_wire(&self) -> Self::Raw {
        raw::MsgBeginRedelegate {
            delegator_address: self.delegator_address.clone(),
            validator_src_address: self.validator_src_address.clone(),
            validator_dst_address: self.validator_dst_address.clone(),
            amount: Some(coin_to_wire(&self.amount)),
        }
    }

    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(MsgBeginRedelegate {
            delegator_address: data::string_field(data, "delegator_address")?,
            validator_src_address: data::string_field(data, "validator_src_address")?,
            validator_dst_address: data::string_field(data, "validator_dst_address")?,
            amount: data::coin_field(data, "amount")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "delegator_address": self.delegator_address,
            "validator_src_address": self.validator_src_address,
            "validator_dst_address": self.validator_dst_address,
            "amount": data::coin_to_data(&self.amount),
        })
    }

    fn to_amino(&self) -> Result<Value> {
        Ok(json!({
            "type": "staking/MsgBeginRedelegate",
            "value": self.to_data(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use columbus_types::Uint;
    use serde_json::json;

    fn delegate() -> MsgDelegate {
        MsgDelegate {
            delegator_address: "terra1abc".into(),
            validator_address: "terravaloper1xyz".into(),
            amount: Coin::new("uluna", Uint::new(1_000_000)).unwrap(),
        }
    }

    #[test]
    fn test_delegate_round_trips() {
        let msg = delegate();
        let data = msg.to_data();
        assert_eq!(
            MsgDelegate::from_data(data.as_object().unwrap()).unwrap(),
            msg
        );
        assert_eq!(MsgDelegate::from_wire(msg.to_wire()).unwrap(), msg);
        assert_eq!(
            MsgDelegate::from_wire_bytes(&msg.to_wire_bytes()).unwrap(),
            msg
        );
    }

    #[test]
    fn test_delegate_amino_form() {
        let amino = delegate().to_amino().unwrap();
        assert_eq!(amino["type"], "staking/MsgDelegate");
        assert_eq!(amino["value"]["amount"]["denom"], "uluna");
    }

    #[test]
    fn test_begin_redelegate_round_trips() {
        let msg = MsgBeginRedelegate {
            delegator_address: "terra1abc".into(),
            validator_src_address: "terravaloper1src".into(),
            validator_dst_address: "terravaloper1dst".into(),
            amount: Coin::new("uluna", Uint::new(5)).unwrap(),
        };
        assert_eq!(MsgBeginRedelegate::from_wire(msg.to_wire()).unwrap(), msg);
        let data = msg.to_data();
        assert_eq!(
            MsgBeginRedelegate::from_data(data.as_object().unwrap()).unwrap(),
            msg
        );
        assert_eq!(msg.to_amino().unwrap()["type"], "staking/MsgBeginRedelegate");
    }

    #[test]
    fn test_undelegate_missing_amount_is_rejected() {
        let data = json!({
            "delegator_address": "terra1abc",
            "validator_address": "terravaloper1xyz",
        });
        let err = MsgUndelegate::from_data(data.as_object().unwrap()).unwrap_err();
        assert_eq!(
            err,
            columbus_types::CodecError::MissingField("amount".into())
        );
    }
}
