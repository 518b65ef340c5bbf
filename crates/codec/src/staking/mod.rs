// Path: crates/codec/src/staking/mod.rs

//! Staking entities: delegations, validators and the redelegation and
//! unbonding lifecycles.
//!
//! Entities are immutable value objects constructed fresh per decode. The
//! nested `Validator` → `Commission` → `CommissionRates` tree delegates to
//! each level's own codec, threading field names into error paths.

use serde_json::{json, Value};

use columbus_types::prelude::OptionExt;
use columbus_types::{Dec, Result, Timestamp, Uint};

use ibc_proto::cosmos::base::v1beta1::Coin as RawCoin;
use ibc_proto::cosmos::staking::v1beta1 as raw;

use crate::data::{self, DataObject};
use crate::wire::{timestamp_from_wire, timestamp_to_wire, OpaqueAny};

pub mod msgs;

pub use msgs::{MsgBeginRedelegate, MsgDelegate, MsgUndelegate};

/// The chain's bond denomination, used when a wire balance needs a coin
/// wrapper the flat data form does not carry.
pub const BOND_DENOM: &str = "uluna";

/// Validator bonding status, stored as the wire's integer code.
///
/// The human-readable label is derived from a fixed ordered list indexed by
/// the code; a code or label outside the list is a decode error, never a
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondStatus(i32);

impl BondStatus {
    /// The fixed ordered label list; position is the wire code.
    pub const LABELS: [&'static str; 4] = [
        "BOND_STATUS_UNSPECIFIED",
        "BOND_STATUS_UNBONDED",
        "BOND_STATUS_UNBONDING",
        "BOND_STATUS_BONDED",
    ];

    /// Validates a wire code.
    pub fn from_code(code: i32) -> Result<Self> {
        data::code_label(&Self::LABELS, code)?;
        Ok(BondStatus(code))
    }

    /// Resolves a data-form label to its code.
    pub fn from_label(label: &str) -> Result<Self> {
        Ok(BondStatus(data::label_code(&Self::LABELS, label)?))
    }

    /// The wire code.
    pub fn code(self) -> i32 {
        self.0
    }

    /// The derived human-readable label.
    pub fn label(self) -> &'static str {
        // The code is validated at construction.
        Self::LABELS[self.0 as usize]
    }
}

/// A delegator's stake with one validator.
///
/// The data form is the flat LCD shape: both `shares` and `balance` are
/// decimal text amounts. On the wire this rides in a `DelegationResponse`,
/// whose balance coin uses [`BOND_DENOM`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegation {
    /// Bech32 account address of the delegator.
    pub delegator_address: String,
    /// Bech32 operator address of the validator.
    pub validator_address: String,
    /// Delegation shares issued against the validator's pool.
    pub shares: Uint,
    /// Current token balance of the delegation.
    pub balance: Uint,
}

impl Delegation {
    /// Decodes the flat data form.
    pub fn from_data(data: &DataObject) -> Result<Self> {
        Ok(Delegation {
            delegator_address: data::string_field(data, "delegator_address")?,
            validator_address: data::string_field(data, "validator_address")?,
            shares: data::uint_field(data, "shares")?,
            balance: data::uint_field(data, "balance")?,
        })
    }

    /// Encodes the flat data form; re-encoding a decoded mapping reproduces
    /// it key for key.
    pub fn to_data(&self) -> Value {
        json!({
            "delegator_address": self.delegator_address,
            "validator_address": self.validator_address,
            "shares": self.shares.format(),
            "balance": self.balance.format(),
        })
    }

    /// Converts from the wire tree.
    pub fn from_wire(raw: raw::DelegationResponse) -> Result<Self> {
        let delegation = raw.delegation.required("delegation")?;
        let balance = raw.balance.required("balance")?;
        Ok(Delegation {
            delegator_address: delegation.delegator_address,
            validator_address: delegation.validator_address,
            shares: Uint::parse(&delegation.shares).map_err(|e| e.under("delegation.shares"))?,
            balance: Uint::parse(&balance.amount).map_err(|e| e.under("balance.amount"))?,
        })
    }

    /// Converts to the wire tree.
    pub fn to_wire(&self) -> raw::DelegationResponse {
        raw::DelegationResponse {
            delegation: Some(raw::Delegation {
                delegator_address: self.delegator_address.clone(),
                validator_address: self.validator_address.clone(),
                shares: self.shares.format(),
            }),
            balance: Some(RawCoin {
                denom: BOND_DENOM.to_string(),
                amount: self.balance.format(),
            }),
        }
    }
}

/// Validator metadata shown to delegators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Description {
    /// Display name.
    pub moniker: String,
    /// Keybase identity handle.
    pub identity: String,
    /// Operator website.
    pub website: String,
    /// Security contact email.
    pub security_contact: String,
    /// Free-form details.
    pub details: String,
}

impl Description {
    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(Description {
            moniker: data::string_field(data, "moniker")?,
            identity: data::string_field(data, "identity")?,
            website: data::string_field(data, "website")?,
            security_contact: data::string_field(data, "security_contact")?,
            details: data::string_field(data, "details")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "moniker": self.moniker,
            "identity": self.identity,
            "website": self.website,
            "security_contact": self.security_contact,
            "details": self.details,
        })
    }

    fn from_wire(raw: raw::Description) -> Self {
        Description {
            moniker: raw.moniker,
            identity: raw.identity,
            website: raw.website,
            security_contact: raw.security_contact,
            details: raw.details,
        }
    }

    fn to_wire(&self) -> raw::Description {
        raw::Description {
            moniker: self.moniker.clone(),
            identity: self.identity.clone(),
            website: self.website.clone(),
            security_contact: self.security_contact.clone(),
            details: self.details.clone(),
        }
    }
}

/// Commission rate bounds. All three are 18-digit fixed-point decimals; the
/// data form is the point form, the wire form the bare mantissa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionRates {
    /// Current commission rate.
    pub rate: Dec,
    /// Maximum commission rate the validator may ever charge.
    pub max_rate: Dec,
    /// Maximum daily rate change.
    pub max_change_rate: Dec,
}

impl CommissionRates {
    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(CommissionRates {
            rate: data::dec_field(data, "rate")?,
            max_rate: data::dec_field(data, "max_rate")?,
            max_change_rate: data::dec_field(data, "max_change_rate")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "rate": self.rate.format(),
            "max_rate": self.max_rate.format(),
            "max_change_rate": self.max_change_rate.format(),
        })
    }

    fn from_wire(raw: raw::CommissionRates) -> Result<Self> {
        Ok(CommissionRates {
            rate: Dec::from_wire_string(&raw.rate).map_err(|e| e.under("rate"))?,
            max_rate: Dec::from_wire_string(&raw.max_rate).map_err(|e| e.under("max_rate"))?,
            max_change_rate: Dec::from_wire_string(&raw.max_change_rate)
                .map_err(|e| e.under("max_change_rate"))?,
        })
    }

    fn to_wire(&self) -> raw::CommissionRates {
        raw::CommissionRates {
            rate: self.rate.to_wire_string(),
            max_rate: self.max_rate.to_wire_string(),
            max_change_rate: self.max_change_rate.to_wire_string(),
        }
    }
}

/// A validator's commission: the rate bounds plus their last update time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commission {
    /// The nested rate bounds.
    pub commission_rates: CommissionRates,
    /// When the rates last changed.
    pub update_time: Timestamp,
}

impl Commission {
    fn from_data(data: &DataObject) -> Result<Self> {
        let rates = data::obj_field(data, "commission_rates")?;
        Ok(Commission {
            commission_rates: CommissionRates::from_data(rates)
                .map_err(|e| e.under("commission_rates"))?,
            update_time: data::timestamp_field(data, "update_time")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "commission_rates": self.commission_rates.to_data(),
            "update_time": self.update_time.to_rfc3339(),
        })
    }

    fn from_wire(raw: raw::Commission) -> Result<Self> {
        let rates = raw.commission_rates.required("commission_rates")?;
        let update_time = raw.update_time.required("update_time")?;
        Ok(Commission {
            commission_rates: CommissionRates::from_wire(rates)
                .map_err(|e| e.under("commission_rates"))?,
            update_time: timestamp_from_wire(update_time).map_err(|e| e.under("update_time"))?,
        })
    }

    fn to_wire(&self) -> raw::Commission {
        raw::Commission {
            commission_rates: Some(self.commission_rates.to_wire()),
            update_time: Some(timestamp_to_wire(&self.update_time)),
        }
    }
}

/// A bonded, unbonding or unbonded validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    /// Bech32 operator address.
    pub operator_address: String,
    /// Consensus public key, kept as an opaque `Any`.
    pub consensus_pubkey: OpaqueAny,
    /// Whether the validator is jailed.
    pub jailed: bool,
    /// Bonding status.
    pub status: BondStatus,
    /// Total bonded tokens.
    pub tokens: Uint,
    /// Total shares issued to delegators.
    pub delegator_shares: Dec,
    /// Operator metadata.
    pub description: Description,
    /// Height at which the validator began unbonding.
    pub unbonding_height: i64,
    /// Earliest time the validator can complete unbonding.
    pub unbonding_time: Timestamp,
    /// Commission configuration.
    pub commission: Commission,
    /// Minimum self-delegation the operator must keep.
    pub min_self_delegation: Uint,
}

impl Validator {
    /// Decodes the data form; the bonding status arrives as its label.
    pub fn from_data(data: &DataObject) -> Result<Self> {
        let pubkey = data::obj_field(data, "consensus_pubkey")?;
        let description = data::obj_field(data, "description")?;
        let commission = data::obj_field(data, "commission")?;
        Ok(Validator {
            operator_address: data::string_field(data, "operator_address")?,
            consensus_pubkey: OpaqueAny::from_data(pubkey)
                .map_err(|e| e.under("consensus_pubkey"))?,
            jailed: data::bool_field(data, "jailed")?,
            status: BondStatus::from_label(data::str_field(data, "status")?)
                .map_err(|e| e.under("status"))?,
            tokens: data::uint_field(data, "tokens")?,
            delegator_shares: data::dec_field(data, "delegator_shares")?,
            description: Description::from_data(description).map_err(|e| e.under("description"))?,
            unbonding_height: data::i64_field(data, "unbonding_height")?,
            unbonding_time: data::timestamp_field(data, "unbonding_time")?,
            commission: Commission::from_data(commission).map_err(|e| e.under("commission"))?,
            min_self_delegation: data::uint_field(data, "min_self_delegation")?,
        })
    }

    /// Encodes the data form; the bonding status is exposed as its label.
    pub fn to_data(&self) -> Value {
        json!({
            "operator_address": self.operator_address,
            "consensus_pubkey": self.consensus_pubkey.to_data(),
            "jailed": self.jailed,
            "status": self.status.label(),
            "tokens": self.tokens.format(),
            "delegator_shares": self.delegator_shares.format(),
            "description": self.description.to_data(),
            "unbonding_height": self.unbonding_height.to_string(),
            "unbonding_time": self.unbonding_time.to_rfc3339(),
            "commission": self.commission.to_data(),
            "min_self_delegation": self.min_self_delegation.format(),
        })
    }

    /// Converts from the wire tree; the bonding status arrives as its code.
    pub fn from_wire(raw: raw::Validator) -> Result<Self> {
        let pubkey = raw.consensus_pubkey.required("consensus_pubkey")?;
        let description = raw.description.required("description")?;
        let unbonding_time = raw.unbonding_time.required("unbonding_time")?;
        let commission = raw.commission.required("commission")?;
        Ok(Validator {
            operator_address: raw.operator_address,
            consensus_pubkey: OpaqueAny::from_wire(pubkey),
            jailed: raw.jailed,
            status: BondStatus::from_code(raw.status).map_err(|e| e.under("status"))?,
            tokens: Uint::parse(&raw.tokens).map_err(|e| e.under("tokens"))?,
            delegator_shares: Dec::from_wire_string(&raw.delegator_shares)
                .map_err(|e| e.under("delegator_shares"))?,
            description: Description::from_wire(description),
            unbonding_height: raw.unbonding_height,
            unbonding_time: timestamp_from_wire(unbonding_time)
                .map_err(|e| e.under("unbonding_time"))?,
            commission: Commission::from_wire(commission).map_err(|e| e.under("commission"))?,
            min_self_delegation: Uint::parse(&raw.min_self_delegation)
                .map_err(|e| e.under("min_self_delegation"))?,
        })
    }

    /// Converts to the wire tree.
    pub fn to_wire(&self) -> raw::Validator {
        raw::Validator {
            operator_address: self.operator_address.clone(),
            consensus_pubkey: Some(self.consensus_pubkey.to_wire()),
            jailed: self.jailed,
            status: self.status.code(),
            tokens: self.tokens.format(),
            delegator_shares: self.delegator_shares.to_wire_string(),
            description: Some(self.description.to_wire()),
            unbonding_height: self.unbonding_height,
            unbonding_time: Some(timestamp_to_wire(&self.unbonding_time)),
            commission: Some(self.commission.to_wire()),
            min_self_delegation: self.min_self_delegation.format(),
            ..Default::default()
        }
    }
}

/// One tranche of tokens leaving a validator's pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbondingEntry {
    /// Height at which the unbonding began.
    pub creation_height: i64,
    /// Time at which the tokens are released.
    pub completion_time: Timestamp,
    /// Tokens initially scheduled to unbond.
    pub initial_balance: Uint,
    /// Tokens remaining after any slashing.
    pub balance: Uint,
}

impl UnbondingEntry {
    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(UnbondingEntry {
            creation_height: data::i64_field(data, "creation_height")?,
            completion_time: data::timestamp_field(data, "completion_time")?,
            initial_balance: data::uint_field(data, "initial_balance")?,
            balance: data::uint_field(data, "balance")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "creation_height": self.creation_height.to_string(),
            "completion_time": self.completion_time.to_rfc3339(),
            "initial_balance": self.initial_balance.format(),
            "balance": self.balance.format(),
        })
    }

    fn from_wire(raw: raw::UnbondingDelegationEntry) -> Result<Self> {
        let completion_time = raw.completion_time.required("completion_time")?;
        Ok(UnbondingEntry {
            creation_height: raw.creation_height,
            completion_time: timestamp_from_wire(completion_time)
                .map_err(|e| e.under("completion_time"))?,
            initial_balance: Uint::parse(&raw.initial_balance)
                .map_err(|e| e.under("initial_balance"))?,
            balance: Uint::parse(&raw.balance).map_err(|e| e.under("balance"))?,
        })
    }

    fn to_wire(&self) -> raw::UnbondingDelegationEntry {
        raw::UnbondingDelegationEntry {
            creation_height: self.creation_height,
            completion_time: Some(timestamp_to_wire(&self.completion_time)),
            initial_balance: self.initial_balance.format(),
            balance: self.balance.format(),
            ..Default::default()
        }
    }
}

/// All of a delegator's unbonding tranches with one validator, in creation
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbondingDelegation {
    /// Bech32 account address of the delegator.
    pub delegator_address: String,
    /// Bech32 operator address of the validator.
    pub validator_address: String,
    /// Unbonding tranches, order preserved.
    pub entries: Vec<UnbondingEntry>,
}

impl UnbondingDelegation {
    /// Decodes the data form.
    pub fn from_data(data: &DataObject) -> Result<Self> {
        let entries = data::list_field(data, "entries")?
            .iter()
            .enumerate()
            .map(|(i, v)| {
                UnbondingEntry::from_data(data::as_object(v)?)
                    .map_err(|e| e.under(&format!("entries[{i}]")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(UnbondingDelegation {
            delegator_address: data::string_field(data, "delegator_address")?,
            validator_address: data::string_field(data, "validator_address")?,
            entries,
        })
    }

    /// Encodes the data form.
    pub fn to_data(&self) -> Value {
        json!({
            "delegator_address": self.delegator_address,
            "validator_address": self.validator_address,
            "entries": self.entries.iter().map(UnbondingEntry::to_data).collect::<Vec<_>>(),
        })
    }

    /// Converts from the wire tree, element-wise and order-preserving.
    pub fn from_wire(raw: raw::UnbondingDelegation) -> Result<Self> {
        let entries = raw
            .entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                UnbondingEntry::from_wire(e).map_err(|err| err.under(&format!("entries[{i}]")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(UnbondingDelegation {
            delegator_address: raw.delegator_address,
            validator_address: raw.validator_address,
            entries,
        })
    }

    /// Converts to the wire tree.
    pub fn to_wire(&self) -> raw::UnbondingDelegation {
        raw::UnbondingDelegation {
            delegator_address: self.delegator_address.clone(),
            validator_address: self.validator_address.clone(),
            entries: self.entries.iter().map(UnbondingEntry::to_wire).collect(),
        }
    }
}

/// One tranche of shares moving between validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedelegationEntry {
    /// Height at which the redelegation began.
    pub creation_height: i64,
    /// Time at which the tranche matures.
    pub completion_time: Timestamp,
    /// Token balance when the redelegation started.
    pub initial_balance: Uint,
    /// Shares created on the destination validator.
    pub shares_dst: Dec,
}

impl RedelegationEntry {
    fn from_data(data: &DataObject) -> Result<Self> {
        Ok(RedelegationEntry {
            creation_height: data::i64_field(data, "creation_height")?,
            completion_time: data::timestamp_field(data, "completion_time")?,
            initial_balance: data::uint_field(data, "initial_balance")?,
            shares_dst: data::dec_field(data, "shares_dst")?,
        })
    }

    fn to_data(&self) -> Value {
        json!({
            "creation_height": self.creation_height.to_string(),
            "completion_time": self.completion_time.to_rfc3339(),
            "initial_balance": self.initial_balance.format(),
            "shares_dst": self.shares_dst.format(),
        })
    }

    fn from_wire(raw: raw::RedelegationEntry) -> Result<Self> {
        let completion_time = raw.completion_time.required("completion_time")?;
        Ok(RedelegationEntry {
            creation_height: raw.creation_height,
            completion_time: timestamp_from_wire(completion_time)
                .map_err(|e| e.under("completion_time"))?,
            initial_balance: Uint::parse(&raw.initial_balance)
                .map_err(|e| e.under("initial_balance"))?,
            shares_dst: Dec::from_wire_string(&raw.shares_dst)
                .map_err(|e| e.under("shares_dst"))?,
        })
    }

    fn to_wire(&self) -> raw::RedelegationEntry {
        raw::RedelegationEntry {
            creation_height: self.creation_height,
            completion_time: Some(timestamp_to_wire(&self.completion_time)),
            initial_balance: self.initial_balance.format(),
            shares_dst: self.shares_dst.to_wire_string(),
            ..Default::default()
        }
    }
}

/// All tranches a delegator is moving from one validator to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redelegation {
    /// Bech32 account address of the delegator.
    pub delegator_address: String,
    /// Source validator operator address.
    pub validator_src_address: String,
    /// Destination validator operator address.
    pub validator_dst_address: String,
    /// Redelegation tranches, order preserved.
    pub entries: Vec<RedelegationEntry>,
}

impl Redelegation {
    /// Decodes the data form.
    pub fn from_data(data: &DataObject) -> Result<Self> {
        let entries = data::list_field(data, "entries")?
            .iter()
            .enumerate()
            .map(|(i, v)| {
                RedelegationEntry::from_data(data::as_object(v)?)
                    .map_err(|e| e.under(&format!("entries[{i}]")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Redelegation {
            delegator_address: data::string_field(data, "delegator_address")?,
            validator_src_address: data::string_field(data, "validator_src_address")?,
            validator_dst_address: data::string_field(data, "validator_dst_address")?,
            entries,
        })
    }

    /// Encodes the data form.
    pub fn to_data(&self) -> Value {
        json!({
            "delegator_address": self.delegator_address,
            "validator_src_address": self.validator_src_address,
            "validator_dst_address": self.validator_dst_address,
            "entries": self.entries.iter().map(RedelegationEntry::to_data).collect::<Vec<_>>(),
        })
    }

    /// Converts from the wire tree, element-wise and order-preserving.
    pub fn from_wire(raw: raw::Redelegation) -> Result<Self> {
        let entries = raw
            .entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                RedelegationEntry::from_wire(e).map_err(|err| err.under(&format!("entries[{i}]")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Redelegation {
            delegator_address: raw.delegator_address,
            validator_src_address: raw.validator_src_address,
            validator_dst_address: raw.validator_dst_address,
            entries,
        })
    }

    /// Converts to the wire tree.
    pub fn to_wire(&self) -> raw::Redelegation {
        raw::Redelegation {
            delegator_address: self.delegator_address.clone(),
            validator_src_address: self.validator_src_address.clone(),
            validator_dst_address: self.validator_dst_address.clone(),
            entries: self.entries.iter().map(RedelegationEntry::to_wire).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use columbus_types::error::CodecError;
    use serde_json::json;

    fn delegation_data() -> Value {
        json!({
            "delegator_address": "terra1abcdefabcdefabcdefabcdefabcdefabcd",
            "validator_address": "terravaloper1xyzxyzxyzxyzxyzxyzxyzxyzxyzx",
            "shares": "100",
            "balance": "100",
        })
    }

    #[test]
    fn test_delegation_data_round_trip_is_exact() {
        let input = delegation_data();
        let entity = Delegation::from_data(input.as_object().unwrap()).unwrap();
        assert_eq!(entity.to_data(), input);
    }

    #[test]
    fn test_delegation_wire_round_trip() {
        let entity = Delegation::from_data(delegation_data().as_object().unwrap()).unwrap();
        assert_eq!(Delegation::from_wire(entity.to_wire()).unwrap(), entity);
    }

    #[test]
    fn test_delegation_missing_field_is_rejected() {
        for key in ["delegator_address", "validator_address", "shares", "balance"] {
            let mut data = delegation_data().as_object().cloned().unwrap();
            data.remove(key);
            assert_eq!(
                Delegation::from_data(&data).unwrap_err(),
                CodecError::MissingField(key.to_string()),
                "expected removal of `{key}` to be reported"
            );
        }
    }

    #[test]
    fn test_bond_status_labels() {
        let bonded = BondStatus::from_label("BOND_STATUS_BONDED").unwrap();
        assert_eq!(bonded.code(), 3);
        assert_eq!(BondStatus::from_code(3).unwrap().label(), "BOND_STATUS_BONDED");
        assert!(BondStatus::from_code(4).is_err());
        assert!(BondStatus::from_label("BONDED").is_err());
    }

    fn validator_data() -> Value {
        json!({
            "operator_address": "terravaloper1xyzxyzxyzxyzxyzxyzxyzxyzxyzx",
            "consensus_pubkey": {
                "@type": "/cosmos.crypto.ed25519.PubKey",
                "value": "AQIDBA==",
            },
            "jailed": false,
            "status": "BOND_STATUS_BONDED",
            "tokens": "20000000000",
            "delegator_shares": "20000000000.000000000000000000",
            "description": {
                "moniker": "hashed",
                "identity": "",
                "website": "https://example.com",
                "security_contact": "",
                "details": "",
            },
            "unbonding_height": "0",
            "unbonding_time": "1970-01-01T00:00:00Z",
            "commission": {
                "commission_rates": {
                    "rate": "0.100000000000000000",
                    "max_rate": "0.200000000000000000",
                    "max_change_rate": "0.010000000000000000",
                },
                "update_time": "2021-10-01T12:00:00Z",
            },
            "min_self_delegation": "1",
        })
    }

    #[test]
    fn test_validator_data_round_trip() {
        let input = validator_data();
        let entity = Validator::from_data(input.as_object().unwrap()).unwrap();
        assert_eq!(entity.to_data(), input);
    }

    #[test]
    fn test_validator_wire_round_trip() {
        let entity = Validator::from_data(validator_data().as_object().unwrap()).unwrap();
        assert_eq!(Validator::from_wire(entity.to_wire()).unwrap(), entity);
    }

    #[test]
    fn test_validator_nested_error_paths() {
        let mut input = validator_data();
        input["commission"]["commission_rates"]["rate"] = json!("0.1234567890123456789");
        let err = Validator::from_data(input.as_object().unwrap()).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidDecimalPrecision {
                path: "commission.commission_rates.rate".into(),
                value: "0.1234567890123456789".into(),
            }
        );
    }

    #[test]
    fn test_validator_out_of_range_status_is_an_error() {
        let mut input = validator_data();
        input["status"] = json!("BOND_STATUS_SUPERBONDED");
        let err = Validator::from_data(input.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, CodecError::InvalidEncoding { path, .. } if path == "status"));
    }

    #[test]
    fn test_unbonding_delegation_round_trips_preserve_entry_order() {
        let input = json!({
            "delegator_address": "terra1abc",
            "validator_address": "terravaloper1xyz",
            "entries": [
                {
                    "creation_height": "100",
                    "completion_time": "2023-05-01T00:00:00Z",
                    "initial_balance": "500",
                    "balance": "500",
                },
                {
                    "creation_height": "200",
                    "completion_time": "2023-06-01T00:00:00Z",
                    "initial_balance": "700",
                    "balance": "650",
                },
            ],
        });
        let entity = UnbondingDelegation::from_data(input.as_object().unwrap()).unwrap();
        assert_eq!(entity.entries.len(), 2);
        assert_eq!(entity.entries[0].creation_height, 100);
        assert_eq!(entity.entries[1].creation_height, 200);
        assert_eq!(entity.to_data(), input);
        assert_eq!(
            UnbondingDelegation::from_wire(entity.to_wire()).unwrap(),
            entity
        );
    }

    #[test]
    fn test_redelegation_round_trip() {
        let input = json!({
            "delegator_address": "terra1abc",
            "validator_src_address": "terravaloper1src",
            "validator_dst_address": "terravaloper1dst",
            "entries": [{
                "creation_height": "42",
                "completion_time": "2023-07-01T00:00:00Z",
                "initial_balance": "1000",
                "shares_dst": "1000.000000000000000000",
            }],
        });
        let entity = Redelegation::from_data(input.as_object().unwrap()).unwrap();
        assert_eq!(entity.to_data(), input);
        assert_eq!(Redelegation::from_wire(entity.to_wire()).unwrap(), entity);
    }

    #[test]
    fn test_entry_errors_carry_the_list_index() {
        let input = json!({
            "delegator_address": "terra1abc",
            "validator_address": "terravaloper1xyz",
            "entries": [{
                "creation_height": "1",
                "completion_time": "not-a-time",
                "initial_balance": "1",
                "balance": "1",
            }],
        });
        let err = UnbondingDelegation::from_data(input.as_object().unwrap()).unwrap_err();
        assert!(
            matches!(err, CodecError::InvalidEncoding { ref path, .. } if path == "entries[0].completion_time"),
            "unexpected error: {err:?}"
        );
    }
}
