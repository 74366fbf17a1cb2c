use hyperfuel_format::{Address, AssetId, ContractId, InputType, TransactionStatus};
use serde::{Deserialize, Serialize};

use crate::{types::parse_hex_values, ValidationError};

/// Input filter, same matching rules as [`ReceiptSelection`](crate::ReceiptSelection).
#[derive(Default, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InputSelection {
    /// Owning address or predicate root.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owner: Vec<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asset_id: Vec<AssetId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contract: Vec<ContractId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sender: Vec<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipient: Vec<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_type: Vec<InputType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tx_status: Vec<TransactionStatus>,
}

impl InputSelection {
    pub fn and_owner<I, S>(mut self, owners: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.owner = parse_hex_values("owner", owners)?;
        Ok(self)
    }

    pub fn and_asset_id<I, S>(mut self, asset_ids: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.asset_id = parse_hex_values("asset_id", asset_ids)?;
        Ok(self)
    }

    pub fn and_contract<I, S>(mut self, contracts: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.contract = parse_hex_values("contract", contracts)?;
        Ok(self)
    }

    pub fn and_input_type(mut self, types: impl IntoIterator<Item = InputType>) -> Self {
        self.input_type = types.into_iter().collect();
        self
    }

    /// Fields this selection filters on.
    pub fn filter_fields(&self) -> Vec<InputField> {
        [
            (self.owner.is_empty(), InputField::Owner),
            (self.asset_id.is_empty(), InputField::AssetId),
            (self.contract.is_empty(), InputField::Contract),
            (self.sender.is_empty(), InputField::Sender),
            (self.recipient.is_empty(), InputField::Recipient),
            (self.input_type.is_empty(), InputField::InputType),
            (self.tx_status.is_empty(), InputField::TxStatus),
        ]
        .into_iter()
        .filter_map(|(empty, field)| (!empty).then_some(field))
        .collect()
    }
}

/// Selectable fields of an input (coin, contract or message).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InputField {
    TxId,
    TxStatus,
    BlockHeight,
    InputType,
    UtxoId,
    Owner,
    Amount,
    AssetId,
    TxPointerBlockHeight,
    TxPointerTxIndex,
    WitnessIndex,
    PredicateGasUsed,
    Predicate,
    PredicateData,
    BalanceRoot,
    StateRoot,
    Contract,
    Sender,
    Recipient,
    Nonce,
    Data,
}

impl InputField {
    pub fn all() -> Vec<Self> {
        use strum::IntoEnumIterator;
        Self::iter().collect()
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
