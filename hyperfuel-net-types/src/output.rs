use hyperfuel_format::{Address, AssetId, ContractId, OutputType, TransactionStatus};
use serde::{Deserialize, Serialize};

use crate::{types::parse_hex_values, ValidationError};

/// Output filter, same matching rules as [`ReceiptSelection`](crate::ReceiptSelection).
#[derive(Default, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OutputSelection {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asset_id: Vec<AssetId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contract: Vec<ContractId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_type: Vec<OutputType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tx_status: Vec<TransactionStatus>,
}

impl OutputSelection {
    pub fn and_to<I, S>(mut self, addresses: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.to = parse_hex_values("to", addresses)?;
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

    pub fn and_output_type(mut self, types: impl IntoIterator<Item = OutputType>) -> Self {
        self.output_type = types.into_iter().collect();
        self
    }

    pub fn filter_fields(&self) -> Vec<OutputField> {
        [
            (self.to.is_empty(), OutputField::To),
            (self.asset_id.is_empty(), OutputField::AssetId),
            (self.contract.is_empty(), OutputField::Contract),
            (self.output_type.is_empty(), OutputField::OutputType),
            (self.tx_status.is_empty(), OutputField::TxStatus),
        ]
        .into_iter()
        .filter_map(|(empty, field)| (!empty).then_some(field))
        .collect()
    }
}

/// Selectable fields of an output.
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
pub enum OutputField {
    TxId,
    TxStatus,
    BlockHeight,
    OutputType,
    To,
    Amount,
    AssetId,
    InputIndex,
    BalanceRoot,
    StateRoot,
    Contract,
}

impl OutputField {
    pub fn all() -> Vec<Self> {
        use strum::IntoEnumIterator;
        Self::iter().collect()
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
