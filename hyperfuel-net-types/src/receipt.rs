use hyperfuel_format::{Address, AssetId, ContractId, ReceiptType, TransactionStatus};
use serde::{Deserialize, Serialize};

use crate::{types::parse_hex_values, ValidationError};

/// Receipt filter. Every non-empty field must match, a field matches if the receipt has any
/// of the listed values. Empty means match all.
#[derive(Default, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReceiptSelection {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub root_contract_id: Vec<ContractId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_address: Vec<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asset_id: Vec<AssetId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub receipt_type: Vec<ReceiptType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sender: Vec<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipient: Vec<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contract_id: Vec<ContractId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ra: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rb: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rc: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rd: Vec<u64>,
    /// Status of the transaction the receipt belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tx_status: Vec<TransactionStatus>,
}

impl ReceiptSelection {
    /// Restrict to receipts whose root contract is one of the given `0x` hex ids.
    pub fn and_root_contract_id<I, S>(mut self, ids: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.root_contract_id = parse_hex_values("root_contract_id", ids)?;
        Ok(self)
    }

    pub fn and_contract_id<I, S>(mut self, ids: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.contract_id = parse_hex_values("contract_id", ids)?;
        Ok(self)
    }

    pub fn and_receipt_type(mut self, types: impl IntoIterator<Item = ReceiptType>) -> Self {
        self.receipt_type = types.into_iter().collect();
        self
    }

    pub fn and_tx_status(mut self, statuses: impl IntoIterator<Item = TransactionStatus>) -> Self {
        self.tx_status = statuses.into_iter().collect();
        self
    }

    /// Fields this selection filters on.
    pub fn filter_fields(&self) -> Vec<ReceiptField> {
        [
            (self.root_contract_id.is_empty(), ReceiptField::RootContractId),
            (self.to_address.is_empty(), ReceiptField::ToAddress),
            (self.asset_id.is_empty(), ReceiptField::AssetId),
            (self.receipt_type.is_empty(), ReceiptField::ReceiptType),
            (self.sender.is_empty(), ReceiptField::Sender),
            (self.recipient.is_empty(), ReceiptField::Recipient),
            (self.contract_id.is_empty(), ReceiptField::ContractId),
            (self.ra.is_empty(), ReceiptField::Ra),
            (self.rb.is_empty(), ReceiptField::Rb),
            (self.rc.is_empty(), ReceiptField::Rc),
            (self.rd.is_empty(), ReceiptField::Rd),
            (self.tx_status.is_empty(), ReceiptField::TxStatus),
        ]
        .into_iter()
        .filter_map(|(empty, field)| (!empty).then_some(field))
        .collect()
    }
}

/// Selectable fields of a receipt.
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
pub enum ReceiptField {
    ReceiptIndex,
    RootContractId,
    TxId,
    TxStatus,
    BlockHeight,
    Pc,
    Is,
    To,
    ToAddress,
    Amount,
    AssetId,
    Gas,
    Param1,
    Param2,
    Val,
    Ptr,
    Digest,
    Reason,
    Ra,
    Rb,
    Rc,
    Rd,
    Len,
    ReceiptType,
    Result,
    GasUsed,
    Data,
    Sender,
    Recipient,
    Nonce,
    ContractId,
    SubId,
}

impl ReceiptField {
    pub fn all() -> Vec<Self> {
        use strum::IntoEnumIterator;
        Self::iter().collect()
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_field_names() {
        assert_eq!(ReceiptField::Param1.as_str(), "param1");
        assert_eq!(ReceiptField::Is.as_str(), "is");
        assert_eq!(
            serde_json::to_string(&ReceiptField::Param2).unwrap(),
            "\"param2\""
        );
    }

    #[test]
    fn test_empty_filters_are_omitted() {
        let sel = ReceiptSelection::default()
            .and_receipt_type([ReceiptType::Log, ReceiptType::LogData])
            .and_tx_status([TransactionStatus::Success]);

        assert_eq!(
            serde_json::to_string(&sel).unwrap(),
            r#"{"receipt_type":[5,6],"tx_status":[1]}"#
        );
    }

    #[test]
    fn test_filter_fields() {
        let sel = ReceiptSelection::default()
            .and_receipt_type([ReceiptType::Log])
            .and_tx_status([TransactionStatus::Success]);

        assert_eq!(
            sel.filter_fields(),
            vec![ReceiptField::ReceiptType, ReceiptField::TxStatus]
        );
        assert!(ReceiptSelection::default().filter_fields().is_empty());
    }

    #[test]
    fn test_bad_contract_id() {
        let err = ReceiptSelection::default()
            .and_root_contract_id(["0x1234"])
            .unwrap_err();

        assert!(matches!(
            err,
            ValidationError::InvalidValue {
                field: "root_contract_id",
                ..
            }
        ));
    }
}
