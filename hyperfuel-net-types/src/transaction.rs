use serde::{Deserialize, Serialize};

/// Selectable fields of a transaction.
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
pub enum TransactionField {
    BlockHeight,
    Id,
    InputAssetIds,
    InputContracts,
    InputContractUtxoId,
    InputContractBalanceRoot,
    InputContractStateRoot,
    InputContractTxPointerBlockHeight,
    InputContractTxPointerTxIndex,
    InputContract,
    PoliciesTip,
    PoliciesWitnessLimit,
    PoliciesMaturity,
    PoliciesMaxFee,
    ScriptGasLimit,
    Maturity,
    MintAmount,
    MintAssetId,
    MintGasPrice,
    TxPointerBlockHeight,
    TxPointerTxIndex,
    TxType,
    OutputContractInputIndex,
    OutputContractBalanceRoot,
    OutputContractStateRoot,
    Witnesses,
    ReceiptsRoot,
    Status,
    Time,
    Reason,
    Script,
    ScriptData,
    BytecodeWitnessIndex,
    BytecodeRoot,
    SubsectionIndex,
    SubsectionsNumber,
    ProofSet,
    ConsensusParametersUpgradePurposeWitnessIndex,
    ConsensusParametersUpgradePurposeChecksum,
    StateTransitionUpgradePurposeRoot,
    Salt,
}

impl TransactionField {
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
    fn test_long_names() {
        assert_eq!(
            TransactionField::InputContractTxPointerBlockHeight.as_str(),
            "input_contract_tx_pointer_block_height"
        );
        assert_eq!(
            serde_json::to_string(&TransactionField::ConsensusParametersUpgradePurposeChecksum)
                .unwrap(),
            "\"consensus_parameters_upgrade_purpose_checksum\""
        );
    }
}
