//! Typed views of response records.
//!
//! Every field is optional since only selected fields are returned.
use hyperfuel_format::{
    Address, AssetId, ContractId, Data, Hash, InputType, OutputType, ReceiptType,
    TransactionStatus, TransactionType, UInt,
};
use serde::{Deserialize, Serialize};

/// Block header.
#[allow(missing_docs)]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: Option<Hash>,
    pub da_height: Option<UInt>,
    pub consensus_parameters_version: Option<UInt>,
    pub state_transition_bytecode_version: Option<UInt>,
    pub transactions_count: Option<UInt>,
    pub message_receipt_count: Option<UInt>,
    pub transactions_root: Option<Hash>,
    pub message_outbox_root: Option<Hash>,
    pub event_inbox_root: Option<Hash>,
    pub height: Option<UInt>,
    pub prev_root: Option<Hash>,
    pub time: Option<UInt>,
    pub application_hash: Option<Hash>,
}

/// Transaction with the fields of all transaction types flattened.
#[allow(missing_docs)]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub block_height: Option<UInt>,
    pub id: Option<Hash>,
    pub input_asset_ids: Option<Vec<AssetId>>,
    pub input_contracts: Option<Vec<ContractId>>,
    pub input_contract_utxo_id: Option<Data>,
    pub input_contract_balance_root: Option<Hash>,
    pub input_contract_state_root: Option<Hash>,
    pub input_contract_tx_pointer_block_height: Option<UInt>,
    pub input_contract_tx_pointer_tx_index: Option<UInt>,
    pub input_contract: Option<ContractId>,
    pub policies_tip: Option<UInt>,
    pub policies_witness_limit: Option<UInt>,
    pub policies_maturity: Option<UInt>,
    pub policies_max_fee: Option<UInt>,
    pub script_gas_limit: Option<UInt>,
    pub maturity: Option<UInt>,
    pub mint_amount: Option<UInt>,
    pub mint_asset_id: Option<AssetId>,
    pub mint_gas_price: Option<UInt>,
    pub tx_pointer_block_height: Option<UInt>,
    pub tx_pointer_tx_index: Option<UInt>,
    pub tx_type: Option<TransactionType>,
    pub output_contract_input_index: Option<UInt>,
    pub output_contract_balance_root: Option<Hash>,
    pub output_contract_state_root: Option<Hash>,
    pub witnesses: Option<Data>,
    pub receipts_root: Option<Hash>,
    pub status: Option<TransactionStatus>,
    pub time: Option<UInt>,
    pub reason: Option<String>,
    pub script: Option<Data>,
    pub script_data: Option<Data>,
    pub bytecode_witness_index: Option<UInt>,
    pub bytecode_root: Option<Hash>,
    pub subsection_index: Option<UInt>,
    pub subsections_number: Option<UInt>,
    pub proof_set: Option<Data>,
    pub consensus_parameters_upgrade_purpose_witness_index: Option<UInt>,
    pub consensus_parameters_upgrade_purpose_checksum: Option<Hash>,
    pub state_transition_upgrade_purpose_root: Option<Hash>,
    pub salt: Option<Hash>,
}

/// Receipt produced while executing a transaction. Which fields are set depends on
/// `receipt_type`.
#[allow(missing_docs)]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_index: Option<UInt>,
    pub root_contract_id: Option<ContractId>,
    pub tx_id: Option<Hash>,
    pub tx_status: Option<TransactionStatus>,
    pub block_height: Option<UInt>,
    pub pc: Option<UInt>,
    pub is: Option<UInt>,
    pub to: Option<ContractId>,
    pub to_address: Option<Address>,
    pub amount: Option<UInt>,
    pub asset_id: Option<AssetId>,
    pub gas: Option<UInt>,
    pub param1: Option<UInt>,
    pub param2: Option<UInt>,
    pub val: Option<UInt>,
    pub ptr: Option<UInt>,
    pub digest: Option<Hash>,
    pub reason: Option<UInt>,
    pub ra: Option<UInt>,
    pub rb: Option<UInt>,
    pub rc: Option<UInt>,
    pub rd: Option<UInt>,
    pub len: Option<UInt>,
    pub receipt_type: Option<ReceiptType>,
    pub result: Option<UInt>,
    pub gas_used: Option<UInt>,
    pub data: Option<Data>,
    pub sender: Option<Address>,
    pub recipient: Option<Address>,
    pub nonce: Option<Hash>,
    pub contract_id: Option<ContractId>,
    pub sub_id: Option<Hash>,
}

/// Transaction input: a coin, a contract or a message.
#[allow(missing_docs)]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub tx_id: Option<Hash>,
    pub tx_status: Option<TransactionStatus>,
    pub block_height: Option<UInt>,
    pub input_type: Option<InputType>,
    pub utxo_id: Option<Data>,
    pub owner: Option<Address>,
    pub amount: Option<UInt>,
    pub asset_id: Option<AssetId>,
    pub tx_pointer_block_height: Option<UInt>,
    pub tx_pointer_tx_index: Option<UInt>,
    pub witness_index: Option<UInt>,
    pub predicate_gas_used: Option<UInt>,
    pub predicate: Option<Data>,
    pub predicate_data: Option<Data>,
    pub balance_root: Option<Hash>,
    pub state_root: Option<Hash>,
    pub contract: Option<ContractId>,
    pub sender: Option<Address>,
    pub recipient: Option<Address>,
    pub nonce: Option<Hash>,
    pub data: Option<Data>,
}

/// Transaction output.
#[allow(missing_docs)]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub tx_id: Option<Hash>,
    pub tx_status: Option<TransactionStatus>,
    pub block_height: Option<UInt>,
    pub output_type: Option<OutputType>,
    pub to: Option<Address>,
    pub amount: Option<UInt>,
    pub asset_id: Option<AssetId>,
    pub input_index: Option<UInt>,
    pub balance_root: Option<Hash>,
    pub state_root: Option<Hash>,
    pub contract: Option<ContractId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_decode_input() {
        let input: Input = serde_json::from_str(
            r#"{
                "tx_id": "0x2a0d0ed9d2217ec7f32dcd9a1902ce2a66d68437aeff84e3a3cc8bebee0d2eea",
                "input_type": 0,
                "amount": "1000",
                "predicate": "0x"
            }"#,
        )
        .unwrap();

        assert_eq!(
            input.tx_id,
            Some(Hash::from(hex!(
                "2a0d0ed9d2217ec7f32dcd9a1902ce2a66d68437aeff84e3a3cc8bebee0d2eea"
            )))
        );
        assert_eq!(input.input_type, Some(InputType::Coin));
        assert_eq!(input.amount, Some(UInt::from(1000)));
        assert_eq!(input.predicate, Some(Data::from(Vec::new())));
        assert_eq!(input.owner, None);
    }

    #[test]
    fn test_unknown_output_type() {
        let res = serde_json::from_str::<Output>(r#"{"output_type": 9}"#);
        assert!(res.is_err());
    }
}
