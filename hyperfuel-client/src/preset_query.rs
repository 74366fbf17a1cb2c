//! Preset queries for common use cases.
//!
//! Contract ids, asset ids and addresses are `0x` prefixed 32 byte hex strings.
use hyperfuel_format::{ReceiptType, TransactionStatus};
use hyperfuel_net_types::{
    BlockField, InputField, InputSelection, Query, ReceiptField, ReceiptSelection,
    TransactionField, ValidatedQuery, ValidationError,
};

/// Receipt fields needed to build a [`LogContext`](crate::LogContext).
pub const LOG_FIELDS: [ReceiptField; 16] = [
    ReceiptField::BlockHeight,
    ReceiptField::TxId,
    ReceiptField::ReceiptIndex,
    ReceiptField::ReceiptType,
    ReceiptField::ContractId,
    ReceiptField::RootContractId,
    ReceiptField::Ra,
    ReceiptField::Rb,
    ReceiptField::Rc,
    ReceiptField::Rd,
    ReceiptField::Pc,
    ReceiptField::Is,
    ReceiptField::Ptr,
    ReceiptField::Len,
    ReceiptField::Digest,
    ReceiptField::Data,
];

const INPUT_FIELDS: [InputField; 8] = [
    InputField::TxId,
    InputField::TxStatus,
    InputField::BlockHeight,
    InputField::InputType,
    InputField::UtxoId,
    InputField::Owner,
    InputField::Amount,
    InputField::AssetId,
];

fn with_range(query: Query, from_block: u64, to_block: Option<u64>) -> Query {
    let query = query.from_block(from_block);
    match to_block {
        Some(to_block) => query.to_block(to_block),
        None => query,
    }
}

/// Returns a query for `Log` and `LogData` receipts of successful transactions whose root
/// contract is one of `emitting_contracts`, within [from_block, to_block).
/// If to_block is None then query runs to the head of the chain.
pub fn logs<I, S>(
    emitting_contracts: I,
    from_block: u64,
    to_block: Option<u64>,
) -> Result<ValidatedQuery, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let selection = ReceiptSelection::default()
        .and_root_contract_id(emitting_contracts)?
        .and_receipt_type([ReceiptType::Log, ReceiptType::LogData])
        .and_tx_status([TransactionStatus::Success]);

    with_range(Query::new(), from_block, to_block)
        .where_receipts(selection)
        .select_receipt_fields(LOG_FIELDS)
        .validate()
}

/// Returns a query for all inputs spending one of `asset_ids` within [from_block, to_block).
pub fn inputs_by_asset_id<I, S>(
    asset_ids: I,
    from_block: u64,
    to_block: Option<u64>,
) -> Result<ValidatedQuery, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    with_range(Query::new(), from_block, to_block)
        .where_inputs(InputSelection::default().and_asset_id(asset_ids)?)
        .select_input_fields(INPUT_FIELDS)
        .validate()
}

/// Returns a query for all inputs owned by one of `owners` within [from_block, to_block).
/// For predicates the owner is the predicate root.
pub fn inputs_by_owner<I, S>(
    owners: I,
    from_block: u64,
    to_block: Option<u64>,
) -> Result<ValidatedQuery, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    with_range(Query::new(), from_block, to_block)
        .where_inputs(InputSelection::default().and_owner(owners)?)
        .select_input_fields(INPUT_FIELDS)
        .validate()
}

/// Returns a query for every block with all of its fields within [from_block, to_block),
/// along with all fields of the transactions the server joins to them.
/// Note: this is only for quickstart purposes. For the best performance, create a custom query
/// that only includes the fields you'll use in `field_selection`.
pub fn blocks_and_transactions(
    from_block: u64,
    to_block: Option<u64>,
) -> Result<ValidatedQuery, ValidationError> {
    with_range(Query::new(), from_block, to_block)
        .include_all_blocks()
        .select_block_fields(BlockField::all())
        .select_transaction_fields(TransactionField::all())
        .validate()
}
