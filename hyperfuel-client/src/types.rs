use std::collections::BTreeSet;

use hyperfuel_format::{ContractId, Data, Hash, ReceiptType, UInt};
use hyperfuel_net_types::{EntityKind, FieldSelection};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    simple_types::{Block, Input, Output, Receipt, Transaction},
    Error, Result,
};

/// One returned object, a mapping of selected field name to value.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Value of `field`, `None` if it wasn't selected or returned.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Names of the fields present in this record.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Deserializes the record into a typed view such as [`simple_types::Receipt`](crate::simple_types::Receipt).
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| Error::Protocol(format!("decode record: {e}")))
    }

    /// Raw field map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub(crate) fn retain_fields(&mut self, names: &BTreeSet<&'static str>) {
        self.0.retain(|name, _| names.contains(name.as_str()));
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Query response data, one ordered record sequence per entity kind.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseData {
    /// Query blocks response
    #[serde(default)]
    pub blocks: Vec<Record>,
    /// Query transactions response
    #[serde(default)]
    pub transactions: Vec<Record>,
    /// Query receipts response
    #[serde(default)]
    pub receipts: Vec<Record>,
    /// Query inputs response
    #[serde(default)]
    pub inputs: Vec<Record>,
    /// Query outputs response
    #[serde(default)]
    pub outputs: Vec<Record>,
}

impl ResponseData {
    /// Records of `kind` in arrival order.
    pub fn records(&self, kind: EntityKind) -> &[Record] {
        match kind {
            EntityKind::Block => &self.blocks,
            EntityKind::Transaction => &self.transactions,
            EntityKind::Receipt => &self.receipts,
            EntityKind::Input => &self.inputs,
            EntityKind::Output => &self.outputs,
        }
    }

    fn records_mut(&mut self, kind: EntityKind) -> &mut Vec<Record> {
        match kind {
            EntityKind::Block => &mut self.blocks,
            EntityKind::Transaction => &mut self.transactions,
            EntityKind::Receipt => &mut self.receipts,
            EntityKind::Input => &mut self.inputs,
            EntityKind::Output => &mut self.outputs,
        }
    }

    /// Total number of records over all kinds.
    pub fn len(&self) -> usize {
        EntityKind::all()
            .into_iter()
            .map(|kind| self.records(kind).len())
            .sum()
    }

    /// Whether no records of any kind are present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the records of `other` after the ones already present, kind by kind.
    pub fn extend(&mut self, other: ResponseData) {
        let ResponseData {
            blocks,
            transactions,
            receipts,
            inputs,
            outputs,
        } = other;
        self.blocks.extend(blocks);
        self.transactions.extend(transactions);
        self.receipts.extend(receipts);
        self.inputs.extend(inputs);
        self.outputs.extend(outputs);
    }

    /// Drops fields that weren't selected, and every record of a kind with no selected fields.
    pub(crate) fn retain_selected(&mut self, selection: &FieldSelection) {
        for kind in EntityKind::all() {
            let records = self.records_mut(kind);
            if !selection.selects(kind) {
                records.clear();
                continue;
            }
            let names = selection.field_names(kind);
            for record in records.iter_mut() {
                record.retain_fields(&names);
            }
        }
    }

    /// Blocks as typed structs.
    pub fn typed_blocks(&self) -> Result<Vec<Block>> {
        self.blocks.iter().map(Record::decode).collect()
    }

    /// Transactions as typed structs.
    pub fn typed_transactions(&self) -> Result<Vec<Transaction>> {
        self.transactions.iter().map(Record::decode).collect()
    }

    /// Receipts as typed structs.
    pub fn typed_receipts(&self) -> Result<Vec<Receipt>> {
        self.receipts.iter().map(Record::decode).collect()
    }

    /// Inputs as typed structs.
    pub fn typed_inputs(&self) -> Result<Vec<Input>> {
        self.inputs.iter().map(Record::decode).collect()
    }

    /// Outputs as typed structs.
    pub fn typed_outputs(&self) -> Result<Vec<Output>> {
        self.outputs.iter().map(Record::decode).collect()
    }
}

/// Query response from hyperfuel instance.
/// Contain next_block field in case query didn't process all the block range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse<T = ResponseData> {
    /// Current height of the source hyperfuel instance
    pub archive_height: Option<u64>,
    /// Next block to query for, the responses are paginated so
    /// the caller should continue the query from this block if they
    /// didn't get responses up to the to_block they specified in the Query.
    pub next_block: u64,
    /// Total time it took the hyperfuel instance to execute the query.
    #[serde(default)]
    pub total_execution_time: u64,
    /// Response data
    #[serde(default)]
    pub data: T,
}

/// Response of [`Client::preset_query_get_logs`](crate::Client::preset_query_get_logs).
pub type LogResponse = QueryResponse<Vec<LogContext>>;

/// A `Log` or `LogData` receipt with the context needed to attribute it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogContext {
    /// Height of the block containing the transaction.
    pub block_height: UInt,
    /// Id of the emitting transaction.
    pub tx_id: Hash,
    /// Position of the receipt within the transaction.
    pub receipt_index: UInt,
    /// `Log` or `LogData`.
    pub receipt_type: ReceiptType,
    /// Contract that emitted the log.
    pub contract_id: Option<ContractId>,
    /// Contract called by the script the log originates from.
    pub root_contract_id: Option<ContractId>,
    /// Register ra, the log id for `LogData`.
    pub ra: Option<UInt>,
    /// Register rb.
    pub rb: Option<UInt>,
    /// Register rc, only set for `Log`.
    pub rc: Option<UInt>,
    /// Register rd, only set for `Log`.
    pub rd: Option<UInt>,
    /// Program counter at emission.
    pub pc: Option<UInt>,
    /// Instruction start of the emitting contract.
    pub is: Option<UInt>,
    /// Memory address of the logged data.
    pub ptr: Option<UInt>,
    /// Length of the logged data.
    pub len: Option<UInt>,
    /// Hash of the logged data.
    pub digest: Option<Hash>,
    /// Logged data, `LogData` only.
    pub data: Option<Data>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| Error::Protocol(format!("log receipt is missing {field}")))
}

impl TryFrom<Receipt> for LogContext {
    type Error = Error;

    fn try_from(receipt: Receipt) -> Result<Self> {
        Ok(Self {
            block_height: required(receipt.block_height, "block_height")?,
            tx_id: required(receipt.tx_id, "tx_id")?,
            receipt_index: required(receipt.receipt_index, "receipt_index")?,
            receipt_type: required(receipt.receipt_type, "receipt_type")?,
            contract_id: receipt.contract_id,
            root_contract_id: receipt.root_contract_id,
            ra: receipt.ra,
            rb: receipt.rb,
            rc: receipt.rc,
            rd: receipt.rd,
            pc: receipt.pc,
            is: receipt.is,
            ptr: receipt.ptr,
            len: receipt.len,
            digest: receipt.digest,
            data: receipt.data,
        })
    }
}

impl TryFrom<QueryResponse> for LogResponse {
    type Error = Error;

    fn try_from(res: QueryResponse) -> Result<Self> {
        let data = res
            .data
            .receipts
            .iter()
            .filter(|r| {
                matches!(
                    r.get("receipt_type").map(ReceiptType::deserialize),
                    Some(Ok(ReceiptType::Log | ReceiptType::LogData))
                )
            })
            .map(|r| r.decode::<Receipt>().and_then(LogContext::try_from))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            archive_height: res.archive_height,
            next_block: res.next_block,
            total_execution_time: res.total_execution_time,
            data,
        })
    }
}
