use hyperfuel_format::UInt;
use hyperfuel_net_types::{InputSelection, OutputSelection, Query, ReceiptSelection};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{Record, ResponseData};

/// Whether `record[field]` is one of `wanted`. An empty `wanted` matches anything, a missing
/// or undecodable value matches nothing.
fn one_of<T>(record: &Record, field: &str, wanted: &[T]) -> bool
where
    T: DeserializeOwned + PartialEq,
{
    if wanted.is_empty() {
        return true;
    }
    record
        .get(field)
        .and_then(|v| T::deserialize(v).ok())
        .is_some_and(|v| wanted.contains(&v))
}

fn register_one_of(record: &Record, field: &str, wanted: &[u64]) -> bool {
    if wanted.is_empty() {
        return true;
    }
    record
        .get(field)
        .and_then(|v| UInt::deserialize(v).ok())
        .is_some_and(|v| wanted.contains(&*v))
}

pub(crate) trait Matches {
    fn matches(&self, record: &Record) -> bool;
}

impl Matches for ReceiptSelection {
    fn matches(&self, r: &Record) -> bool {
        one_of(r, "root_contract_id", &self.root_contract_id)
            && one_of(r, "to_address", &self.to_address)
            && one_of(r, "asset_id", &self.asset_id)
            && one_of(r, "receipt_type", &self.receipt_type)
            && one_of(r, "sender", &self.sender)
            && one_of(r, "recipient", &self.recipient)
            && one_of(r, "contract_id", &self.contract_id)
            && register_one_of(r, "ra", &self.ra)
            && register_one_of(r, "rb", &self.rb)
            && register_one_of(r, "rc", &self.rc)
            && register_one_of(r, "rd", &self.rd)
            && one_of(r, "tx_status", &self.tx_status)
    }
}

impl Matches for InputSelection {
    fn matches(&self, r: &Record) -> bool {
        one_of(r, "owner", &self.owner)
            && one_of(r, "asset_id", &self.asset_id)
            && one_of(r, "contract", &self.contract)
            && one_of(r, "sender", &self.sender)
            && one_of(r, "recipient", &self.recipient)
            && one_of(r, "input_type", &self.input_type)
            && one_of(r, "tx_status", &self.tx_status)
    }
}

impl Matches for OutputSelection {
    fn matches(&self, r: &Record) -> bool {
        one_of(r, "to", &self.to)
            && one_of(r, "asset_id", &self.asset_id)
            && one_of(r, "contract", &self.contract)
            && one_of(r, "output_type", &self.output_type)
            && one_of(r, "tx_status", &self.tx_status)
    }
}

fn retain_matching<S: Matches>(records: &mut Vec<Record>, selections: &[S]) {
    records.retain(|r| selections.iter().any(|sel| sel.matches(r)));
}

/// Drops receipts, inputs and outputs that don't match any of the query's selections.
///
/// Records have to carry the filtered fields, see
/// [`ValidatedQuery::with_filter_fields`](hyperfuel_net_types::ValidatedQuery::with_filter_fields).
pub(crate) fn retain_matching_records(data: &mut ResponseData, query: &Query) {
    retain_matching(&mut data.receipts, &query.receipts);
    retain_matching(&mut data.inputs, &query.inputs);
    retain_matching(&mut data.outputs, &query.outputs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperfuel_format::{ReceiptType, TransactionStatus};
    use serde_json::{json, Value};

    const ABC: &str = "0x0000000000000000000000000000000000000000000000000000000000000abc";
    const DEF: &str = "0x0000000000000000000000000000000000000000000000000000000000000def";

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    fn log_selection() -> ReceiptSelection {
        ReceiptSelection::default()
            .and_root_contract_id([ABC])
            .unwrap()
            .and_receipt_type([ReceiptType::Log, ReceiptType::LogData])
            .and_tx_status([TransactionStatus::Success])
    }

    #[test]
    fn test_fields_are_anded() {
        let sel = log_selection();

        assert!(sel.matches(&record(
            json!({"root_contract_id": ABC, "receipt_type": 6, "tx_status": 1})
        )));
        assert!(!sel.matches(&record(
            json!({"root_contract_id": DEF, "receipt_type": 6, "tx_status": 1})
        )));
        assert!(!sel.matches(&record(
            json!({"root_contract_id": ABC, "receipt_type": 6, "tx_status": 2})
        )));
        // filtered field not returned
        assert!(!sel.matches(&record(json!({"root_contract_id": ABC, "receipt_type": 6}))));
        // unknown code
        assert!(!sel.matches(&record(
            json!({"root_contract_id": ABC, "receipt_type": 200, "tx_status": 1})
        )));
    }

    #[test]
    fn test_registers_accept_hex() {
        let sel = ReceiptSelection {
            ra: vec![42, 43],
            ..Default::default()
        };

        assert!(sel.matches(&record(json!({"ra": 43}))));
        assert!(sel.matches(&record(json!({"ra": "0x2a"}))));
        assert!(!sel.matches(&record(json!({"ra": 7}))));
    }

    #[test]
    fn test_selections_are_ored() {
        let query = Query::new()
            .where_receipts(log_selection())
            .where_receipts(ReceiptSelection::default().and_receipt_type([ReceiptType::Panic]))
            .where_outputs(OutputSelection::default().and_to([DEF]).unwrap());
        let mut data = ResponseData {
            receipts: vec![
                record(json!({"root_contract_id": ABC, "receipt_type": 5, "tx_status": 1})),
                record(json!({"root_contract_id": DEF, "receipt_type": 5, "tx_status": 1})),
                record(json!({"root_contract_id": DEF, "receipt_type": 3, "tx_status": 2})),
            ],
            outputs: vec![record(json!({"to": ABC})), record(json!({"to": DEF}))],
            ..Default::default()
        };

        retain_matching_records(&mut data, &query);

        let types = data
            .receipts
            .iter()
            .filter_map(|r| r.get("receipt_type").and_then(Value::as_u64))
            .collect::<Vec<_>>();
        assert_eq!(types, vec![5, 3]);
        assert_eq!(data.outputs, vec![record(json!({"to": DEF}))]);
    }

    #[test]
    fn test_unfiltered_kind_is_dropped() {
        let query = Query::new().where_outputs(OutputSelection::default());
        let mut data = ResponseData {
            inputs: vec![record(json!({"owner": ABC}))],
            outputs: vec![record(json!({"to": ABC}))],
            ..Default::default()
        };

        retain_matching_records(&mut data, &query);

        assert!(data.inputs.is_empty());
        assert_eq!(data.outputs.len(), 1);
    }
}
