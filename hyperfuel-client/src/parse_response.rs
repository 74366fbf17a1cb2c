use hyperfuel_net_types::{ArchiveHeight, ValidatedQuery};

use crate::{filter::retain_matching_records, Error, QueryResponse, Records, Result};

/// Parses the body of a `/query` response sent for `query`.
///
/// With [`Records::Matching`] receipts, inputs and outputs not matching a selection of `query`
/// are dropped. Fields outside the field selection are dropped so callers only see what they
/// asked for.
pub(crate) fn parse_query_response(
    bytes: &[u8],
    query: &ValidatedQuery,
    records: Records,
) -> Result<QueryResponse> {
    let mut res: QueryResponse = serde_json::from_slice(bytes)
        .map_err(|e| Error::Protocol(format!("parse query response: {e}")))?;

    if res.next_block < query.from_block {
        return Err(Error::Protocol(format!(
            "next_block ({}) is behind the requested from_block ({})",
            res.next_block, query.from_block
        )));
    }

    if records == Records::Matching {
        retain_matching_records(&mut res.data, query);
    }
    res.data.retain_selected(&query.field_selection);

    Ok(res)
}

pub(crate) fn parse_height(bytes: &[u8]) -> Result<u64> {
    let height: ArchiveHeight = serde_json::from_slice(bytes)
        .map_err(|e| Error::Protocol(format!("parse height response: {e}")))?;

    Ok(height.height.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use hyperfuel_format::InputType;
    use hyperfuel_net_types::{InputField, InputSelection, Query};
    use serde_json::json;

    const OWNER: &str = "0x00000000000000000000000000000000000000000000000000000000000000aa";

    fn query(from_block: u64) -> ValidatedQuery {
        Query::new()
            .from_block(from_block)
            .where_inputs(InputSelection::default())
            .select_input_fields([InputField::TxId, InputField::Amount])
            .validate()
            .unwrap()
    }

    #[test]
    fn test_strips_unselected() {
        let body = json!({
            "archive_height": 120,
            "next_block": 50,
            "total_execution_time": 12,
            "data": {
                "inputs": [{"tx_id": "0x01", "amount": 10, "owner": "0x02"}],
                "receipts": [{"tx_id": "0x01"}],
            }
        });

        let res = parse_query_response(body.to_string().as_bytes(), &query(0), Records::Related)
            .unwrap();

        assert_eq!(res.archive_height, Some(120));
        assert_eq!(res.next_block, 50);
        assert_eq!(res.data.inputs.len(), 1);
        assert_eq!(
            res.data.inputs[0]
                .fields()
                .collect::<std::collections::BTreeSet<_>>(),
            ["amount", "tx_id"].into_iter().collect()
        );
        assert!(res.data.receipts.is_empty());
    }

    #[test]
    fn test_matching_uses_filter_fields() {
        let query = Query::new()
            .where_inputs(
                InputSelection::default()
                    .and_input_type([InputType::Coin])
                    .and_owner([OWNER])
                    .unwrap(),
            )
            .select_input_fields([InputField::TxId])
            .validate()
            .unwrap();
        let body = json!({
            "next_block": 5,
            "data": {
                "inputs": [
                    {"tx_id": "0x01", "input_type": 0, "owner": OWNER},
                    {"tx_id": "0x02", "input_type": 1, "owner": OWNER},
                    {"tx_id": "0x03", "input_type": 0, "owner": "0x04"},
                ],
            }
        })
        .to_string();

        let related = parse_query_response(body.as_bytes(), &query, Records::Related).unwrap();
        assert_eq!(related.data.inputs.len(), 3);

        let matching = parse_query_response(body.as_bytes(), &query, Records::Matching).unwrap();
        assert_eq!(
            matching.data.inputs,
            vec![Record::from(
                json!({"tx_id": "0x01"}).as_object().unwrap().clone()
            )]
        );
    }

    #[test]
    fn test_missing_data() {
        let res =
            parse_query_response(br#"{"next_block": 10}"#, &query(0), Records::Related).unwrap();
        assert!(res.data.is_empty());
        assert_eq!(res.archive_height, None);
    }

    #[test]
    fn test_cursor_went_backwards() {
        let err = parse_query_response(br#"{"next_block": 10}"#, &query(20), Records::Related)
            .unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn test_garbage() {
        let err = parse_query_response(b"<html>bad gateway</html>", &query(0), Records::Related)
            .unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn test_height() {
        assert_eq!(parse_height(br#"{"height": 42}"#).unwrap(), 42);
        assert_eq!(parse_height(br#"{"height": null}"#).unwrap(), 0);
        assert!(parse_height(b"42").is_err());
    }
}
