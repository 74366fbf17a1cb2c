use std::collections::BTreeSet;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

use crate::{
    BlockField, EntityKind, InputField, InputSelection, OutputField, OutputSelection,
    ReceiptField, ReceiptSelection, TransactionField, ValidationError,
};

/// Fields to materialize per entity kind. A kind with an empty set is not returned at all.
#[derive(Default, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldSelection {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub block: BTreeSet<BlockField>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub transaction: BTreeSet<TransactionField>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub receipt: BTreeSet<ReceiptField>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub input: BTreeSet<InputField>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub output: BTreeSet<OutputField>,
}

impl FieldSelection {
    /// Wire names of the selected fields of `kind`.
    pub fn field_names(&self, kind: EntityKind) -> BTreeSet<&'static str> {
        match kind {
            EntityKind::Block => self.block.iter().map(BlockField::as_str).collect(),
            EntityKind::Transaction => self
                .transaction
                .iter()
                .map(TransactionField::as_str)
                .collect(),
            EntityKind::Receipt => self.receipt.iter().map(ReceiptField::as_str).collect(),
            EntityKind::Input => self.input.iter().map(InputField::as_str).collect(),
            EntityKind::Output => self.output.iter().map(OutputField::as_str).collect(),
        }
    }

    pub fn selects(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Block => !self.block.is_empty(),
            EntityKind::Transaction => !self.transaction.is_empty(),
            EntityKind::Receipt => !self.receipt.is_empty(),
            EntityKind::Input => !self.input.is_empty(),
            EntityKind::Output => !self.output.is_empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        EntityKind::all().into_iter().all(|kind| !self.selects(kind))
    }
}

#[derive(Default, Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct Query {
    /// The block to start the query from
    pub from_block: u64,
    /// The block to end the query at. If not specified, the query will go until the
    ///  end of data. Exclusive, the returned range will be [from_block..to_block).
    ///
    /// The server may stop before this block if it hits its time limit. Continue the
    ///  query by putting the `next_block` of the response into `from_block`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_block: Option<u64>,
    /// Receipt selections. These have an OR relationship, the query returns receipts
    ///  matching any of them, plus receipts related to the other returned objects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub receipts: Vec<ReceiptSelection>,
    /// Input selections, OR'ed like `receipts`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputSelection>,
    /// Output selections, OR'ed like `receipts`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputSelection>,
    /// Return every block in [from_block, to_block) instead of only the blocks related
    ///  to returned transactions, receipts, inputs and outputs.
    #[serde(default)]
    pub include_all_blocks: bool,
    /// Field selection. Requesting fewer fields reduces query execution time and payload size.
    #[serde(default)]
    pub field_selection: FieldSelection,
    /// Soft limit on blocks per response, the server may overshoot slightly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_num_blocks: Option<usize>,
    /// Soft limit on transactions per response, the server may overshoot slightly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_num_transactions: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_block(mut self, from_block: u64) -> Self {
        self.from_block = from_block;
        self
    }

    pub fn to_block(mut self, to_block: u64) -> Self {
        self.to_block = Some(to_block);
        self
    }

    /// Adds a receipt selection, OR'ed with the ones already present.
    pub fn where_receipts(mut self, selection: ReceiptSelection) -> Self {
        self.receipts.push(selection);
        self
    }

    pub fn where_inputs(mut self, selection: InputSelection) -> Self {
        self.inputs.push(selection);
        self
    }

    pub fn where_outputs(mut self, selection: OutputSelection) -> Self {
        self.outputs.push(selection);
        self
    }

    pub fn include_all_blocks(mut self) -> Self {
        self.include_all_blocks = true;
        self
    }

    pub fn select_block_fields(mut self, fields: impl IntoIterator<Item = BlockField>) -> Self {
        self.field_selection.block.extend(fields);
        self
    }

    pub fn select_transaction_fields(
        mut self,
        fields: impl IntoIterator<Item = TransactionField>,
    ) -> Self {
        self.field_selection.transaction.extend(fields);
        self
    }

    pub fn select_receipt_fields(mut self, fields: impl IntoIterator<Item = ReceiptField>) -> Self {
        self.field_selection.receipt.extend(fields);
        self
    }

    pub fn select_input_fields(mut self, fields: impl IntoIterator<Item = InputField>) -> Self {
        self.field_selection.input.extend(fields);
        self
    }

    pub fn select_output_fields(mut self, fields: impl IntoIterator<Item = OutputField>) -> Self {
        self.field_selection.output.extend(fields);
        self
    }

    pub fn max_num_blocks(mut self, max: usize) -> Self {
        self.max_num_blocks = Some(max);
        self
    }

    pub fn max_num_transactions(mut self, max: usize) -> Self {
        self.max_num_transactions = Some(max);
        self
    }

    /// Entity kinds the query filters on and therefore expects back.
    pub fn referenced_kinds(&self) -> Vec<EntityKind> {
        let mut kinds = Vec::new();
        if self.include_all_blocks {
            kinds.push(EntityKind::Block);
        }
        if !self.receipts.is_empty() {
            kinds.push(EntityKind::Receipt);
        }
        if !self.inputs.is_empty() {
            kinds.push(EntityKind::Input);
        }
        if !self.outputs.is_empty() {
            kinds.push(EntityKind::Output);
        }
        kinds
    }

    /// Checks the block range and the field selection.
    pub fn validate(self) -> Result<ValidatedQuery, ValidationError> {
        if let Some(to_block) = self.to_block {
            if to_block < self.from_block {
                return Err(ValidationError::InvalidRange {
                    from_block: self.from_block,
                    to_block,
                });
            }
        }

        if let Some(kind) = self
            .referenced_kinds()
            .into_iter()
            .find(|&kind| !self.field_selection.selects(kind))
        {
            return Err(ValidationError::MissingFieldSelection(kind));
        }

        if self.field_selection.is_empty() {
            return Err(ValidationError::NoFieldsSelected);
        }

        Ok(ValidatedQuery(Arc::new(self)))
    }
}

/// A [`Query`] that passed [`Query::validate`]. Cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedQuery(Arc<Query>);

impl ValidatedQuery {
    /// Same query resumed at `from_block`. The caller keeps `from_block` within the range.
    pub fn with_from_block(&self, from_block: u64) -> Self {
        if from_block == self.0.from_block {
            return self.clone();
        }
        let mut query = Query::clone(&self.0);
        query.from_block = from_block;
        Self(Arc::new(query))
    }

    /// Same query with the fields its selections filter on added to the field selection, so
    /// returned records can be matched against the selections client side.
    pub fn with_filter_fields(&self) -> Self {
        let mut fields = self.0.field_selection.clone();
        for sel in &self.0.receipts {
            fields.receipt.extend(sel.filter_fields());
        }
        for sel in &self.0.inputs {
            fields.input.extend(sel.filter_fields());
        }
        for sel in &self.0.outputs {
            fields.output.extend(sel.filter_fields());
        }

        if fields == self.0.field_selection {
            return self.clone();
        }
        let mut query = Query::clone(&self.0);
        query.field_selection = fields;
        Self(Arc::new(query))
    }

    pub fn into_inner(self) -> Query {
        Arc::unwrap_or_clone(self.0)
    }
}

impl Deref for ValidatedQuery {
    type Target = Query;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Query> for ValidatedQuery {
    type Error = ValidationError;

    fn try_from(query: Query) -> Result<Self, Self::Error> {
        query.validate()
    }
}

impl Serialize for ValidatedQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use hyperfuel_format::{InputType, ReceiptType};
    use pretty_assertions::assert_eq;

    const ASSET: &str = "0x2a0d0ed9d2217ec7f32dcd9a1902ce2a66d68437aeff84e3a3cc8bebee0d2eea";

    fn input_query() -> Query {
        Query::new()
            .from_block(0)
            .to_block(100)
            .where_inputs(InputSelection::default().and_asset_id([ASSET]).unwrap())
            .select_input_fields([InputField::TxId, InputField::Amount])
    }

    #[test]
    fn test_builder_serializes_minimal_json() {
        let json = serde_json::to_value(input_query()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "from_block": 0,
                "to_block": 100,
                "inputs": [{ "asset_id": [ASSET] }],
                "include_all_blocks": false,
                "field_selection": { "input": ["tx_id", "amount"] },
            })
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let query: Query = serde_json::from_str(
            r#"{"from_block": 7, "field_selection": {"receipt": ["tx_id", "receipt_type"]}}"#,
        )
        .unwrap();

        assert_eq!(
            query,
            Query::new()
                .from_block(7)
                .select_receipt_fields([ReceiptField::TxId, ReceiptField::ReceiptType])
        );
    }

    #[test]
    fn test_valid_query() {
        let validated = input_query().validate().unwrap();
        assert_eq!(validated.from_block, 0);
        assert_eq!(validated.to_block, Some(100));
    }

    #[test]
    fn test_empty_range_is_valid() {
        let query = input_query().from_block(100).to_block(100);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_reversed_range() {
        let err = input_query().from_block(101).validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidRange {
                from_block: 101,
                to_block: 100
            }
        ));
    }

    #[test]
    fn test_filtered_kind_needs_fields() {
        let query = input_query().where_receipts(
            ReceiptSelection::default().and_receipt_type([ReceiptType::Log]),
        );

        let err = query.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingFieldSelection(EntityKind::Receipt)
        ));
    }

    #[test]
    fn test_all_blocks_needs_block_fields() {
        let err = input_query().include_all_blocks().validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingFieldSelection(EntityKind::Block)
        ));
    }

    #[test]
    fn test_no_fields() {
        let query = Query::new().where_inputs(InputSelection::default());
        assert!(matches!(
            query.validate().unwrap_err(),
            ValidationError::MissingFieldSelection(EntityKind::Input)
        ));

        assert!(matches!(
            Query::new().to_block(10).validate().unwrap_err(),
            ValidationError::NoFieldsSelected
        ));
    }

    #[test]
    fn test_with_from_block_keeps_everything_else() {
        let validated = input_query().validate().unwrap();
        let resumed = validated.with_from_block(50);

        assert_eq!(resumed.from_block, 50);
        assert_eq!(resumed.clone().into_inner(), input_query().from_block(50));
        assert_eq!(validated.from_block, 0);
    }

    #[test]
    fn test_with_filter_fields() {
        let validated = input_query()
            .where_inputs(InputSelection::default().and_input_type([InputType::Coin]))
            .validate()
            .unwrap();
        let wire = validated.with_filter_fields();

        assert_eq!(
            wire.field_selection.field_names(EntityKind::Input),
            ["amount", "asset_id", "input_type", "tx_id"].into_iter().collect()
        );
        assert_eq!(wire.inputs, validated.inputs);
        assert_eq!(validated.field_selection.input.len(), 2);

        let covered = input_query()
            .select_input_fields([InputField::AssetId])
            .validate()
            .unwrap();
        assert_eq!(covered.with_filter_fields(), covered);
    }

    #[test]
    fn test_field_names() {
        let query = input_query().select_input_fields([InputField::InputType]);
        let names = query.field_selection.field_names(EntityKind::Input);

        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["amount", "input_type", "tx_id"]
        );
        assert!(query
            .field_selection
            .field_names(EntityKind::Block)
            .is_empty());
    }

    #[test]
    fn test_input_type_filter_round_trip() {
        let query = input_query().where_inputs(
            InputSelection::default().and_input_type([InputType::Coin, InputType::Message]),
        );
        let json = serde_json::to_string(&query).unwrap();
        let back: Query = serde_json::from_str(&json).unwrap();

        assert_eq!(back, query);
        assert!(json.contains(r#""input_type":[0,2]"#));
    }
}
