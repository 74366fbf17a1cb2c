use serde::{Deserialize, Serialize};

/// Selectable fields of a block header.
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
pub enum BlockField {
    Id,
    DaHeight,
    ConsensusParametersVersion,
    StateTransitionBytecodeVersion,
    TransactionsCount,
    MessageReceiptCount,
    TransactionsRoot,
    MessageOutboxRoot,
    EventInboxRoot,
    Height,
    PrevRoot,
    Time,
    ApplicationHash,
}

impl BlockField {
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
    fn test_field_names_match_wire_names() {
        for field in BlockField::all() {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
        assert_eq!(BlockField::DaHeight.as_str(), "da_height");
    }

    #[test]
    fn test_parse_field_name() {
        let field: BlockField = "prev_root".parse().unwrap();
        assert_eq!(field, BlockField::PrevRoot);
        assert!("number".parse::<BlockField>().is_err());
    }
}
