use thiserror::Error as ThisError;

use crate::EntityKind;

/// Reasons a [`Query`](crate::Query) is rejected before it is sent anywhere.
#[derive(Debug, ThisError)]
pub enum ValidationError {
    #[error("to_block ({to_block}) is lower than from_block ({from_block})")]
    InvalidRange { from_block: u64, to_block: u64 },
    #[error("query filters {0} records but selects none of their fields")]
    MissingFieldSelection(EntityKind),
    #[error("query doesn't select any fields")]
    NoFieldsSelected,
    #[error("invalid value for {field}: {source}")]
    InvalidValue {
        field: &'static str,
        #[source]
        source: hyperfuel_format::Error,
    },
}
