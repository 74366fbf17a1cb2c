//! Hyperfuel network types for transport and queries.
//!
//! A [`Query`] describes a block range, filters for receipts, inputs and outputs,
//! and the fields to return for each entity kind. Queries are checked once with
//! [`Query::validate`] and the resulting [`ValidatedQuery`] can be resubmitted
//! any number of times (retries, pagination) without being checked again.

pub mod block;
pub mod error;
pub mod input;
pub mod output;
pub mod query;
pub mod receipt;
pub mod response;
pub mod transaction;
pub mod types;

pub use block::BlockField;
pub use error::ValidationError;
pub use input::{InputField, InputSelection};
pub use output::{OutputField, OutputSelection};
pub use query::{FieldSelection, Query, ValidatedQuery};
pub use receipt::{ReceiptField, ReceiptSelection};
pub use response::ArchiveHeight;
pub use transaction::TransactionField;
pub use types::EntityKind;
