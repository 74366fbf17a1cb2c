use std::fmt;

use hyperfuel_format::Hex;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Category of on-chain object a query can target.
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
    strum_macros::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Block,
    Transaction,
    Receipt,
    Input,
    Output,
}

impl EntityKind {
    pub fn all() -> Vec<Self> {
        use strum::IntoEnumIterator;
        Self::iter().collect()
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `0x` hex literals given to selection builders, naming the offending field on failure.
pub(crate) fn parse_hex_values<T, I, S>(
    field: &'static str,
    values: I,
) -> Result<Vec<T>, ValidationError>
where
    T: Hex,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| {
            T::decode_hex(v.as_ref())
                .map_err(|source| ValidationError::InvalidValue { field, source })
        })
        .collect()
}
