use crate::Result;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;

use super::hex::{decode_prefixed, encode_prefixed};
use super::Hex;

/// Variable length bytes, e.g. receipt data, scripts and predicates.
#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    Hash,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
)]
pub struct Data(Box<[u8]>);

impl AsRef<[u8]> for Data {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Data {
    fn from(buf: Vec<u8>) -> Self {
        Self(buf.into())
    }
}

struct DataVisitor;

impl<'de> Visitor<'de> for DataVisitor {
    type Value = Data;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string for data")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        decode_prefixed(value)
            .map(Data::from)
            .map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Data {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DataVisitor)
    }
}

impl Serialize for Data {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_prefixed(self))
    }
}

impl Hex for Data {
    fn encode_hex(&self) -> String {
        encode_prefixed(&self.0)
    }

    fn decode_hex(hex: &str) -> Result<Self> {
        decode_prefixed(hex).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::Data;

    #[test]
    fn test_log_data_json() {
        let data: Data = serde_json::from_str(r#""0x00000000000000010000000000000002""#).unwrap();
        assert_eq!(data.len(), 16);
        assert_eq!(data[7], 1);

        let empty: Data = serde_json::from_str(r#""0x""#).unwrap();
        assert!(empty.is_empty());
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#""0x""#);
    }
}
