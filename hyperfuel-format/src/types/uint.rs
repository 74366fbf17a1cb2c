use crate::{Error, Hex};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

/// Unsigned 64 bit integer as found in fuel records (heights, amounts, registers).
///
/// Serialized as a JSON number. Deserializes from a number, a decimal string
/// or a `0x` prefixed hex string since servers are not consistent about it.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
    derive_more::Display,
)]
pub struct UInt(u64);

impl FromStr for UInt {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        let parsed = match value.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => value.parse::<u64>(),
        };

        parsed
            .map(Self)
            .map_err(|e| Error::DecodeNumber(format!("{value}: {e}")))
    }
}

struct UIntVisitor;

impl Visitor<'_> for UIntVisitor {
    type Value = UInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("unsigned integer or string encoded integer")
    }

    fn visit_u64<E>(self, value: u64) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(UInt(value))
    }

    fn visit_i64<E>(self, value: i64) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(UInt)
            .map_err(|_| E::custom(format!("negative integer: {value}")))
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        UInt::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for UInt {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(UIntVisitor)
    }
}

impl Serialize for UInt {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl Hex for UInt {
    fn encode_hex(&self) -> String {
        format!("0x{:x}", self.0)
    }

    fn decode_hex(hex: &str) -> crate::Result<Self> {
        if !hex.starts_with("0x") {
            return Err(Error::InvalidHexPrefix(hex.to_owned()));
        }
        Self::from_str(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::UInt;
    use crate::Hex;

    #[test]
    fn test_json_encodings() {
        let v: Vec<UInt> = serde_json::from_str(r#"[1, "2", "0xff", 18446744073709551615]"#).unwrap();
        assert_eq!(
            v,
            vec![UInt::from(1), UInt::from(2), UInt::from(255), UInt::from(u64::MAX)]
        );
        assert_eq!(serde_json::to_string(&UInt::from(255)).unwrap(), "255");
    }

    #[test]
    fn test_json_rejects_out_of_range() {
        assert!(serde_json::from_str::<UInt>("-1").is_err());
        assert!(serde_json::from_str::<UInt>(r#""0xffffffffffffffffa""#).is_err());
    }

    #[test]
    fn test_hex() {
        assert_eq!(UInt::from(255).encode_hex(), "0xff");
        assert_eq!(UInt::decode_hex("0xff").unwrap(), UInt::from(255));
        assert!(UInt::decode_hex("255").is_err());
    }
}
