use crate::{Error, Result};

pub trait Hex: Sized {
    fn encode_hex(&self) -> String;
    fn decode_hex(hex: &str) -> Result<Self>;
}

pub(crate) fn encode_prefixed(buf: &[u8]) -> String {
    if buf.is_empty() {
        return "0x".into();
    }

    format!("0x{}", faster_hex::hex_string(buf))
}

/// Decodes a `0x` prefixed hex string. Odd length input is left padded with a zero nibble.
pub(crate) fn decode_prefixed(value: &str) -> Result<Vec<u8>> {
    let hex = value
        .strip_prefix("0x")
        .ok_or_else(|| Error::InvalidHexPrefix(value.to_owned()))?;

    if hex.len() % 2 != 0 {
        return decode_unprefixed(&format!("0{hex}"));
    }

    decode_unprefixed(hex)
}

fn decode_unprefixed(hex: &str) -> Result<Vec<u8>> {
    let mut dst = vec![0; hex.len() / 2];

    faster_hex::hex_decode(hex.as_bytes(), &mut dst).map_err(Error::DecodeHex)?;

    Ok(dst)
}
