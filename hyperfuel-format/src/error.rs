use std::result::Result as StdResult;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Unexpected length. Expected {expected} got {got}.")]
    UnexpectedLength { expected: usize, got: usize },
    #[error("Failed to decode hex string:\n{0}")]
    DecodeHex(faster_hex::Error),
    #[error("Invalid hex prefix. Hex string doesn't start with \"0x\". Value was: \"{0}\"")]
    InvalidHexPrefix(String),
    #[error("Invalid number. {0}")]
    DecodeNumber(String),
    #[error("Unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: u8 },
}

pub type Result<T> = StdResult<T, Error>;
