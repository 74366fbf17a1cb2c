//! Enumerations that fuel encodes as a single byte.
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! u8_code {
    (
        $(#[$meta:meta])*
        $name:ident: $label:literal { $($variant:ident = $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn to_u8(self) -> u8 {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            pub fn from_u8(code: u8) -> crate::Result<Self> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(Error::UnknownCode { kind: $label, code }),
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = Error;

            fn try_from(code: u8) -> crate::Result<Self> {
                Self::from_u8(code)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.to_u8()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    };
}

u8_code! {
    ReceiptType: "receipt type" {
        Call = 0,
        Return = 1,
        ReturnData = 2,
        Panic = 3,
        Revert = 4,
        Log = 5,
        LogData = 6,
        Transfer = 7,
        TransferOut = 8,
        ScriptResult = 9,
        MessageOut = 10,
        Mint = 11,
        Burn = 12,
    }
}

u8_code! {
    InputType: "input type" {
        Coin = 0,
        Contract = 1,
        Message = 2,
    }
}

u8_code! {
    OutputType: "output type" {
        Coin = 0,
        Contract = 1,
        Change = 2,
        Variable = 3,
        ContractCreated = 4,
    }
}

u8_code! {
    TransactionType: "transaction type" {
        Script = 0,
        Create = 1,
        Mint = 2,
        Upgrade = 3,
        Upload = 4,
        Blob = 5,
    }
}

u8_code! {
    /// Final status of a transaction as recorded by the indexer.
    TransactionStatus: "transaction status" {
        Success = 1,
        Failure = 2,
    }
}
