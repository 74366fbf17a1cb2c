//! # Hyperfuel Format
//!
//! Primitive value types used to describe Fuel chain data on the wire.
//!
//! - [`FixedSizeData`] and its 32 byte aliases ([`Hash`], [`ContractId`], [`AssetId`], [`Address`])
//! - [`Data`] for variable length byte strings
//! - [`UInt`] for 64 bit integers that servers may send as numbers or strings
//! - u8 coded enums such as [`ReceiptType`] and [`InputType`]
//!
//! All byte values are `0x` prefixed hex strings in JSON.
//!
//! ```
//! use hyperfuel_format::{AssetId, Hex};
//!
//! let asset: AssetId =
//!     "0x2a0d0ed9d2217ec7f32dcd9a1902ce2a66d68437aeff84e3a3cc8bebee0d2eea".parse()?;
//! assert_eq!(
//!     asset.encode_hex(),
//!     "0x2a0d0ed9d2217ec7f32dcd9a1902ce2a66d68437aeff84e3a3cc8bebee0d2eea"
//! );
//! # Ok::<(), hyperfuel_format::Error>(())
//! ```

mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
    Address, AssetId, BlockHeight, ContractId, Data, FixedSizeData, Hash, Hex, InputType,
    OutputType, ReceiptType, TransactionStatus, TransactionType, UInt,
};
