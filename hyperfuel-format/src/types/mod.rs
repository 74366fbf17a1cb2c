mod codes;
mod data;
mod fixed_size_data;
mod hex;
mod uint;

pub use codes::{InputType, OutputType, ReceiptType, TransactionStatus, TransactionType};
pub use data::Data;
pub use fixed_size_data::FixedSizeData;
pub use hex::Hex;
pub use uint::UInt;

/// Fuel hash (transaction id, block id, merkle roots) is 32 bytes of data
pub type Hash = FixedSizeData<32>;

/// Fuel contract id is 32 bytes of data
pub type ContractId = FixedSizeData<32>;

/// Fuel asset id is 32 bytes of data
pub type AssetId = FixedSizeData<32>;

/// Fuel address (owner, predicate root, recipient) is 32 bytes of data
pub type Address = FixedSizeData<32>;

pub type BlockHeight = UInt;
