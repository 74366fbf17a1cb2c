//! This crate is a re-export of the hyperfuel crates.
//!
//! Find the client and pagination in `hyperfuel-client`, chain value types (hashes, contract ids,
//! receipt types, etc) in `hyperfuel-format`, and query parameters in `hyperfuel-net-types`.

pub use hyperfuel_client as client;
pub use hyperfuel_format as format;
pub use hyperfuel_net_types as net_types;
