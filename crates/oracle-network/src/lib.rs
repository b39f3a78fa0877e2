//! Network registry and RPC endpoint resolution for the oracle client.

pub mod errors;
pub mod network;
pub mod rpc;

pub use errors::*;
pub use network::*;
pub use rpc::*;
