//! Static deployment metadata for the KittyCore contract.
//!
//! CryptoKitties only ever shipped to Ethereum mainnet, so there is a
//! single canonical entry; the struct exists so that forks and local test
//! deployments can be described the same way.

use alloy::primitives::{Address, address};

/// Operational metadata for a KittyCore deployment.
#[derive(Debug, Clone, Copy)]
pub struct Deployment {
    /// EIP-155 chain ID of the hosting chain.
    pub chain_id: u64,
    /// The core contract address.
    pub address: Address,
    /// Block in which the core contract was created. Logs cannot exist
    /// before this height.
    pub deployment_block: u64,
    /// Suggested public RPC endpoint.
    pub default_rpc: &'static str,
}

/// The canonical Ethereum mainnet deployment (November 2017).
pub const MAINNET: Deployment = Deployment {
    chain_id: 1,
    address: address!("06012c8cf97BEaD5deAe237070F9587f8E7A266d"),
    deployment_block: 4_605_167,
    default_rpc: "https://ethereum-rpc.publicnode.com",
};
