//! CryptoKitties core contract bindings and deployment metadata.
//!
//! The [`contract`] module carries the `sol!` binding for the events the
//! KittyCore contract emits; [`deployment`] pins down where the contract
//! lives on chain and from which block it has existed.

pub mod contract;
pub mod deployment;

pub use contract::KittyCore;
pub use deployment::{Deployment, MAINNET};
