//! `sol!` bindings for the KittyCore contract events.
//!
//! Only the breeding surface is bound. The deployed contract predates
//! Solidity's indexed-parameter conventions for NFTs, so every `Birth`
//! parameter sits in the data section and the log carries a single topic.

use alloy::sol;

sol! {
    /// The CryptoKitties core contract.
    #[derive(Debug, PartialEq, Eq)]
    contract KittyCore {
        /// Emitted whenever a new kitten comes into existence, whether
        /// through gen-0 creation or `giveBirth`.
        event Birth(address owner, uint256 kittyId, uint256 matronId, uint256 sireId, uint256 genes);
    }
}
