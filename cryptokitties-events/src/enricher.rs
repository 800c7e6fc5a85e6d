//! Per-event enrichment: transaction and block metadata lookups.

use std::collections::HashMap;

use alloy::consensus::Transaction;
use alloy::network::TransactionResponse;
use alloy::providers::Provider;
use alloy::rpc::types::Log;
use cryptokitties::KittyCore;
use serde::Serialize;

use crate::error::EnrichError;

/// One Birth event joined with its transaction and block metadata.
///
/// Field declaration order is the CSV column order; the serde names are
/// the CSV header names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRecord {
    /// Token id of the newborn kitty.
    pub kitty_id: u64,
    /// Hash of the transaction that emitted the event, `0x`-prefixed hex.
    pub tx_hash: String,
    /// Sender of that transaction.
    pub from: String,
    /// Recipient of that transaction; empty for contract creations.
    pub to: String,
    /// Unix timestamp (seconds) of the containing block.
    pub timestamp: u64,
}

/// Joins raw logs with data from their parent transaction and block.
///
/// Every event costs one `eth_getTransactionByHash`; block timestamps are
/// memoized per block number, so a birthing spree inside a single block
/// costs one `eth_getBlockByNumber` for the whole spree.
#[derive(Debug)]
pub struct Enricher<'a, P> {
    provider: &'a P,
    block_times: HashMap<u64, u64>,
}

impl<'a, P: Provider> Enricher<'a, P> {
    /// Create an enricher backed by `provider`.
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            block_times: HashMap::new(),
        }
    }

    /// Project one raw log into a [`BirthRecord`].
    ///
    /// # Errors
    ///
    /// Fails when the log is still pending, does not decode as a Birth
    /// event, or either metadata lookup fails or comes back empty.
    pub async fn enrich(&mut self, log: &Log) -> Result<BirthRecord, EnrichError> {
        let tx_hash = log.transaction_hash.ok_or(EnrichError::Unanchored)?;
        let block_number = log.block_number.ok_or(EnrichError::Unanchored)?;
        let birth = log
            .log_decode::<KittyCore::Birth>()
            .map_err(EnrichError::Payload)?
            .inner
            .data;

        let kitty_id =
            u64::try_from(birth.kittyId).map_err(|_| EnrichError::IdRange(birth.kittyId))?;

        let tx = self
            .provider
            .get_transaction_by_hash(tx_hash)
            .await?
            .ok_or(EnrichError::MissingTransaction(tx_hash))?;

        let timestamp = self.block_timestamp(block_number).await?;

        Ok(BirthRecord {
            kitty_id,
            tx_hash: format!("{tx_hash:#x}"),
            from: format!("{:#x}", tx.from()),
            to: tx.to().map(|a| format!("{a:#x}")).unwrap_or_default(),
            timestamp,
        })
    }

    /// Resolve a block's timestamp, hitting the node once per distinct
    /// block.
    async fn block_timestamp(&mut self, number: u64) -> Result<u64, EnrichError> {
        if let Some(&ts) = self.block_times.get(&number) {
            return Ok(ts);
        }

        let block = self
            .provider
            .get_block_by_number(number.into())
            .await?
            .ok_or(EnrichError::MissingBlock(number))?;

        let ts = block.header.timestamp;
        self.block_times.insert(number, ts);
        Ok(ts)
    }
}
