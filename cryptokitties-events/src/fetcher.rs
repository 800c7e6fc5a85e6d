//! Birth log queries against the RPC node.

use alloy::primitives::Address;
use alloy::providers::Provider;
use alloy::rpc::types::{Filter, Log};
use alloy::sol_types::SolEvent;
use cryptokitties::KittyCore;

use crate::error::ExportError;
use crate::range::BlockRange;

/// Fetch every Birth log the contract emitted inside `range`.
///
/// A single `eth_getLogs` query, inclusive on both ends, scoped to the
/// contract address and the Birth signature topic. The node's response
/// limits apply as-is: an oversized range surfaces as a transport error
/// rather than being split client-side. Logs come back in the node's
/// order, which in practice is ascending by block and log index.
///
/// # Errors
///
/// Returns [`ExportError::Fetch`] if the query fails.
pub async fn birth_logs<P: Provider>(
    provider: &P,
    contract: Address,
    range: BlockRange,
) -> Result<Vec<Log>, ExportError> {
    let filter = Filter::new()
        .address(contract)
        .event_signature(KittyCore::Birth::SIGNATURE_HASH)
        .from_block(range.start)
        .to_block(range.end);

    provider
        .get_logs(&filter)
        .await
        .map_err(|source| ExportError::Fetch {
            from: range.start,
            to: range.end,
            source,
        })
}
