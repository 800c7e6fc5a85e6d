//! Error types for the export pipeline.
//!
//! No stage recovers from its own failures: every error propagates to the
//! binary boundary and terminates the run, so a half-enriched batch never
//! reaches the output file.

use alloy::primitives::{B256, U256};
use alloy::transports::TransportError;
use thiserror::Error;

/// Failures that abort an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The log query against the node failed.
    #[error("fetching Birth logs for blocks {from}..={to}")]
    Fetch {
        /// First block of the failed query.
        from: u64,
        /// Last block of the failed query.
        to: u64,
        /// Underlying transport fault.
        #[source]
        source: TransportError,
    },

    /// Enriching one fetched log failed; the whole batch is abandoned.
    #[error("enriching event {index}")]
    Enrich {
        /// Zero-based position of the log in fetch order.
        index: usize,
        /// What went wrong for this event.
        #[source]
        source: EnrichError,
    },

    /// A write was attempted with zero records.
    #[error("no events to write, leaving the output untouched")]
    EmptyExport,

    /// CSV serialization failed.
    #[error("serializing records")]
    Csv(#[from] csv::Error),

    /// Filesystem fault while writing the output.
    #[error("writing output file")]
    Io(#[from] std::io::Error),
}

/// Per-event enrichment failures.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// Transport-level RPC failure during a metadata lookup.
    #[error(transparent)]
    Rpc(#[from] TransportError),

    /// The node does not know the transaction that emitted the log.
    #[error("transaction {0} not found")]
    MissingTransaction(B256),

    /// The node does not know the block the log points at.
    #[error("block {0} not found")]
    MissingBlock(u64),

    /// The log payload does not decode as a Birth event.
    #[error("malformed Birth log")]
    Payload(#[source] alloy::sol_types::Error),

    /// The log carries no block number or transaction hash (pending log).
    #[error("log is not anchored to a block")]
    Unanchored,

    /// The kitty id does not fit the record's integer type.
    #[error("kitty id {0} exceeds u64")]
    IdRange(U256),
}
