//! The export pipeline: fetch, enrich, write.

use std::path::Path;

use alloy::primitives::Address;
use alloy::providers::Provider;

use crate::enricher::Enricher;
use crate::error::ExportError;
use crate::fetcher;
use crate::output;
use crate::range::BlockRange;

/// Run the full export: every Birth event in `range` becomes one CSV row
/// at `out`.
///
/// The stages run strictly in sequence and the first failure aborts the
/// run. Records reach the filesystem only after the whole batch enriched
/// cleanly, so there is never a partial CSV. Exactly one record is
/// produced per fetched log, in fetch order.
///
/// # Errors
///
/// Propagates the first [`ExportError`] from any stage, including
/// [`ExportError::EmptyExport`] when the range contains no Birth events.
pub async fn run<P: Provider>(
    provider: &P,
    contract: Address,
    range: BlockRange,
    out: &Path,
) -> Result<(), ExportError> {
    let logs = fetcher::birth_logs(provider, contract, range).await?;
    tracing::info!(events = logs.len(), %range, "read events");

    let mut enricher = Enricher::new(provider);
    let mut records = Vec::with_capacity(logs.len());
    for (index, log) in logs.iter().enumerate() {
        let record = enricher
            .enrich(log)
            .await
            .map_err(|source| ExportError::Enrich { index, source })?;
        records.push(record);
    }
    tracing::info!(events = records.len(), "processed events");

    output::write(out, &records)?;
    tracing::info!(path = %out.display(), rows = records.len(), "wrote csv");

    Ok(())
}
