//! CryptoKitties Birth event exporter CLI.
//!
//! Scans a block range for Birth events on the KittyCore contract,
//! enriches each with transaction and block metadata, and writes the
//! result to a CSV file.
//!
//! # Usage
//!
//! ```bash
//! # Scan the default window (blocks 5,000,000..=5,001,000) to events.csv
//! cryptokitties-events
//!
//! # Scan a specific window; bounds may be given in either order
//! cryptokitties-events 5000000 5000100
//!
//! # Custom output file and RPC endpoint
//! cryptokitties-events 5000000 5000100 --out births.csv --rpc https://my-rpc.example.com
//! ```

use std::path::PathBuf;

use alloy::providers::ProviderBuilder;
use anyhow::{Context, Result};
use clap::Parser;
use cryptokitties_events::config::Config;
use cryptokitties_events::exporter;
use cryptokitties_events::range::BlockRange;

/// First block scanned when no bounds are given.
const DEFAULT_START_BLOCK: u64 = 5_000_000;

/// Last block scanned when no bounds are given.
const DEFAULT_END_BLOCK: u64 = 5_001_000;

/// CryptoKitties Birth event exporter.
#[derive(Debug, Parser)]
#[command(name = "cryptokitties-events", version, about)]
struct Cli {
    /// First block of the scan window [default: 5000000].
    start: Option<u64>,

    /// Last block of the scan window, inclusive [default: 5001000].
    /// Swapped with START when given in reverse order.
    end: Option<u64>,

    /// Output CSV file.
    #[arg(long, default_value = "events.csv")]
    out: PathBuf,

    /// Path to the TOML config file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the RPC endpoint from config.
    #[arg(long)]
    rpc: Option<String>,
}

impl Cli {
    /// The scan window after defaulting absent bounds and normalizing
    /// their order numerically.
    fn block_range(&self) -> BlockRange {
        BlockRange::new(
            self.start.unwrap_or(DEFAULT_START_BLOCK),
            self.end.unwrap_or(DEFAULT_END_BLOCK),
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let range = cli.block_range();

    let config = Config::load(&cli.config)?;
    let rpc_url = config.rpc_url(cli.rpc.as_deref(), cryptokitties::MAINNET.default_rpc);
    let contract = config.contract.unwrap_or(cryptokitties::MAINNET.address);

    tracing::info!(%range, %contract, rpc = %rpc_url, "starting export");

    let provider = ProviderBuilder::new().connect_http(
        rpc_url
            .parse()
            .with_context(|| format!("invalid RPC URL: {rpc_url}"))?,
    );

    exporter::run(&provider, contract, range, &cli.out).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use cryptokitties_events::range::BlockRange;

    use super::Cli;

    #[test]
    fn absent_bounds_fall_back_to_defaults() {
        let cli = Cli::parse_from(["cryptokitties-events"]);
        assert_eq!(
            cli.block_range(),
            BlockRange {
                start: 5_000_000,
                end: 5_001_000
            },
            "missing positionals use the built-in window"
        );
    }

    #[test]
    fn reversed_bounds_normalize_numerically() {
        let cli = Cli::parse_from(["cryptokitties-events", "100", "50"]);
        assert_eq!(
            cli.block_range(),
            BlockRange { start: 50, end: 100 },
            "bounds are ordered by value, not lexicographically"
        );
    }

    #[test]
    fn malformed_bounds_fail_instead_of_defaulting() {
        assert!(
            Cli::try_parse_from(["cryptokitties-events", "abc", "50"]).is_err(),
            "a non-integer bound is a parse error, not a silent default"
        );
    }

    #[test]
    fn single_bound_defaults_the_other() {
        let cli = Cli::parse_from(["cryptokitties-events", "4900000"]);
        assert_eq!(
            cli.block_range(),
            BlockRange {
                start: 4_900_000,
                end: 5_001_000
            },
            "one given bound pairs with the default for the other"
        );
    }
}
