//! Runtime configuration loaded from `config.toml`.
//!
//! Supplies the RPC endpoint and an optional contract address override.
//! When no config file is present the built-in mainnet defaults from
//! [`cryptokitties::MAINNET`] are used, so the binary runs with no setup.

use std::path::Path;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Config {
    /// RPC endpoint URL.
    pub rpc: Option<String>,
    /// Core contract address override, for forks and local test
    /// deployments.
    pub contract: Option<Address>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Returns [`Config::default`] if the file does not exist, allowing
    /// the binary to work without any config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// The effective RPC endpoint: CLI override first, then the config
    /// file, then the built-in default.
    #[must_use]
    pub fn rpc_url(&self, cli_override: Option<&str>, default_rpc: &str) -> String {
        cli_override
            .or(self.rpc.as_deref())
            .unwrap_or(default_rpc)
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::Config;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert!(config.rpc.is_none(), "no rpc without a config file");
        assert!(config.contract.is_none(), "no contract without a config file");
    }

    #[test]
    fn file_contents_are_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "rpc = \"https://rpc.example.com\"\ncontract = \"0x06012c8cf97BEaD5deAe237070F9587f8E7A266d\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.rpc.as_deref(), Some("https://rpc.example.com"), "rpc key is read");
        assert_eq!(
            config.contract,
            Some(address!("06012c8cf97BEaD5deAe237070F9587f8E7A266d")),
            "contract key parses as an address"
        );
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "rpc = [not toml").unwrap();

        assert!(Config::load(&path).is_err(), "a present but broken config must fail loudly");
    }

    #[test]
    fn rpc_url_precedence_is_flag_then_file_then_default() {
        let config = Config {
            rpc: Some("https://from-file.example.com".to_owned()),
            contract: None,
        };
        assert_eq!(
            config.rpc_url(Some("https://from-flag.example.com"), "https://default.example.com"),
            "https://from-flag.example.com",
            "CLI override wins over everything"
        );
        assert_eq!(
            config.rpc_url(None, "https://default.example.com"),
            "https://from-file.example.com",
            "config file wins over the default"
        );
        assert_eq!(
            Config::default().rpc_url(None, "https://default.example.com"),
            "https://default.example.com",
            "the built-in default is the last resort"
        );
    }
}
