use crate::errors::CliError;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_CONFIRM_TIMEOUT_SECS: u64 = 300;

/// Configuration for dao-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rpc_url: String,
    pub chain_id: u64,
    pub dao_address: Option<String>,
    pub nft_address: Option<String>,
    pub wallet_path: Option<PathBuf>,
    #[serde(default = "default_confirm_timeout")]
    pub confirm_timeout_secs: u64,
}

fn default_confirm_timeout() -> u64 {
    DEFAULT_CONFIRM_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "https://rpc.sepolia.org".to_string(),
            chain_id: 11155111,
            dao_address: None,
            nft_address: None,
            wallet_path: None,
            confirm_timeout_secs: DEFAULT_CONFIRM_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Get config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?;
        Ok(config_dir.join("dao-cli").join("config.toml"))
    }

    /// Load config from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            // Create default config
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(&path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        Ok(())
    }

    /// Update RPC endpoint and chain id
    pub fn set_rpc(&mut self, url: &str, chain_id: Option<u64>) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CliError::ConfigError(format!("Invalid RPC URL: {}", url)).into());
        }

        self.rpc_url = url.to_string();
        if let Some(id) = chain_id {
            self.chain_id = id;
        }
        self.save()?;

        Ok(())
    }

    /// Update DAO and membership-NFT contract addresses
    pub fn set_contracts(&mut self, dao: &str, nft: &str) -> Result<()> {
        // Validation only; commands re-parse on use
        crate::contracts::parse_address(dao, "DAO contract")?;
        crate::contracts::parse_address(nft, "NFT contract")?;

        self.dao_address = Some(dao.to_string());
        self.nft_address = Some(nft.to_string());
        self.save()?;

        Ok(())
    }
}

/// Set RPC endpoint configuration
pub fn set_rpc(url: &str, chain_id: Option<u64>) -> Result<()> {
    let mut config = Config::load()?;
    config.set_rpc(url, chain_id)?;

    println!("{}", format!("✓ RPC endpoint set to: {}", url).green());
    println!("  Chain ID: {}", config.chain_id);

    Ok(())
}

/// Set DAO and NFT contract addresses
pub fn set_contracts(dao: &str, nft: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set_contracts(dao, nft)?;

    println!("{}", "✓ Contract addresses saved".green());
    println!("  DAO: {}", dao.bright_yellow());
    println!("  NFT: {}", nft.bright_yellow());

    Ok(())
}

/// Show current configuration
pub fn show() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "dao-cli Configuration".bright_cyan().bold());
    println!("  RPC URL:       {}", config.rpc_url);
    println!("  Chain ID:      {}", config.chain_id.to_string().bright_yellow());
    println!("  DAO Contract:  {}",
        config.dao_address.unwrap_or_else(|| "Not set".to_string())
    );
    println!("  NFT Contract:  {}",
        config.nft_address.unwrap_or_else(|| "Not set".to_string())
    );
    println!("  Wallet Path:   {}",
        config.wallet_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not set".to_string())
    );
    println!("  Confirm Timeout: {}s", config.confirm_timeout_secs);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.chain_id, 11155111);
        assert!(config.rpc_url.starts_with("https://"));
        assert!(config.dao_address.is_none());
        assert!(config.nft_address.is_none());
        assert!(config.wallet_path.is_none());
        assert_eq!(config.confirm_timeout_secs, 300);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();

        assert!(toml_str.contains("rpc_url"));
        assert!(toml_str.contains("chain_id"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            rpc_url = "http://127.0.0.1:8545"
            chain_id = 31337
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.chain_id, 31337);
        // Missing field falls back to the default timeout
        assert_eq!(config.confirm_timeout_secs, 300);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.rpc_url = "http://127.0.0.1:8545".to_string();
        config.chain_id = 31337;
        config.dao_address = Some("0x7ef2e0048f5bAeDe046f6BF797943daF4ED8CB47".to_string());

        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.rpc_url, deserialized.rpc_url);
        assert_eq!(config.chain_id, deserialized.chain_id);
        assert_eq!(config.dao_address, deserialized.dao_address);
    }

    #[test]
    fn test_set_rpc_rejects_bad_scheme() {
        let mut config = Config::default();
        let result = config.set_rpc("ftp://example.com", None);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid RPC URL"));
    }
}
