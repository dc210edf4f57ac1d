use crate::config::Config;
use crate::contracts::format_address;
use crate::errors::CliError;
use anyhow::{Context, Result};
use colored::Colorize;
use ethers::signers::{LocalWallet, Signer};
use std::path::PathBuf;

/// Create a new wallet
pub async fn create() -> Result<()> {
    let signer = LocalWallet::new(&mut ethers::core::rand::thread_rng());
    let wallet_path = get_default_wallet_path()?;

    // Create parent directory
    if let Some(parent) = wallet_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Save private key as hex
    let key_hex = hex::encode(signer.signer().to_bytes());
    let json = serde_json::to_string(&key_hex)?;
    std::fs::write(&wallet_path, json)?;

    println!("{}", "✓ New wallet created successfully!".green());
    println!("  Address: {}", format_address(signer.address()).bright_yellow());
    println!("  Saved to: {}", wallet_path.display());
    println!();
    println!("{}", "⚠ IMPORTANT: Back up your wallet file!".yellow().bold());
    println!("  {}", "Fund this address before submitting transactions".dimmed());

    // Update config
    let mut config = Config::load()?;
    config.wallet_path = Some(wallet_path);
    config.save()?;

    Ok(())
}

/// Import wallet from a raw private key
pub async fn import(private_key: &str) -> Result<()> {
    let signer = parse_private_key(private_key)?;
    let wallet_path = get_default_wallet_path()?;

    if let Some(parent) = wallet_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let key_hex = private_key.trim().trim_start_matches("0x").to_string();
    let json = serde_json::to_string(&key_hex)?;
    std::fs::write(&wallet_path, json)?;

    println!("{}", "✓ Wallet imported successfully!".green());
    println!("  Address: {}", format_address(signer.address()).bright_yellow());

    // Update config
    let mut config = Config::load()?;
    config.wallet_path = Some(wallet_path);
    config.save()?;

    Ok(())
}

/// Show wallet address
pub async fn show_address() -> Result<()> {
    let signer = load_wallet()?;

    println!("{}", "Wallet Address:".bright_cyan());
    println!("  {}", format_address(signer.address()).bright_yellow());

    Ok(())
}

/// Load wallet from configured path
pub fn load_wallet() -> Result<LocalWallet> {
    let config = Config::load()?;

    let wallet_path = config.wallet_path
        .ok_or(CliError::WalletNotFound)?;

    if !wallet_path.exists() {
        return Err(CliError::WalletNotFound.into());
    }

    let contents = std::fs::read_to_string(&wallet_path)?;
    let key_hex: String = serde_json::from_str(&contents)
        .context("Invalid wallet file format")?;

    parse_private_key(&key_hex)
}

/// Parse a hex private key, with or without a 0x prefix
fn parse_private_key(key: &str) -> Result<LocalWallet> {
    let key = key.trim().trim_start_matches("0x");
    key.parse::<LocalWallet>()
        .context("Failed to parse private key")
}

/// Get default wallet path
fn get_default_wallet_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?;
    Ok(config_dir.join("dao-cli").join("wallet.json"))
}
