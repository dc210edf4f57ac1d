use super::format_eth;
use crate::contracts::{self, format_address};
use crate::errors::CliError;
use crate::submitter::Submitter;
use anyhow::Result;
use colored::Colorize;
use indicatif::ProgressBar;
use std::time::Duration;

/// Withdraw the DAO treasury to the owner. Mirrors the original UI,
/// which only offered withdrawal to the owner; the contract enforces
/// the same rule on-chain.
pub async fn execute() -> Result<()> {
    let (config, client) = contracts::connect()?;

    println!("{}", "Withdrawing DAO treasury...".bright_cyan());
    println!("  Wallet: {}", format_address(client.caller()).bright_yellow());
    println!();

    let owner = client.dao_owner().await?;
    if client.caller() != owner {
        println!("  DAO owner: {}", format_address(owner).dimmed());
        return Err(CliError::NotOwner.into());
    }

    let treasury = client.treasury_balance().await?;
    println!("  Treasury balance: {} ETH", format_eth(treasury).bright_green());
    println!();

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message("Submitting transaction and awaiting confirmation...");

    let mut submitter = Submitter::new(config.confirm_timeout_secs);
    let result = submitter.submit(client.withdraw_ether()).await;
    spinner.finish_and_clear();

    match result {
        Ok(receipt) => {
            println!("{}", "✅ Treasury withdrawn successfully!".bright_green());
            println!();
            println!("  Transaction: {:?}", receipt.transaction_hash);

            // Re-fetch the balance the write just changed
            match client.treasury_balance().await {
                Ok(balance) => {
                    println!("  Treasury balance: {} ETH", format_eth(balance));
                }
                Err(e) => {
                    println!("  {}", format!("⚠ Could not re-fetch treasury balance: {}", e).yellow());
                }
            }
        }
        Err(e) => {
            println!("{}", "❌ Withdrawal failed".bright_red());
            println!("  Error: {}", e);
            println!();
            println!("{}", "Troubleshooting:".bright_yellow());
            println!("  • Only the DAO owner can withdraw");
            println!("  • Ensure your wallet has ETH for gas");
            return Err(e.into());
        }
    }

    Ok(())
}
