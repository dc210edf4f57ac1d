use crate::contracts::{self, format_address};
use crate::errors::CliError;
use crate::proposals::can_participate;
use crate::submitter::Submitter;
use anyhow::Result;
use colored::Colorize;
use ethers::core::types::U256;
use indicatif::ProgressBar;
use std::time::Duration;

/// Execute create-proposal command
pub async fn execute(token_id: u64) -> Result<()> {
    let (config, client) = contracts::connect()?;

    println!("{}", "Creating proposal...".bright_cyan());
    println!("  Member:          {}", format_address(client.caller()).bright_yellow());
    println!("  NFT to purchase: {}", token_id.to_string().bright_white());
    println!();

    // Membership gates proposal creation
    let membership = client.membership_balance().await?;
    if !can_participate(membership) {
        return Err(CliError::NotAMember.into());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message("Submitting transaction and awaiting confirmation...");

    let mut submitter = Submitter::new(config.confirm_timeout_secs);
    let result = submitter
        .submit(client.create_proposal(U256::from(token_id)))
        .await;
    spinner.finish_and_clear();

    match result {
        Ok(receipt) => {
            println!("{}", "✅ Proposal created successfully!".bright_green());
            println!();
            println!("  Transaction: {:?}", receipt.transaction_hash);
        }
        Err(e) => {
            println!("{}", "❌ Proposal creation failed".bright_red());
            println!("  Error: {}", e);
            println!();
            println!("{}", "Troubleshooting:".bright_yellow());
            println!("  • Ensure your wallet has ETH for gas");
            println!("  • Check the DAO treasury can afford the NFT");
            println!("  • Verify the configured contract addresses");
            return Err(e.into());
        }
    }

    Ok(())
}
