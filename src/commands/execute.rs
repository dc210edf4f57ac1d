use crate::contracts::{self, format_address};
use crate::proposals::parse_proposal;
use crate::submitter::Submitter;
use anyhow::Result;
use colored::Colorize;
use indicatif::ProgressBar;
use std::time::Duration;

/// Execute a proposal whose deadline has passed. The contract enforces
/// the deadline and the not-already-executed precondition; a premature
/// or duplicate call fails remotely.
pub async fn execute(proposal_id: u64) -> Result<()> {
    let (config, client) = contracts::connect()?;

    println!("{}", "Executing proposal...".bright_cyan());
    println!("  Member:    {}", format_address(client.caller()).bright_yellow());
    println!("  Proposal:  {}", proposal_id.to_string().bright_white());
    println!();

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message("Submitting transaction and awaiting confirmation...");

    let mut submitter = Submitter::new(config.confirm_timeout_secs);
    let result = submitter.submit(client.execute_proposal(proposal_id)).await;
    spinner.finish_and_clear();

    match result {
        Ok(receipt) => {
            println!("{}", "✅ Proposal executed successfully!".bright_green());
            println!();
            println!("  Transaction: {:?}", receipt.transaction_hash);

            // Re-fetch so the member sees the final state
            match client.fetch_proposal(proposal_id).await {
                Ok(raw) => {
                    let proposal = parse_proposal(proposal_id, raw);
                    println!();
                    println!("  Yay Votes: {}", proposal.yay_votes.to_string().bright_green());
                    println!("  Nay Votes: {}", proposal.nay_votes.to_string().bright_red());
                    println!("  Executed:  {}", proposal.executed.to_string().bright_white());
                }
                Err(e) => {
                    println!("  {}", format!("⚠ Could not re-fetch proposal: {}", e).yellow());
                }
            }
        }
        Err(e) => {
            println!("{}", "❌ Proposal execution failed".bright_red());
            println!("  Error: {}", e);
            println!();
            println!("{}", "Troubleshooting:".bright_yellow());
            println!("  • Ensure the voting deadline has passed");
            println!("  • Check the proposal has not already been executed");
            println!("  • Ensure your wallet has ETH for gas");
            return Err(e.into());
        }
    }

    Ok(())
}
