use crate::contracts::{self, format_address};
use crate::errors::CliError;
use crate::proposals::{can_participate, parse_proposal};
use crate::submitter::Submitter;
use anyhow::Result;
use colored::Colorize;
use indicatif::ProgressBar;
use std::time::Duration;

/// Wire encoding of the contract's vote enum: 0 = yay, 1 = nay
pub fn parse_choice(choice: &str) -> Result<u8, CliError> {
    match choice.to_lowercase().as_str() {
        "yay" | "yes" => Ok(0),
        "nay" | "no" => Ok(1),
        other => Err(CliError::InvalidChoice(other.to_string())),
    }
}

/// Execute vote command
pub async fn execute(proposal_id: u64, choice: &str) -> Result<()> {
    // Validate the choice before touching wallet or network
    let vote = parse_choice(choice)?;
    let label = if vote == 0 { "YAY" } else { "NAY" };

    let (config, client) = contracts::connect()?;

    println!("{}", "Casting vote...".bright_cyan());
    println!("  Member:    {}", format_address(client.caller()).bright_yellow());
    println!("  Proposal:  {}", proposal_id.to_string().bright_white());
    println!("  Vote:      {}", label.bright_white());
    println!();

    // Membership gates voting
    let membership = client.membership_balance().await?;
    if !can_participate(membership) {
        return Err(CliError::NotAMember.into());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message("Submitting transaction and awaiting confirmation...");

    let mut submitter = Submitter::new(config.confirm_timeout_secs);
    let result = submitter
        .submit(client.vote_on_proposal(proposal_id, vote))
        .await;
    spinner.finish_and_clear();

    match result {
        Ok(receipt) => {
            println!("{}", format!("✅ Vote {} cast successfully!", label).bright_green());
            println!();
            println!("  Transaction: {:?}", receipt.transaction_hash);

            // Re-fetch the proposal so the member sees the new tally
            match client.fetch_proposal(proposal_id).await {
                Ok(raw) => {
                    let proposal = parse_proposal(proposal_id, raw);
                    println!();
                    println!("  Yay Votes: {}", proposal.yay_votes.to_string().bright_green());
                    println!("  Nay Votes: {}", proposal.nay_votes.to_string().bright_red());
                }
                Err(e) => {
                    println!("  {}", format!("⚠ Could not re-fetch proposal: {}", e).yellow());
                }
            }
        }
        Err(e) => {
            println!("{}", "❌ Vote failed".bright_red());
            println!("  Error: {}", e);
            println!();
            println!("{}", "Troubleshooting:".bright_yellow());
            println!("  • Ensure the voting deadline has not passed");
            println!("  • Check you have not already voted on this proposal");
            println!("  • Ensure your wallet has ETH for gas");
            return Err(e.into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_yay_is_zero() {
        assert_eq!(parse_choice("yay").unwrap(), 0);
        assert_eq!(parse_choice("YAY").unwrap(), 0);
        assert_eq!(parse_choice("yes").unwrap(), 0);
    }

    #[test]
    fn test_parse_choice_nay_is_one() {
        assert_eq!(parse_choice("nay").unwrap(), 1);
        assert_eq!(parse_choice("Nay").unwrap(), 1);
        assert_eq!(parse_choice("no").unwrap(), 1);
    }

    #[test]
    fn test_parse_choice_invalid() {
        let err = parse_choice("maybe").unwrap_err();
        assert!(matches!(err, CliError::InvalidChoice(_)));
        assert!(err.to_string().contains("maybe"));
    }
}
