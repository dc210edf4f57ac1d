use super::format_eth;
use crate::contracts::{self, format_address};
use crate::proposals::can_participate;
use anyhow::Result;
use colored::Colorize;

/// Execute status check
pub async fn execute() -> Result<()> {
    let (_config, client) = contracts::connect()?;

    println!("{}", "═══════════════════════════════════════════════════".bright_cyan());
    println!("{}", "        Membership DAO Status".bright_cyan().bold());
    println!("{}", "═══════════════════════════════════════════════════".bright_cyan());
    println!();
    println!("  Wallet: {}", format_address(client.caller()).bright_yellow());
    println!();

    println!("{}", "Fetching DAO state...".dimmed());
    println!();

    let owner = client.dao_owner().await?;
    let treasury = client.treasury_balance().await?;
    let num_proposals = client.num_proposals().await?;
    let membership = client.membership_balance().await?;

    println!("{}", "═══ DAO ═══".bright_cyan());
    println!("  Owner:      {}", format_address(owner).bright_white());
    println!("  Treasury:   {} ETH", format_eth(treasury).bright_green());
    println!("  Proposals:  {}", num_proposals.to_string().bright_white());

    println!();
    println!("{}", "═══ Membership ═══".bright_cyan());
    println!("  NFT Balance: {}", membership.to_string().bright_yellow());

    if can_participate(membership) {
        println!("  {}", "You can create and vote on proposals".green());
    } else {
        println!("  {}", "You hold no membership NFTs".yellow());
        println!("  {}", "You cannot create or vote on proposals".dimmed());
    }

    if client.caller() == owner {
        println!();
        println!("  {} {}", "→".bright_green(), "You are the DAO owner. 'dao-cli withdraw' is available".bright_green());
    }

    println!();
    println!("{}", "═══════════════════════════════════════════════════".bright_cyan());
    println!();

    Ok(())
}
