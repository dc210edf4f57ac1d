use crate::contracts;
use crate::proposals::{available_action, fetch_all, Proposal, ProposalAction};
use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;

/// Execute proposal listing
pub async fn execute() -> Result<()> {
    let (_config, client) = contracts::connect()?;

    println!("{}", "Fetching proposals...".dimmed());

    let count = client.num_proposals().await?;
    let proposals = fetch_all(count, |id| client.fetch_proposal(id)).await?;

    println!();
    if proposals.is_empty() {
        println!("{}", "There are currently zero proposals".yellow());
        println!("  {}", "Use 'dao-cli create-proposal' to create one".dimmed());
        return Ok(());
    }

    let now = Utc::now();
    for proposal in &proposals {
        render_proposal(proposal, now);
        println!();
    }

    Ok(())
}

fn render_proposal(proposal: &Proposal, now: DateTime<Utc>) {
    println!("{}", "───────────────────────────────────────────────────".bright_cyan());
    println!("  Proposal ID:      {}", proposal.id.to_string().bright_white());
    println!("  NFT to Purchase:  {}", proposal.nft_token_id.to_string().bright_yellow());
    println!(
        "  Deadline:         {}",
        proposal.deadline.format("%Y-%m-%d %H:%M UTC").to_string().dimmed()
    );
    println!("  Yay Votes:        {}", proposal.yay_votes.to_string().bright_green());
    println!("  Nay Votes:        {}", proposal.nay_votes.to_string().bright_red());
    println!("  Executed:         {}", proposal.executed);
    println!("  {}", action_label(proposal, now));
}

/// One line naming the action currently available on the proposal
fn action_label(proposal: &Proposal, now: DateTime<Utc>) -> String {
    match available_action(proposal, now) {
        ProposalAction::Vote => format!(
            "{} {}",
            "Voting open:".bright_green(),
            format!(
                "Vote YAY / Vote NAY  (dao-cli vote --proposal-id {} --choice yay|nay)",
                proposal.id
            )
        ),
        ProposalAction::Execute { passing } => format!(
            "{} {}",
            "Deadline passed:".yellow(),
            format!(
                "Execute Proposal ({})  (dao-cli execute --proposal-id {})",
                if passing { "YAY" } else { "NAY" },
                proposal.id
            )
        ),
        ProposalAction::None => "Proposal Executed".dimmed().to_string(),
    }
}
