use crate::contracts::RawProposal;
use crate::errors::CliError;
use chrono::{DateTime, Utc};
use ethers::core::types::U256;
use std::future::Future;

/// A DAO proposal as presented to the member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub id: u64,
    pub nft_token_id: U256,
    pub deadline: DateTime<Utc>,
    pub yay_votes: u64,
    pub nay_votes: u64,
    pub executed: bool,
}

/// Action currently available on a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalAction {
    /// Voting is open: deadline in the future, not yet executed
    Vote,
    /// Deadline passed, not yet executed; `passing` is yay > nay
    Execute { passing: bool },
    /// Executed proposals accept no further actions
    None,
}

/// Field-by-field conversion of the contract tuple. Deterministic and
/// pure; contract output is trusted, so no validation beyond coercion.
pub fn parse_proposal(id: u64, raw: RawProposal) -> Proposal {
    let (nft_token_id, deadline, yay_votes, nay_votes, executed) = raw;

    Proposal {
        id,
        nft_token_id,
        deadline: DateTime::from_timestamp(deadline.low_u64() as i64, 0)
            .unwrap_or_else(Utc::now),
        yay_votes: yay_votes.low_u64(),
        nay_votes: nay_votes.low_u64(),
        executed,
    }
}

/// Fetch proposals 0..count-1 in ascending id order, matching on-chain
/// insertion order. Sequential on purpose: proposal counts are small.
/// A failure partway aborts with no partial result.
pub async fn fetch_all<F, Fut>(count: u64, mut fetch: F) -> Result<Vec<Proposal>, CliError>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<RawProposal, CliError>>,
{
    let mut proposals = Vec::with_capacity(count as usize);
    for id in 0..count {
        let raw = fetch(id).await?;
        proposals.push(parse_proposal(id, raw));
    }
    Ok(proposals)
}

/// Which action the member may take on a proposal right now
pub fn available_action(proposal: &Proposal, now: DateTime<Utc>) -> ProposalAction {
    if proposal.executed {
        ProposalAction::None
    } else if proposal.deadline > now {
        ProposalAction::Vote
    } else {
        ProposalAction::Execute {
            passing: proposal.yay_votes > proposal.nay_votes,
        }
    }
}

/// Membership gate for create/vote: at least one membership NFT
pub fn can_participate(membership_balance: U256) -> bool {
    !membership_balance.is_zero()
}
