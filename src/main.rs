mod commands;
mod config;
mod contracts;
mod errors;
mod proposals;
mod submitter;
mod wallet;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "dao-cli")]
#[command(version = "0.1.0")]
#[command(about = "CLI for membership-NFT DAO members", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show DAO state: owner, treasury, proposal count, your membership
    Status,

    /// List all proposals with the actions available on each
    Proposals,

    /// Create a proposal to purchase an NFT
    CreateProposal {
        /// Token ID of the NFT to purchase
        #[arg(long)]
        token_id: u64,
    },

    /// Vote on an open proposal
    Vote {
        /// Proposal ID to vote on
        #[arg(long)]
        proposal_id: u64,

        /// Vote choice: yay or nay
        #[arg(long)]
        choice: String,
    },

    /// Execute a proposal after its deadline has passed
    Execute {
        /// Proposal ID to execute
        #[arg(long)]
        proposal_id: u64,
    },

    /// Withdraw the DAO treasury (owner only)
    Withdraw,

    /// Wallet management commands
    Wallet {
        #[command(subcommand)]
        action: WalletCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum WalletCommands {
    /// Create a new wallet
    Create,

    /// Import wallet from a private key
    Import {
        /// Hex private key, with or without 0x prefix
        #[arg(long)]
        private_key: String,
    },

    /// Show wallet address
    Address,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set the JSON-RPC endpoint (and optionally the chain id)
    SetRpc {
        /// RPC URL
        url: String,

        /// Chain ID for transaction signing
        #[arg(long)]
        chain_id: Option<u64>,
    },

    /// Set the DAO and membership-NFT contract addresses
    SetContracts {
        /// DAO contract address
        #[arg(long)]
        dao: String,

        /// Membership NFT contract address
        #[arg(long)]
        nft: String,
    },

    /// Show current configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "╔════════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║      dao-cli - Membership DAO Client       ║".bright_cyan());
    println!("{}", "╚════════════════════════════════════════════╝".bright_cyan());
    println!();

    let cli = Cli::parse();

    match cli.command {
        Commands::Status => {
            commands::status::execute().await?;
        }
        Commands::Proposals => {
            commands::proposals::execute().await?;
        }
        Commands::CreateProposal { token_id } => {
            commands::create_proposal::execute(token_id).await?;
        }
        Commands::Vote { proposal_id, choice } => {
            commands::vote::execute(proposal_id, &choice).await?;
        }
        Commands::Execute { proposal_id } => {
            commands::execute::execute(proposal_id).await?;
        }
        Commands::Withdraw => {
            commands::withdraw::execute().await?;
        }
        Commands::Wallet { action } => match action {
            WalletCommands::Create => wallet::create().await?,
            WalletCommands::Import { private_key } => wallet::import(&private_key).await?,
            WalletCommands::Address => wallet::show_address().await?,
        },
        Commands::Config { action } => match action {
            ConfigCommands::SetRpc { url, chain_id } => config::set_rpc(&url, chain_id)?,
            ConfigCommands::SetContracts { dao, nft } => config::set_contracts(&dao, &nft)?,
            ConfigCommands::Show => config::show()?,
        },
    }

    Ok(())
}
