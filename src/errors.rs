use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Wallet not found. Run 'dao-cli wallet create' first")]
    WalletNotFound,

    #[error("DAO contract addresses not set. Run 'dao-cli config set-contracts' first")]
    ContractsNotConfigured,

    #[error("Invalid address for {0}: {1}")]
    InvalidAddress(String, String),

    #[error("Invalid vote choice: {0}. Valid options: yay, nay")]
    InvalidChoice(String),

    #[error("You hold no membership NFTs. You cannot create or vote on proposals")]
    NotAMember,

    #[error("Connected wallet is not the DAO owner. Only the owner can withdraw")]
    NotOwner,

    #[error("Remote read failed: {0}")]
    RemoteRead(String),

    #[error("Transaction rejected before broadcast: {0}")]
    TransactionRejected(String),

    #[error("Transaction reverted on-chain: {0}")]
    TransactionReverted(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("No confirmation after {0} seconds. The transaction may still be pending")]
    ConfirmationTimeout(u64),

    #[error("A transaction is already in flight. Wait for it to confirm or fail")]
    TransactionInFlight,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
