use crate::config::Config;
use crate::errors::CliError;
use crate::wallet;
use anyhow::Result;
use ethers::{
    contract::{abigen, ContractCall, ContractError},
    core::types::{Address, U256},
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use std::str::FromStr;
use std::sync::Arc;

pub type DaoMiddleware = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Raw proposal tuple as stored by the DAO contract:
/// (nftTokenId, deadline, yayVotes, nayVotes, executed)
pub type RawProposal = (U256, U256, U256, U256, bool);

abigen!(
    MembershipDao,
    r#"[
        function owner() external view returns (address)
        function numProposals() external view returns (uint256)
        function proposals(uint256 index) external view returns (uint256, uint256, uint256, uint256, bool)
        function createProposal(uint256 nftTokenId) external returns (uint256)
        function VoteOnProposal(uint256 proposalIndex, uint8 vote) external
        function executeProposal(uint256 proposalIndex) external
        function withdrawEther() external
    ]"#
);

abigen!(
    MembershipNft,
    r#"[
        function balanceOf(address owner) external view returns (uint256)
    ]"#
);

/// Signing client bound to the configured DAO and membership-NFT contracts
#[derive(Debug)]
pub struct DaoClient {
    middleware: Arc<DaoMiddleware>,
    dao: MembershipDao<DaoMiddleware>,
    nft: MembershipNft<DaoMiddleware>,
    dao_address: Address,
    caller: Address,
}

/// Parse a checksummed or lowercase hex address
pub fn parse_address(s: &str, what: &str) -> Result<Address, CliError> {
    Address::from_str(s).map_err(|e| CliError::InvalidAddress(what.to_string(), e.to_string()))
}

/// Full 0x-prefixed lowercase hex rendering of an address
pub fn format_address(addr: Address) -> String {
    format!("{:?}", addr)
}

/// Connect using the saved wallet and configuration
pub fn connect() -> Result<(Config, DaoClient)> {
    let config = Config::load()?;
    let signer = wallet::load_wallet()?;
    let client = DaoClient::new(&config, signer)?;
    Ok((config, client))
}

impl DaoClient {
    pub fn new(config: &Config, signer: LocalWallet) -> Result<Self> {
        let dao_address = parse_address(
            config.dao_address.as_deref().ok_or(CliError::ContractsNotConfigured)?,
            "DAO contract",
        )?;
        let nft_address = parse_address(
            config.nft_address.as_deref().ok_or(CliError::ContractsNotConfigured)?,
            "NFT contract",
        )?;

        let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
            .map_err(|e| CliError::ConfigError(format!("Invalid RPC URL: {}", e)))?;
        let signer = signer.with_chain_id(config.chain_id);
        let caller = signer.address();
        let middleware = Arc::new(SignerMiddleware::new(provider, signer));

        Ok(Self {
            dao: MembershipDao::new(dao_address, middleware.clone()),
            nft: MembershipNft::new(nft_address, middleware.clone()),
            middleware,
            dao_address,
            caller,
        })
    }

    /// Address of the loaded wallet
    pub fn caller(&self) -> Address {
        self.caller
    }

    // --- reads ---

    pub async fn dao_owner(&self) -> Result<Address, CliError> {
        self.dao.owner().call().await.map_err(read_error)
    }

    /// Native balance held by the DAO contract, in wei
    pub async fn treasury_balance(&self) -> Result<U256, CliError> {
        self.middleware
            .get_balance(self.dao_address, None)
            .await
            .map_err(|e| CliError::Network(e.to_string()))
    }

    pub async fn num_proposals(&self) -> Result<u64, CliError> {
        let count = self.dao.num_proposals().call().await.map_err(read_error)?;
        Ok(count.low_u64())
    }

    /// Membership-NFT balance of the loaded wallet
    pub async fn membership_balance(&self) -> Result<U256, CliError> {
        self.nft.balance_of(self.caller).call().await.map_err(read_error)
    }

    pub async fn fetch_proposal(&self, id: u64) -> Result<RawProposal, CliError> {
        self.dao
            .proposals(U256::from(id))
            .call()
            .await
            .map_err(read_error)
    }

    // --- write call builders; driven to completion by the Submitter ---

    pub fn create_proposal(&self, nft_token_id: U256) -> ContractCall<DaoMiddleware, U256> {
        self.dao.create_proposal(nft_token_id)
    }

    /// vote: 0 = yay, 1 = nay (contract enum ordering)
    pub fn vote_on_proposal(&self, proposal_id: u64, vote: u8) -> ContractCall<DaoMiddleware, ()> {
        self.dao.vote_on_proposal(U256::from(proposal_id), vote)
    }

    pub fn execute_proposal(&self, proposal_id: u64) -> ContractCall<DaoMiddleware, ()> {
        self.dao.execute_proposal(U256::from(proposal_id))
    }

    pub fn withdraw_ether(&self) -> ContractCall<DaoMiddleware, ()> {
        self.dao.withdraw_ether()
    }
}

/// Map read-path contract errors onto the error taxonomy: provider
/// transport failures are network errors, everything else is a bad read
fn read_error<M: Middleware>(err: ContractError<M>) -> CliError {
    let transport = matches!(
        err,
        ContractError::MiddlewareError { .. } | ContractError::ProviderError { .. }
    );
    if transport {
        CliError::Network(err.to_string())
    } else {
        CliError::RemoteRead(err.to_string())
    }
}
