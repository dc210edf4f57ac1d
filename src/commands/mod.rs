pub mod create_proposal;
pub mod execute;
pub mod proposals;
pub mod status;
pub mod vote;
pub mod withdraw;

use ethers::core::types::U256;
use ethers::utils::format_ether;

/// Render a wei amount as ETH without trailing zeros
pub fn format_eth(wei: U256) -> String {
    let s = format_ether(wei);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
