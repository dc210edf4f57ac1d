use crate::contracts::DaoMiddleware;
use crate::errors::CliError;
use ethers::{
    abi::Detokenize,
    contract::{ContractCall, ContractError},
    core::types::{TransactionReceipt, U64},
    providers::Middleware,
};
use std::time::Duration;

/// Lifecycle of a single submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxPhase {
    Idle,
    Submitting,
    AwaitingConfirmation,
    Confirmed,
    Failed,
}

/// Drives write transactions through
/// Idle -> Submitting -> AwaitingConfirmation -> {Confirmed, Failed}.
///
/// One submitter per session; the in-flight flag refuses a second write
/// while one is pending. Confirmation is awaited exactly once and the
/// wait is bounded rather than indefinite.
pub struct Submitter {
    phase: TxPhase,
    confirm_timeout: Duration,
}

impl Submitter {
    pub fn new(confirm_timeout_secs: u64) -> Self {
        Self {
            phase: TxPhase::Idle,
            confirm_timeout: Duration::from_secs(confirm_timeout_secs),
        }
    }

    pub fn phase(&self) -> TxPhase {
        self.phase
    }

    /// A write is pending and no further writes may start
    pub fn in_flight(&self) -> bool {
        matches!(self.phase, TxPhase::Submitting | TxPhase::AwaitingConfirmation)
    }

    /// Submit a contract call and wait for its receipt. Inclusion with a
    /// non-success status is a failure, not a confirmation.
    pub async fn submit<D: Detokenize>(
        &mut self,
        call: ContractCall<DaoMiddleware, D>,
    ) -> Result<TransactionReceipt, CliError> {
        self.begin()?;
        let result = self.drive(call).await;
        self.settle(result.is_ok());
        result
    }

    fn begin(&mut self) -> Result<(), CliError> {
        if self.in_flight() {
            return Err(CliError::TransactionInFlight);
        }
        self.phase = TxPhase::Submitting;
        Ok(())
    }

    fn settle(&mut self, confirmed: bool) {
        self.phase = if confirmed { TxPhase::Confirmed } else { TxPhase::Failed };
    }

    async fn drive<D: Detokenize>(
        &mut self,
        call: ContractCall<DaoMiddleware, D>,
    ) -> Result<TransactionReceipt, CliError> {
        let pending = call.send().await.map_err(classify_send_error)?;
        self.phase = TxPhase::AwaitingConfirmation;

        let receipt = match tokio::time::timeout(self.confirm_timeout, pending).await {
            Err(_) => return Err(CliError::ConfirmationTimeout(self.confirm_timeout.as_secs())),
            Ok(Err(e)) => return Err(CliError::Network(e.to_string())),
            Ok(Ok(None)) => {
                return Err(CliError::TransactionRejected(
                    "transaction dropped from the mempool".to_string(),
                ))
            }
            Ok(Ok(Some(receipt))) => receipt,
        };

        check_receipt(receipt)
    }
}

/// Inclusion is not success: a receipt with a non-1 status exit code is
/// a reverted transaction
pub fn check_receipt(receipt: TransactionReceipt) -> Result<TransactionReceipt, CliError> {
    match receipt.status {
        Some(status) if status == U64::from(1) => Ok(receipt),
        _ => Err(CliError::TransactionReverted(format!(
            "transaction {:?} was included but failed",
            receipt.transaction_hash
        ))),
    }
}

/// Sort a submission error into the taxonomy: revert data means the
/// chain refused execution, a signer/user refusal is a rejection, and
/// anything else is a transport problem
pub fn classify_send_error<M: Middleware>(err: ContractError<M>) -> CliError {
    if err.as_revert().is_some() {
        let reason = err
            .decode_revert::<String>()
            .unwrap_or_else(|| "execution reverted".to_string());
        return CliError::TransactionReverted(reason);
    }

    let msg = err.to_string();
    let lower = msg.to_lowercase();
    if lower.contains("rejected") || lower.contains("denied") {
        CliError::TransactionRejected(msg)
    } else {
        CliError::Network(msg)
    }
}
