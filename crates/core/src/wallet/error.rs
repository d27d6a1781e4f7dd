//! Wallet error types.
//!
//! This module defines all error types that can occur during wallet
//! operations: invariant guards, ownership checks, state machine
//! violations, and authorization failures.

use payvault_shared::error::AppError;
use payvault_shared::types::Money;
use thiserror::Error;

use super::status::TransactionStatus;

/// Errors that can occur during wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Balance setter invariant: total must cover available.
    #[error("invalid operation: total balance {total} cannot be less than available balance {available}")]
    TotalBelowAvailable {
        /// The rejected total balance.
        total: Money,
        /// The current available balance.
        available: Money,
    },

    /// Balance setter invariant: available must not exceed total.
    #[error("invalid operation: available balance {available} cannot be greater than total balance {total}")]
    AvailableAboveTotal {
        /// The rejected available balance.
        available: Money,
        /// The current total balance.
        total: Money,
    },

    /// Balance arithmetic overflowed the decimal range.
    #[error("balance arithmetic overflow")]
    AmountOverflow,

    /// Withdrawal status move not present in the state machine table.
    #[error("invalid withdrawal status transition from {from} to {to}")]
    InvalidTransition {
        /// Current status.
        from: TransactionStatus,
        /// Requested status.
        to: TransactionStatus,
    },

    /// Request targets a wallet the requester does not own.
    #[error("transaction cannot be processed for another user")]
    OwnershipViolation,

    /// Payment failed or was rejected during upstream confirmation.
    #[error("payment cannot be processed because it failed during confirmation")]
    PaymentAlreadyFailed,

    /// Payment has already been credited.
    #[error("payment has already been processed")]
    PaymentAlreadyProcessed,

    /// Withdrawal is past the `Initiated` entry state.
    #[error("withdrawal has already been processed, please requery the transaction")]
    WithdrawalAlreadyProcessed,

    /// Escrow debit would drive the available balance negative.
    #[error("insufficient funds to withdraw {requested}, available balance is {available}")]
    InsufficientFunds {
        /// The requested withdrawal amount.
        requested: Money,
        /// The available balance before the debit.
        available: Money,
    },

    /// Authorization profile is missing a full name.
    #[error("incomplete authorization information")]
    IncompleteAuthorization,

    /// Approval requires the super admin capability.
    #[error("withdrawal approval requires a super admin")]
    RequiresSuperAdmin,

    /// Approval attempted on a withdrawal that is not pending.
    #[error("withdrawal does not require an admin approval to be processed")]
    ApprovalNotRequired,

    /// Settlement attempted before the withdrawal was authorized.
    #[error("withdrawal has not been authorized for processing")]
    NotAuthorizedForProcessing,

    /// The withdrawal and ledger entry reference different transactions.
    #[error(
        "withdrawal cannot be completed for two different transaction histories: {withdrawal_reference} vs {transaction_reference}"
    )]
    ReferenceMismatch {
        /// Reference carried by the withdrawal.
        withdrawal_reference: String,
        /// Reference carried by the ledger entry.
        transaction_reference: String,
    },
}

impl WalletError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::PaymentAlreadyFailed | Self::ApprovalNotRequired => 400,

            Self::IncompleteAuthorization
            | Self::RequiresSuperAdmin
            | Self::NotAuthorizedForProcessing => 401,

            Self::WithdrawalAlreadyProcessed => 403,

            Self::InsufficientFunds { .. } => 406,

            Self::PaymentAlreadyProcessed => 409,

            Self::OwnershipViolation => 451,

            Self::TotalBelowAvailable { .. }
            | Self::AvailableAboveTotal { .. }
            | Self::AmountOverflow
            | Self::InvalidTransition { .. }
            | Self::ReferenceMismatch { .. } => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::TotalBelowAvailable { .. } | Self::AvailableAboveTotal { .. } => {
                "INVALID_OPERATION"
            }
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::OwnershipViolation => "OWNERSHIP_VIOLATION",
            Self::PaymentAlreadyFailed => "PAYMENT_ALREADY_FAILED",
            Self::PaymentAlreadyProcessed => "PAYMENT_ALREADY_PROCESSED",
            Self::WithdrawalAlreadyProcessed => "WITHDRAWAL_ALREADY_PROCESSED",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::IncompleteAuthorization => "INCOMPLETE_AUTHORIZATION",
            Self::RequiresSuperAdmin => "REQUIRES_SUPER_ADMIN",
            Self::ApprovalNotRequired => "APPROVAL_NOT_REQUIRED",
            Self::NotAuthorizedForProcessing => "NOT_AUTHORIZED_FOR_PROCESSING",
            Self::ReferenceMismatch { .. } => "REFERENCE_MISMATCH",
        }
    }
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        let message = err.to_string();
        match err.status_code() {
            400 => Self::Validation(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            406 => Self::NotAcceptable(message),
            409 => Self::Conflict(message),
            451 => Self::OwnershipRestricted(message),
            _ => Self::Internal(message),
        }
    }
}
