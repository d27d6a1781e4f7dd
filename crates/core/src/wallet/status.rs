//! Transaction status and type for wallet requests and ledger entries.
//!
//! A single status type is shared by payment requests, withdrawal requests,
//! and the ledger entries that mirror them, so a transition is expressed
//! once and applied to both records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a wallet transaction.
///
/// Withdrawals progress through a strict state machine:
/// - Initiated → Processing (below the automatic threshold)
/// - Initiated → Pending (at or above the threshold, awaiting admin approval)
/// - Pending → Processing (admin approval)
/// - Processing → Success (settlement)
///
/// Payments arrive in a non-terminal state and end at Success, or at
/// Failed/Rejected when confirmation fails upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    /// Withdrawal has been created and not yet picked up by the wallet.
    Initiated,
    /// Awaiting admin approval before processing.
    Pending,
    /// Authorized for settlement.
    Processing,
    /// Settled (terminal).
    Success,
    /// Failed during upstream confirmation (terminal).
    Failed,
    /// Rejected during upstream confirmation (terminal).
    Rejected,
}

impl TransactionStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initiated => "INITIATED",
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "INITIATED" => Some(Self::Initiated),
            "PENDING" => Some(Self::Pending),
            "PROCESSING" => Some(Self::Processing),
            "SUCCESS" => Some(Self::Success),
            "FAILED" => Some(Self::Failed),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if the status is terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed | Self::Rejected)
    }

    /// Returns true if upstream confirmation failed.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        matches!(self, Self::Failed | Self::Rejected)
    }

    /// Check if a withdrawal status transition is valid.
    ///
    /// Valid transitions:
    /// - Initiated → Processing | Pending
    /// - Pending → Processing
    /// - Processing → Success
    #[must_use]
    pub fn is_valid_transition(from: Self, to: Self) -> bool {
        matches!(
            (from, to),
            (Self::Initiated, Self::Processing | Self::Pending)
                | (Self::Pending, Self::Processing)
                | (Self::Processing, Self::Success)
        )
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of balance-affecting event recorded in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Credit: funds added to the wallet.
    Payment,
    /// Debit: funds leaving the wallet.
    Withdrawal,
}

impl TransactionType {
    /// Returns the string representation of the type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "PAYMENT",
            Self::Withdrawal => "WITHDRAWAL",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
