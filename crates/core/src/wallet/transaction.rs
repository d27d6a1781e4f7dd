//! Wallet ledger entry.

use chrono::{DateTime, Utc};
use payvault_shared::types::{Money, OwnerId, WalletTransactionId};
use serde::{Deserialize, Serialize};

use super::payment::Payment;
use super::status::{TransactionStatus, TransactionType};
use super::withdrawal::Withdrawal;

/// Immutable record of one balance-affecting event.
///
/// Exactly one ledger entry is created per processed request. The entry
/// snapshots the pre-mutation total balance and mirrors the status of the
/// request that produced it. Once persisted it is never modified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletTransaction {
    /// Unique identifier for this ledger entry.
    pub id: WalletTransactionId,
    /// The wallet owner this entry belongs to.
    pub owner_id: OwnerId,
    /// Display name of the actor that created the originating request.
    pub created_by: String,
    /// Whether this entry records a credit or a debit.
    pub transaction_type: TransactionType,
    /// Provider reference shared with the originating request.
    pub transaction_reference: String,
    /// Funding source or destination carried over from the request.
    pub source: String,
    /// Platform carried over from the request.
    pub platform: String,
    /// Total balance before the mutation.
    pub opening_balance: Money,
    /// Amount moved by the event.
    pub amount: Money,
    /// Mirrors the originating request's status.
    pub status: TransactionStatus,
    /// Audit text: actor, reference, and timestamps.
    pub comments: Option<String>,
    /// When the ledger entry was created.
    pub created_at: DateTime<Utc>,
}

impl WalletTransaction {
    /// Builds the ledger entry for a payment about to be credited.
    #[must_use]
    pub fn for_payment(payment: &Payment, opening_balance: Money) -> Self {
        Self {
            id: WalletTransactionId::new(),
            owner_id: payment.owner_id,
            created_by: payment.created_by.clone(),
            transaction_type: TransactionType::Payment,
            transaction_reference: payment.transaction_reference.clone(),
            source: payment.source.clone(),
            platform: payment.platform.clone(),
            opening_balance,
            amount: payment.amount,
            status: payment.status,
            comments: None,
            created_at: Utc::now(),
        }
    }

    /// Builds the ledger entry for a withdrawal being processed.
    #[must_use]
    pub fn for_withdrawal(withdrawal: &Withdrawal, opening_balance: Money) -> Self {
        Self {
            id: WalletTransactionId::new(),
            owner_id: withdrawal.owner_id,
            created_by: withdrawal.created_by.clone(),
            transaction_type: TransactionType::Withdrawal,
            transaction_reference: withdrawal.transaction_reference.clone(),
            source: withdrawal.source.clone(),
            platform: withdrawal.platform.clone(),
            opening_balance,
            amount: withdrawal.amount,
            status: withdrawal.status,
            comments: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_for_payment_copies_request_fields() {
        let payment = Payment::new(
            OwnerId::new(),
            "gateway",
            Money::new(dec!(250)),
            "ref-42",
            "card",
            "web",
        );
        let entry = WalletTransaction::for_payment(&payment, Money::new(dec!(1000)));

        assert_eq!(entry.owner_id, payment.owner_id);
        assert_eq!(entry.transaction_type, TransactionType::Payment);
        assert_eq!(entry.transaction_reference, "ref-42");
        assert_eq!(entry.opening_balance, Money::new(dec!(1000)));
        assert_eq!(entry.amount, Money::new(dec!(250)));
        assert_eq!(entry.status, payment.status);
    }

    #[test]
    fn test_for_withdrawal_copies_request_fields() {
        let withdrawal = Withdrawal::new(
            OwnerId::new(),
            "owner",
            Money::new(dec!(75)),
            "ref-77",
            "bank",
            "mobile",
        );
        let entry = WalletTransaction::for_withdrawal(&withdrawal, Money::new(dec!(500)));

        assert_eq!(entry.transaction_type, TransactionType::Withdrawal);
        assert_eq!(entry.transaction_reference, "ref-77");
        assert_eq!(entry.opening_balance, Money::new(dec!(500)));
        assert_eq!(entry.amount, Money::new(dec!(75)));
    }
}
