//! Withdrawal request record.

use chrono::{DateTime, Utc};
use payvault_shared::types::{Money, OwnerId, WithdrawalId};
use serde::{Deserialize, Serialize};

use super::error::WalletError;
use super::status::TransactionStatus;

/// An outbound debit moving through the withdrawal state machine.
///
/// Created at `Initiated`; `Wallet::process_withdrawal` escrows the amount
/// out of the available balance and routes the request to `Processing`
/// (below the automatic threshold) or `Pending` (admin approval required).
/// `Success` is the only terminal state, reached at settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Withdrawal {
    /// Unique identifier for this withdrawal.
    pub id: WithdrawalId,
    /// The wallet owner being debited.
    pub owner_id: OwnerId,
    /// Display name of the actor that created the withdrawal.
    pub created_by: String,
    /// Amount to withdraw.
    pub amount: Money,
    /// Current lifecycle status.
    pub status: TransactionStatus,
    /// Provider reference tying this withdrawal to an external transaction.
    pub transaction_reference: String,
    /// Destination (e.g., bank account rail).
    pub source: String,
    /// Platform the withdrawal originated from.
    pub platform: String,
    /// Total balance snapshot taken when the withdrawal is processed.
    pub opening_balance: Money,
    /// Full name of the admin that approved the withdrawal, if any.
    pub approved_by: Option<String>,
    /// Audit text describing how the withdrawal was handled.
    pub comments: Option<String>,
    /// When the withdrawal was created.
    pub created_at: DateTime<Utc>,
}

impl Withdrawal {
    /// Creates a new withdrawal in the `Initiated` entry state.
    #[must_use]
    pub fn new(
        owner_id: OwnerId,
        created_by: impl Into<String>,
        amount: Money,
        transaction_reference: impl Into<String>,
        source: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            id: WithdrawalId::new(),
            owner_id,
            created_by: created_by.into(),
            amount,
            status: TransactionStatus::Initiated,
            transaction_reference: transaction_reference.into(),
            source: source.into(),
            platform: platform.into(),
            opening_balance: Money::ZERO,
            approved_by: None,
            comments: None,
            created_at: Utc::now(),
        }
    }

    /// Advances the withdrawal to the next state, consulting the
    /// transition table.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidTransition` when the move is not part
    /// of the state machine.
    pub(crate) fn advance(&mut self, to: TransactionStatus) -> Result<(), WalletError> {
        if !TransactionStatus::is_valid_transition(self.status, to) {
            return Err(WalletError::InvalidTransition {
                from: self.status,
                to,
            });
        }

        self.status = to;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_withdrawal_is_initiated() {
        let withdrawal = Withdrawal::new(
            OwnerId::new(),
            "owner",
            Money::new(dec!(100)),
            "ref-100",
            "bank",
            "mobile",
        );

        assert_eq!(withdrawal.status, TransactionStatus::Initiated);
        assert_eq!(withdrawal.approved_by, None);
        assert_eq!(withdrawal.opening_balance, Money::ZERO);
    }

    #[test]
    fn test_advance_follows_state_machine() {
        let mut withdrawal = Withdrawal::new(
            OwnerId::new(),
            "owner",
            Money::new(dec!(100)),
            "ref-101",
            "bank",
            "mobile",
        );

        withdrawal.advance(TransactionStatus::Pending).unwrap();
        withdrawal.advance(TransactionStatus::Processing).unwrap();
        withdrawal.advance(TransactionStatus::Success).unwrap();
        assert_eq!(withdrawal.status, TransactionStatus::Success);
    }

    #[test]
    fn test_advance_rejects_invalid_move() {
        let mut withdrawal = Withdrawal::new(
            OwnerId::new(),
            "owner",
            Money::new(dec!(100)),
            "ref-102",
            "bank",
            "mobile",
        );

        let result = withdrawal.advance(TransactionStatus::Success);

        assert!(matches!(
            result,
            Err(WalletError::InvalidTransition { .. })
        ));
        assert_eq!(withdrawal.status, TransactionStatus::Initiated);
    }
}
