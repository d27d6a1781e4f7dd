//! Payment request record.

use chrono::{DateTime, Utc};
use payvault_shared::types::{Money, OwnerId, PaymentId};
use serde::{Deserialize, Serialize};

use super::status::TransactionStatus;

/// An inbound credit awaiting processing by the wallet.
///
/// Payments are created by the payments gateway in a non-terminal state
/// and mutated only by `Wallet::process_payment`, which moves them to
/// `Success`. `Failed` and `Rejected` are set upstream when confirmation
/// fails and make the payment permanently unprocessable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier for this payment.
    pub id: PaymentId,
    /// The wallet owner being credited.
    pub owner_id: OwnerId,
    /// Display name of the actor that created the payment.
    pub created_by: String,
    /// Amount to credit.
    pub amount: Money,
    /// Current lifecycle status.
    pub status: TransactionStatus,
    /// Provider reference tying this payment to an external transaction.
    pub transaction_reference: String,
    /// Funding source (e.g., card, bank transfer).
    pub source: String,
    /// Platform the payment originated from.
    pub platform: String,
    /// Total balance snapshot taken when the payment is processed.
    pub opening_balance: Option<Money>,
    /// Audit text describing how the payment was handled.
    pub comments: Option<String>,
    /// When the payment was created.
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a new payment awaiting wallet processing.
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
            id: PaymentId::new(),
            owner_id,
            created_by: created_by.into(),
            amount,
            status: TransactionStatus::Pending,
            transaction_reference: transaction_reference.into(),
            source: source.into(),
            platform: platform.into(),
            opening_balance: None,
            comments: None,
            created_at: Utc::now(),
        }
    }
}
