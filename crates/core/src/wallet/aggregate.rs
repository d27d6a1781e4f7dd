//! Wallet aggregate: balances, invariants, and the operations that mutate them.
//!
//! Operations are pure, synchronous computations over values the caller has
//! already loaded. Each returns the updated request record and ledger entry
//! for the caller to persist under a single transaction; on error the wallet
//! is observably unchanged. Concurrency control lives at the storage
//! boundary via the `version` field.

use chrono::Utc;
use payvault_shared::types::{Money, OwnerId, WalletId};
use serde::{Deserialize, Serialize};

use crate::auth::AuthProfile;

use super::error::WalletError;
use super::payment::Payment;
use super::status::TransactionStatus;
use super::transaction::WalletTransaction;
use super::withdrawal::Withdrawal;

/// A party's wallet: total and available balance plus the concurrency hook.
///
/// Invariant: `available_balance <= total_balance` after every successful
/// operation. Balance fields are private; the setter guards are the only
/// mutation path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    id: WalletId,
    owner_id: OwnerId,
    total_balance: Money,
    available_balance: Money,
    version: i64,
}

impl Wallet {
    /// Creates a new empty wallet for an owner.
    #[must_use]
    pub fn new(owner_id: OwnerId) -> Self {
        Self {
            id: WalletId::new(),
            owner_id,
            total_balance: Money::ZERO,
            available_balance: Money::ZERO,
            version: 0,
        }
    }

    /// Rebuilds a wallet from stored state, re-checking the balance invariant.
    pub fn restore(
        id: WalletId,
        owner_id: OwnerId,
        total_balance: Money,
        available_balance: Money,
        version: i64,
    ) -> Result<Self, WalletError> {
        if available_balance > total_balance {
            return Err(WalletError::AvailableAboveTotal {
                available: available_balance,
                total: total_balance,
            });
        }

        Ok(Self {
            id,
            owner_id,
            total_balance,
            available_balance,
            version,
        })
    }

    /// Returns the wallet's identifier.
    #[must_use]
    pub const fn id(&self) -> WalletId {
        self.id
    }

    /// Returns the owning party's identifier.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the total balance: the authoritative record of funds held.
    #[must_use]
    pub const fn total_balance(&self) -> Money {
        self.total_balance
    }

    /// Returns the available balance: funds not escrowed by in-flight withdrawals.
    #[must_use]
    pub const fn available_balance(&self) -> Money {
        self.available_balance
    }

    /// Returns the optimistic concurrency version.
    ///
    /// The aggregate never increments this; the storage collaborator bumps
    /// it on every successful write and rejects stale writers.
    #[must_use]
    pub const fn version(&self) -> i64 {
        self.version
    }

    /// Sets the total balance, enforcing that it covers the available balance.
    pub fn set_total_balance(&mut self, balance: Money) -> Result<(), WalletError> {
        if balance < self.available_balance {
            return Err(WalletError::TotalBelowAvailable {
                total: balance,
                available: self.available_balance,
            });
        }

        self.total_balance = balance;

        Ok(())
    }

    /// Sets the available balance, enforcing that it never exceeds the total.
    pub fn set_available_balance(&mut self, balance: Money) -> Result<(), WalletError> {
        if balance > self.total_balance {
            return Err(WalletError::AvailableAboveTotal {
                available: balance,
                total: self.total_balance,
            });
        }

        self.available_balance = balance;

        Ok(())
    }

    /// Credits a confirmed payment to the wallet.
    ///
    /// Both balances move by the payment amount, the payment is marked
    /// `Success`, and a ledger entry snapshotting the pre-mutation total is
    /// produced. Either everything moves or nothing does.
    ///
    /// # Errors
    ///
    /// - `OwnershipViolation` if the payment targets another owner
    /// - `PaymentAlreadyFailed` if confirmation failed upstream
    /// - `PaymentAlreadyProcessed` if the payment is already `Success`
    pub fn process_payment(
        &mut self,
        payment: Payment,
    ) -> Result<(Payment, WalletTransaction), WalletError> {
        if payment.owner_id != self.owner_id {
            return Err(WalletError::OwnershipViolation);
        }

        if payment.status.has_failed() {
            return Err(WalletError::PaymentAlreadyFailed);
        }

        if payment.status == TransactionStatus::Success {
            return Err(WalletError::PaymentAlreadyProcessed);
        }

        let opening_balance = self.total_balance;

        let new_total = self
            .total_balance
            .checked_add(payment.amount)
            .ok_or(WalletError::AmountOverflow)?;
        let new_available = self
            .available_balance
            .checked_add(payment.amount)
            .ok_or(WalletError::AmountOverflow)?;

        // Total moves first so the invariant holds between the two writes.
        self.set_total_balance(new_total)?;
        self.set_available_balance(new_available)?;

        let mut payment = payment;
        payment.opening_balance = Some(opening_balance);
        payment.status = TransactionStatus::Success;

        let mut entry = WalletTransaction::for_payment(&payment, opening_balance);
        entry.comments = Some(format!(
            "{} created payment with reference {} at {}, credited to wallet at {}",
            payment.created_by,
            payment.transaction_reference,
            payment.created_at,
            Utc::now()
        ));
        payment.comments = Some(format!(
            "payment processed by wallet, ledger entry {} was created",
            entry.id
        ));

        Ok((payment, entry))
    }

    /// Escrows an initiated withdrawal out of the available balance.
    ///
    /// The prospective balance is validated before anything is committed.
    /// Amounts strictly below `threshold` are auto-approved to
    /// `Processing`; amounts at or above it park at `Pending` for admin
    /// approval. Total balance is untouched until settlement.
    ///
    /// # Errors
    ///
    /// - `OwnershipViolation` if the withdrawal targets another owner
    /// - `WithdrawalAlreadyProcessed` if the status is not `Initiated`
    /// - `InsufficientFunds` if the debit would drive the available balance negative
    pub fn process_withdrawal(
        &mut self,
        withdrawal: Withdrawal,
        threshold: Money,
    ) -> Result<(Withdrawal, WalletTransaction), WalletError> {
        if withdrawal.owner_id != self.owner_id {
            return Err(WalletError::OwnershipViolation);
        }

        if withdrawal.status != TransactionStatus::Initiated {
            return Err(WalletError::WithdrawalAlreadyProcessed);
        }

        let opening_balance = self.total_balance;

        let new_available = self
            .available_balance
            .checked_sub(withdrawal.amount)
            .ok_or(WalletError::AmountOverflow)?;

        if new_available.is_negative() {
            return Err(WalletError::InsufficientFunds {
                requested: withdrawal.amount,
                available: self.available_balance,
            });
        }

        let mut withdrawal = withdrawal;
        withdrawal.opening_balance = opening_balance;
        // The routing decision compares the requested amount, never a
        // post-debit balance read.
        let routed = if withdrawal.amount < threshold {
            TransactionStatus::Processing
        } else {
            TransactionStatus::Pending
        };
        withdrawal.advance(routed)?;

        self.set_available_balance(new_available)?;

        let mut entry = WalletTransaction::for_withdrawal(&withdrawal, opening_balance);
        entry.comments = Some(format!(
            "{} created withdrawal with reference {} at {}, escrowed from wallet at {}",
            withdrawal.created_by,
            withdrawal.transaction_reference,
            withdrawal.created_at,
            Utc::now()
        ));

        Ok((withdrawal, entry))
    }

    /// Approves a pending withdrawal on behalf of a super admin.
    ///
    /// Balances are untouched; the withdrawal and its ledger entry move to
    /// `Processing` and the approver's name is recorded.
    ///
    /// # Errors
    ///
    /// - `IncompleteAuthorization` if the profile has no full name
    /// - `RequiresSuperAdmin` if the profile lacks the capability
    /// - `OwnershipViolation` if the withdrawal targets another owner
    /// - `ApprovalNotRequired` if the status is not `Pending`
    /// - `ReferenceMismatch` if the ledger entry belongs to another transaction
    pub fn approve_withdrawal(
        &self,
        profile: &AuthProfile,
        withdrawal: Withdrawal,
        entry: WalletTransaction,
    ) -> Result<(Withdrawal, WalletTransaction), WalletError> {
        let approver = profile
            .full_name()
            .ok_or(WalletError::IncompleteAuthorization)?;

        if !profile.role().is_super_admin() {
            return Err(WalletError::RequiresSuperAdmin);
        }

        if withdrawal.owner_id != self.owner_id {
            return Err(WalletError::OwnershipViolation);
        }

        if withdrawal.status != TransactionStatus::Pending {
            return Err(WalletError::ApprovalNotRequired);
        }

        if withdrawal.transaction_reference != entry.transaction_reference {
            return Err(WalletError::ReferenceMismatch {
                withdrawal_reference: withdrawal.transaction_reference,
                transaction_reference: entry.transaction_reference,
            });
        }

        let mut withdrawal = withdrawal;
        let mut entry = entry;

        withdrawal.advance(TransactionStatus::Processing)?;
        entry.status = withdrawal.status;
        withdrawal.approved_by = Some(approver.to_string());
        entry.comments = Some(format!(
            "withdrawal with reference {} approved by {} at {}",
            withdrawal.transaction_reference,
            approver,
            Utc::now()
        ));

        Ok((withdrawal, entry))
    }

    /// Settles an authorized withdrawal, debiting the total balance.
    ///
    /// This is the point where funds actually leave the ledger; the
    /// available balance was already reduced at initiation.
    ///
    /// # Errors
    ///
    /// - `OwnershipViolation` if the withdrawal targets another owner
    /// - `NotAuthorizedForProcessing` if the status is not `Processing`
    /// - `ReferenceMismatch` if the ledger entry belongs to another transaction
    pub fn complete_withdrawal(
        &mut self,
        withdrawal: Withdrawal,
        entry: WalletTransaction,
    ) -> Result<(Withdrawal, WalletTransaction), WalletError> {
        if withdrawal.owner_id != self.owner_id {
            return Err(WalletError::OwnershipViolation);
        }

        if withdrawal.status != TransactionStatus::Processing {
            return Err(WalletError::NotAuthorizedForProcessing);
        }

        if withdrawal.transaction_reference != entry.transaction_reference {
            return Err(WalletError::ReferenceMismatch {
                withdrawal_reference: withdrawal.transaction_reference,
                transaction_reference: entry.transaction_reference,
            });
        }

        let new_total = self
            .total_balance
            .checked_sub(withdrawal.amount)
            .ok_or(WalletError::AmountOverflow)?;

        let mut withdrawal = withdrawal;
        let mut entry = entry;

        withdrawal.advance(TransactionStatus::Success)?;
        entry.status = withdrawal.status;

        self.set_total_balance(new_total)?;
        entry.comments = Some(format!(
            "withdrawal with reference {} settled at {}",
            withdrawal.transaction_reference,
            Utc::now()
        ));

        Ok((withdrawal, entry))
    }
}
