//! Wallet service orchestrating aggregate operations.
//!
//! The service is the seam between the pure aggregate and the rest of the
//! application. It carries the auto-withdrawal threshold resolved once at
//! construction, converts domain errors into `AppError`, and emits the
//! tracing events callers correlate with persistence.

use payvault_shared::config::WalletSettings;
use payvault_shared::error::AppResult;
use payvault_shared::types::Money;
use tracing::{info, warn};

use crate::auth::AuthProfile;

use super::aggregate::Wallet;
use super::payment::Payment;
use super::transaction::WalletTransaction;
use super::withdrawal::Withdrawal;

/// Application-facing wallet operations.
///
/// Construct once per process with the resolved threshold; operations never
/// read configuration themselves.
#[derive(Debug, Clone)]
pub struct WalletService {
    threshold: Money,
}

impl WalletService {
    /// Creates a service with an explicit auto-withdrawal threshold.
    #[must_use]
    pub const fn new(threshold: Money) -> Self {
        Self { threshold }
    }

    /// Creates a service from wallet settings.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` when the configured threshold does not
    /// parse as a decimal amount.
    pub fn from_settings(settings: &WalletSettings) -> AppResult<Self> {
        Ok(Self::new(settings.threshold()?))
    }

    /// Returns the threshold above which withdrawals require approval.
    #[must_use]
    pub const fn threshold(&self) -> Money {
        self.threshold
    }

    /// Credits a confirmed payment to the wallet.
    ///
    /// # Errors
    ///
    /// Propagates the aggregate's ownership and state errors mapped into
    /// `AppError`.
    pub fn process_payment(
        &self,
        wallet: &mut Wallet,
        payment: Payment,
    ) -> AppResult<(Payment, WalletTransaction)> {
        let reference = payment.transaction_reference.clone();

        let (payment, entry) = wallet.process_payment(payment).inspect_err(|e| {
            warn!(reference = %reference, error = %e, "Payment rejected");
        })?;

        info!(
            wallet_id = %wallet.id(),
            reference = %reference,
            amount = %payment.amount,
            "Payment credited"
        );

        Ok((payment, entry))
    }

    /// Escrows an initiated withdrawal and routes it for processing.
    ///
    /// # Errors
    ///
    /// Propagates the aggregate's ownership, state, and balance errors
    /// mapped into `AppError`.
    pub fn process_withdrawal(
        &self,
        wallet: &mut Wallet,
        withdrawal: Withdrawal,
    ) -> AppResult<(Withdrawal, WalletTransaction)> {
        let reference = withdrawal.transaction_reference.clone();

        let (withdrawal, entry) = wallet
            .process_withdrawal(withdrawal, self.threshold)
            .inspect_err(|e| {
                warn!(reference = %reference, error = %e, "Withdrawal rejected");
            })?;

        info!(
            wallet_id = %wallet.id(),
            reference = %reference,
            amount = %withdrawal.amount,
            status = %withdrawal.status,
            "Withdrawal escrowed"
        );

        Ok((withdrawal, entry))
    }

    /// Approves a pending withdrawal on behalf of a super admin.
    ///
    /// # Errors
    ///
    /// Propagates the aggregate's authorization and state errors mapped
    /// into `AppError`.
    pub fn approve_withdrawal(
        &self,
        wallet: &Wallet,
        profile: &AuthProfile,
        withdrawal: Withdrawal,
        entry: WalletTransaction,
    ) -> AppResult<(Withdrawal, WalletTransaction)> {
        let reference = withdrawal.transaction_reference.clone();

        let (withdrawal, entry) = wallet
            .approve_withdrawal(profile, withdrawal, entry)
            .inspect_err(|e| {
                warn!(reference = %reference, error = %e, "Withdrawal approval rejected");
            })?;

        info!(
            wallet_id = %wallet.id(),
            reference = %reference,
            approved_by = withdrawal.approved_by.as_deref().unwrap_or(""),
            "Withdrawal approved"
        );

        Ok((withdrawal, entry))
    }

    /// Settles an authorized withdrawal against the total balance.
    ///
    /// # Errors
    ///
    /// Propagates the aggregate's ownership, state, and reference errors
    /// mapped into `AppError`.
    pub fn complete_withdrawal(
        &self,
        wallet: &mut Wallet,
        withdrawal: Withdrawal,
        entry: WalletTransaction,
    ) -> AppResult<(Withdrawal, WalletTransaction)> {
        let reference = withdrawal.transaction_reference.clone();

        let (withdrawal, entry) =
            wallet.complete_withdrawal(withdrawal, entry).inspect_err(|e| {
                warn!(reference = %reference, error = %e, "Withdrawal settlement rejected");
            })?;

        info!(
            wallet_id = %wallet.id(),
            reference = %reference,
            amount = %withdrawal.amount,
            "Withdrawal settled"
        );

        Ok((withdrawal, entry))
    }
}
