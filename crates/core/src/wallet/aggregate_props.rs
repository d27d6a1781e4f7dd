//! Property-based tests for the Wallet aggregate.
//!
//! Feature: wallet-core
//! - Property 1: Balance Invariant Preservation
//! - Property 2: Payment Credit Symmetry
//! - Property 3: Withdrawal Threshold Routing
//! - Property 4: Rejected Operations Leave No Trace

use proptest::prelude::*;
use rust_decimal::Decimal;

use payvault_shared::types::{Money, OwnerId, WalletId};

use crate::auth::{AuthProfile, Role};

use super::aggregate::Wallet;
use super::error::WalletError;
use super::payment::Payment;
use super::status::TransactionStatus;
use super::transaction::WalletTransaction;
use super::withdrawal::Withdrawal;

/// Strategy to generate positive amounts (0.01 to 100,000,000.00).
fn positive_amount() -> impl Strategy<Value = Money> {
    (1i64..10_000_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Strategy to generate a funded wallet with available <= total.
fn funded_wallet() -> impl Strategy<Value = Wallet> {
    (0i64..10_000_000_000i64, 0i64..10_000_000_000i64).prop_map(|(a, b)| {
        let total = Money::new(Decimal::new(a.max(b), 2));
        let available = Money::new(Decimal::new(a.min(b), 2));
        Wallet::restore(WalletId::new(), OwnerId::new(), total, available, 1)
            .expect("generated balances satisfy the invariant")
    })
}

fn payment_for(wallet: &Wallet, amount: Money) -> Payment {
    Payment::new(wallet.owner_id(), "gateway", amount, "prop-pay", "card", "web")
}

fn withdrawal_for(wallet: &Wallet, amount: Money) -> Withdrawal {
    Withdrawal::new(wallet.owner_id(), "owner", amount, "prop-wd", "bank", "mobile")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Balance Invariant Preservation
    // =========================================================================

    /// *For any* funded wallet and payment amount, a successful credit SHALL
    /// leave available <= total.
    #[test]
    fn prop_payment_preserves_invariant(
        mut wallet in funded_wallet(),
        amount in positive_amount(),
    ) {
        let payment = payment_for(&wallet, amount);

        prop_assert!(wallet.process_payment(payment).is_ok());
        prop_assert!(wallet.available_balance() <= wallet.total_balance());
    }

    /// *For any* funded wallet and withdrawal amount, processing SHALL either
    /// succeed with the invariant intact or fail leaving both balances
    /// untouched.
    #[test]
    fn prop_withdrawal_preserves_invariant(
        mut wallet in funded_wallet(),
        amount in positive_amount(),
        threshold in positive_amount(),
    ) {
        let total_before = wallet.total_balance();
        let available_before = wallet.available_balance();
        let withdrawal = withdrawal_for(&wallet, amount);

        match wallet.process_withdrawal(withdrawal, threshold) {
            Ok(_) => {
                prop_assert!(wallet.available_balance() <= wallet.total_balance());
                prop_assert_eq!(wallet.total_balance(), total_before);
            }
            Err(WalletError::InsufficientFunds { .. }) => {
                prop_assert_eq!(wallet.total_balance(), total_before);
                prop_assert_eq!(wallet.available_balance(), available_before);
            }
            Err(e) => prop_assert!(false, "unexpected error: {e}"),
        }
    }

    // =========================================================================
    // Property 2: Payment Credit Symmetry
    // =========================================================================

    /// *For any* payment, both balances SHALL move by exactly the payment
    /// amount and the ledger entry SHALL snapshot the pre-credit total.
    #[test]
    fn prop_payment_credits_both_balances_equally(
        mut wallet in funded_wallet(),
        amount in positive_amount(),
    ) {
        let total_before = wallet.total_balance();
        let available_before = wallet.available_balance();
        let payment = payment_for(&wallet, amount);

        let (payment, entry) = wallet.process_payment(payment).unwrap();

        prop_assert_eq!(
            wallet.total_balance(),
            total_before.checked_add(amount).unwrap()
        );
        prop_assert_eq!(
            wallet.available_balance(),
            available_before.checked_add(amount).unwrap()
        );
        prop_assert_eq!(entry.opening_balance, total_before);
        prop_assert_eq!(payment.opening_balance, Some(total_before));
        prop_assert_eq!(entry.amount, amount);
        prop_assert_eq!(entry.status, TransactionStatus::Success);
    }

    // =========================================================================
    // Property 3: Withdrawal Threshold Routing
    // =========================================================================

    /// *For any* coverable withdrawal, the routed status SHALL be Processing
    /// exactly when the amount is strictly below the threshold.
    #[test]
    fn prop_threshold_routing(
        amount in positive_amount(),
        threshold in positive_amount(),
    ) {
        let owner = OwnerId::new();
        let mut wallet = Wallet::restore(WalletId::new(), owner, amount, amount, 1).unwrap();
        let withdrawal = Withdrawal::new(owner, "owner", amount, "prop-wd", "bank", "mobile");

        let (withdrawal, entry) = wallet.process_withdrawal(withdrawal, threshold).unwrap();

        let expected = if amount < threshold {
            TransactionStatus::Processing
        } else {
            TransactionStatus::Pending
        };
        prop_assert_eq!(withdrawal.status, expected);
        prop_assert_eq!(entry.status, expected);
    }

    // =========================================================================
    // Property 4: Rejected Operations Leave No Trace
    // =========================================================================

    /// *For any* request owned by another party, every operation SHALL fail
    /// with an ownership violation and the wallet SHALL be unchanged.
    #[test]
    fn prop_foreign_requests_rejected_without_mutation(
        mut wallet in funded_wallet(),
        amount in positive_amount(),
        threshold in positive_amount(),
    ) {
        let total_before = wallet.total_balance();
        let available_before = wallet.available_balance();
        let stranger = OwnerId::new();

        let payment = Payment::new(stranger, "gateway", amount, "prop-pay", "card", "web");
        prop_assert!(matches!(
            wallet.process_payment(payment),
            Err(WalletError::OwnershipViolation)
        ));

        let withdrawal = Withdrawal::new(stranger, "owner", amount, "prop-wd", "bank", "mobile");
        prop_assert!(matches!(
            wallet.process_withdrawal(withdrawal, threshold),
            Err(WalletError::OwnershipViolation)
        ));

        let profile = AuthProfile::new(Role::SuperAdmin, Some("Ada Lovelace".to_string()));
        let mut pending = Withdrawal::new(stranger, "owner", amount, "prop-wd", "bank", "mobile");
        pending.status = TransactionStatus::Pending;
        let entry = WalletTransaction::for_withdrawal(&pending, total_before);
        prop_assert!(matches!(
            wallet.approve_withdrawal(&profile, pending, entry),
            Err(WalletError::OwnershipViolation)
        ));

        let mut authorized = Withdrawal::new(stranger, "owner", amount, "prop-wd", "bank", "mobile");
        authorized.status = TransactionStatus::Processing;
        let entry = WalletTransaction::for_withdrawal(&authorized, total_before);
        prop_assert!(matches!(
            wallet.complete_withdrawal(authorized, entry),
            Err(WalletError::OwnershipViolation)
        ));

        prop_assert_eq!(wallet.total_balance(), total_before);
        prop_assert_eq!(wallet.available_balance(), available_before);
    }

    /// *For any* sequence of one payment then one withdrawal, the version
    /// field SHALL never change inside the aggregate.
    #[test]
    fn prop_version_is_never_mutated(
        mut wallet in funded_wallet(),
        amount in positive_amount(),
        threshold in positive_amount(),
    ) {
        let version = wallet.version();

        let payment = payment_for(&wallet, amount);
        let _ = wallet.process_payment(payment);
        let withdrawal = withdrawal_for(&wallet, amount);
        let _ = wallet.process_withdrawal(withdrawal, threshold);

        prop_assert_eq!(wallet.version(), version);
    }
}
