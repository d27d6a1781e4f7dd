//! Wallet balance and transaction engine.
//!
//! This module implements the core wallet functionality:
//! - Wallet aggregate with total/available balance invariants
//! - Payment and withdrawal request records
//! - Immutable wallet ledger entries
//! - Shared transaction status state machine
//! - Error types for wallet operations
//! - Wallet service carrying the auto-withdrawal threshold

pub mod aggregate;
pub mod error;
pub mod payment;
pub mod service;
pub mod status;
pub mod transaction;
pub mod withdrawal;

#[cfg(test)]
mod aggregate_props;

pub use aggregate::Wallet;
pub use error::WalletError;
pub use payment::Payment;
pub use service::WalletService;
pub use status::{TransactionStatus, TransactionType};
pub use transaction::WalletTransaction;
pub use withdrawal::Withdrawal;
