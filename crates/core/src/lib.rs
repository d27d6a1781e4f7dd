//! Core business logic for Payvault.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, invariants, and state transitions live here.
//!
//! # Modules
//!
//! - `wallet` - Wallet aggregate, request records, and the ledger entry
//! - `auth` - Roles and the authorization profile consumed by privileged transitions
//! - `repository` - The persistence collaborator contract implemented by callers

pub mod auth;
pub mod repository;
pub mod wallet;
