//! Persistence collaborator contract.
//!
//! The engine computes; storage persists. Implementations live outside this
//! crate and commit the request record, ledger entry, and wallet snapshot an
//! operation returns under a single database transaction.

use payvault_shared::error::AppResult;

/// Storage contract for a single aggregate or record type.
///
/// Wallet writes must compare the stored `version` against the snapshot the
/// caller loaded and bump it on success; a stale snapshot is rejected with
/// `AppError::Conflict` so the caller can reload and retry.
pub trait Repository<T> {
    /// The identifier type for the stored record.
    type Id;

    /// Loads a record by id, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` on storage failure.
    fn retrieve_by_id(&self, id: &Self::Id) -> AppResult<Option<T>>;

    /// Persists a new record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` on storage failure.
    fn create(&self, record: T) -> AppResult<T>;

    /// Persists changes to an existing record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Conflict` on a stale version and
    /// `AppError::Database` on storage failure.
    fn update(&self, record: T) -> AppResult<T>;

    /// Removes a record by id. Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` on storage failure.
    fn delete(&self, id: &Self::Id) -> AppResult<bool>;
}
