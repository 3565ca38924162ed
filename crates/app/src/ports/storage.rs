//! Storage port — repository trait for account persistence.

use std::future::Future;

use accounts_domain::account::{Account, AccountData};
use accounts_domain::error::AccountError;
use accounts_domain::id::AccountId;

/// Repository for persisting and querying [`Account`]s.
///
/// Implementations own the durable copy and serialize concurrent writes.
pub trait AccountRepository {
    /// Persist new account data, assigning it a fresh identifier.
    fn create(
        &self,
        data: AccountData,
    ) -> impl Future<Output = Result<Account, AccountError>> + Send;

    /// Get an account by its identifier. Absence is `Ok(None)`.
    fn get_by_id(
        &self,
        id: AccountId,
    ) -> impl Future<Output = Result<Option<Account>, AccountError>> + Send;

    /// Get all accounts, in store-defined order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Account>, AccountError>> + Send;

    /// Overwrite the stored account with the same identifier.
    ///
    /// Fails with [`AccountError::Storage`] when no such account exists.
    fn update(
        &self,
        account: Account,
    ) -> impl Future<Output = Result<Account, AccountError>> + Send;

    /// Delete an account. Deleting a missing identifier is a no-op.
    fn delete(&self, id: AccountId) -> impl Future<Output = Result<(), AccountError>> + Send;
}
