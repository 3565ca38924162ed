//! Account service — use-cases for managing accounts.

use accounts_domain::account::{Account, AccountData};
use accounts_domain::error::{AccountError, NotFoundError};
use accounts_domain::id::AccountId;

use crate::ports::AccountRepository;

/// Application service for account CRUD operations.
pub struct AccountService<R> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new account after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, data), fields(account_name = %data.name))]
    pub async fn create_account(&self, data: AccountData) -> Result<Account, AccountError> {
        data.validate()?;
        self.repo.create(data).await
    }

    /// Look up an account by id. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_account(&self, id: AccountId) -> Result<Option<Account>, AccountError> {
        self.repo.get_by_id(id).await
    }

    /// Look up an account by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::NotFound`] when no account with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_account(&self, id: AccountId) -> Result<Account, AccountError> {
        self.find_account(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Account",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all accounts.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AccountError> {
        self.repo.get_all().await
    }

    /// Overwrite an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Validation`] if invariants fail, or a
    /// storage error from the repository (including a missing id).
    #[tracing::instrument(skip(self, account), fields(account_id = %account.id))]
    pub async fn update_account(&self, account: Account) -> Result<Account, AccountError> {
        account.validate()?;
        self.repo.update(account).await
    }

    /// Delete an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::NotFound`] when no account with `id` exists,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_account(&self, id: AccountId) -> Result<(), AccountError> {
        self.get_account(id).await?;
        self.repo.delete(id).await
    }
}
