//! Shared application state for axum handlers.

use std::sync::Arc;

use accounts_app::ports::AccountRepository;
use accounts_app::services::account_service::AccountService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Account CRUD service.
    pub account_service: Arc<AccountService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            account_service: Arc::clone(&self.account_service),
        }
    }
}

impl<R> AppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(account_service: AccountService<R>) -> Self {
        Self {
            account_service: Arc::new(account_service),
        }
    }
}
