//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod accounts;

use axum::Router;
use axum::routing::get;

use accounts_app::ports::AccountRepository;

use crate::state::AppState;

/// Build the account resource routes.
///
/// Methods missing from a route fall through to the router's
/// method-not-allowed fallback.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/accounts",
            get(accounts::list::<R>).post(accounts::create::<R>),
        )
        .route(
            "/accounts/{id}",
            get(accounts::get::<R>)
                .put(accounts::update::<R>)
                .delete(accounts::delete::<R>),
        )
}
