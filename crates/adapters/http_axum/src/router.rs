//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use accounts_app::ports::AccountRepository;

use crate::error::ApiError;
use crate::state::AppState;

/// Human-readable service name reported by `GET /`.
pub const SERVICE_NAME: &str = "Account REST API Service";

/// Body of `GET /health`.
#[derive(Serialize)]
struct Health {
    status: &'static str,
}

/// Body of `GET /`.
#[derive(Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
}

/// Build the top-level axum [`Router`].
///
/// Merges the account routes with `/health` and `/`. Unknown paths and
/// unsupported methods answer with a JSON error body.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: AccountRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(index))
        .merge(crate::api::routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Health> {
    Json(Health { status: "OK" })
}

async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
