//! JSON REST handlers for accounts.

use std::str::FromStr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Response};

use accounts_app::ports::AccountRepository;
use accounts_domain::account::{Account, AccountData};
use accounts_domain::error::NotFoundError;
use accounts_domain::id::AccountId;

use crate::content_type::RequireJson;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Account>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Account>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Account>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => {
                let location = location_of(json.0.id);
                (StatusCode::CREATED, [(LOCATION, location)], json).into_response()
            }
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Read URL of a single account.
#[must_use]
pub fn location_of(id: AccountId) -> String {
    format!("/accounts/{id}")
}

/// A path segment that is not an integer can never name an account.
fn parse_id(raw: &str) -> Result<AccountId, ApiError> {
    AccountId::from_str(raw).map_err(|_| {
        ApiError::from(NotFoundError {
            entity: "Account",
            id: raw.to_string(),
        })
    })
}

/// `GET /accounts`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let accounts = state.account_service.list_accounts().await?;
    Ok(ListResponse::Ok(Json(accounts)))
}

/// `GET /accounts/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let account_id = parse_id(&id)?;
    let account = state.account_service.get_account(account_id).await?;
    Ok(GetResponse::Ok(Json(account)))
}

/// `POST /accounts`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    _: RequireJson,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let data = AccountData::from_json(&body)?;
    let created = state.account_service.create_account(data).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /accounts/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    _: RequireJson,
    body: Bytes,
) -> Result<GetResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let account_id = parse_id(&id)?;

    // Verify it exists
    state.account_service.get_account(account_id).await?;

    let data = AccountData::from_json(&body)?;
    let updated = state
        .account_service
        .update_account(Account::new(account_id, data))
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /accounts/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let account_id = parse_id(&id)?;
    state.account_service.delete_account(account_id).await?;
    Ok(DeleteResponse::NoContent)
}
