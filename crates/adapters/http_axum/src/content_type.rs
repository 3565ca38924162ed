//! Content negotiation guard for write requests.

use axum::extract::FromRequestParts;
use axum::http::HeaderValue;
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;

use crate::error::ApiError;

/// The only media type accepted on `POST` and `PUT`.
pub const JSON: &str = "application/json";

/// Check a declared `Content-Type` against the expected media type.
///
/// Parameters such as `charset` are ignored and the comparison is
/// case-insensitive. A missing header never matches.
///
/// # Errors
///
/// Returns [`ApiError::UnsupportedMediaType`] when the media types differ.
pub fn check_content_type(declared: Option<&HeaderValue>, expected: &str) -> Result<(), ApiError> {
    let media_type = declared
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim);

    match media_type {
        Some(media_type) if media_type.eq_ignore_ascii_case(expected) => Ok(()),
        _ => Err(ApiError::UnsupportedMediaType),
    }
}

/// Extractor that rejects requests not declared as `application/json`.
///
/// Put it before the body extractor of every write handler.
pub struct RequireJson;

impl<S> FromRequestParts<S> for RequireJson
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(parts.headers.get(CONTENT_TYPE), JSON)?;
        Ok(Self)
    }
}
