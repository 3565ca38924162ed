//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`AccountError`] via `#[from]`.

/// A request payload or a domain value breaks an invariant.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// `name` is required and must not be empty.
    #[error("name must not be empty")]
    EmptyName,

    /// The payload is not a JSON object of the expected shape.
    #[error("invalid account payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

/// A referenced record does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Base error for the account service.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Any failure of the underlying store. Never retried.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Account",
            id: "0".to_string(),
        };
        assert_eq!(err.to_string(), "Account 0 not found");
    }

    #[test]
    fn should_convert_validation_error_into_account_error() {
        let err: AccountError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            AccountError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_include_serde_message_in_invalid_payload() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ValidationError::InvalidPayload(source);
        assert!(err.to_string().starts_with("invalid account payload: "));
    }
}
