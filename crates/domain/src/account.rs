//! Account — the single record managed by the service.
//!
//! [`AccountData`] is the wire shape of a write request (every field but
//! `id`). [`Account`] pairs it with the identifier assigned by the store and
//! serializes flat, so `{"id": 1, "name": "..", ..}` is both what the API
//! returns and what a client may send back on update.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AccountError, ValidationError};
use crate::id::AccountId;
use crate::time::{Date, today};

/// Account fields supplied by a client.
///
/// Unrecognized keys, `id` included, are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default = "today")]
    pub date_joined: Date,
}

impl AccountData {
    /// Create a builder for constructing [`AccountData`] in code.
    #[must_use]
    pub fn builder() -> AccountDataBuilder {
        AccountDataBuilder::default()
    }

    /// Parse a JSON request body and check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPayload`] when the body is not a JSON
    /// object, misses a required field or carries a field of the wrong type,
    /// and [`ValidationError::EmptyName`] when `name` is blank.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let object: Map<String, Value> =
            serde_json::from_slice(body).map_err(ValidationError::InvalidPayload)?;
        let data: Self = serde_json::from_value(Value::Object(object))
            .map_err(ValidationError::InvalidPayload)?;
        data.validate()?;
        Ok(data)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is empty or blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

/// A persisted account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    #[serde(flatten)]
    pub data: AccountData,
}

impl Account {
    #[must_use]
    pub fn new(id: AccountId, data: AccountData) -> Self {
        Self { id, data }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Validation`] when the data is invalid.
    pub fn validate(&self) -> Result<(), AccountError> {
        self.data.validate().map_err(AccountError::from)
    }
}

/// Step-by-step builder for [`AccountData`].
#[derive(Debug, Default)]
pub struct AccountDataBuilder {
    name: Option<String>,
    email: Option<String>,
    address: Option<String>,
    phone_number: Option<String>,
    date_joined: Option<Date>,
}

impl AccountDataBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub fn date_joined(mut self, date_joined: Date) -> Self {
        self.date_joined = Some(date_joined);
        self
    }

    /// Consume the builder, validate, and return [`AccountData`].
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<AccountData, AccountError> {
        let data = AccountData {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            phone_number: self.phone_number,
            date_joined: self.date_joined.unwrap_or_else(today),
        };
        data.validate()?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jane() -> AccountData {
        AccountData::builder()
            .name("Jane Doe")
            .email("jane@example.com")
            .address("1 Main Street")
            .phone_number("555-0100")
            .date_joined(Date::from_ymd_opt(2024, 3, 1).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_data_when_name_provided() {
        let data = AccountData::builder().name("Jane Doe").build().unwrap();
        assert_eq!(data.name, "Jane Doe");
        assert!(data.phone_number.is_none());
        assert_eq!(data.date_joined, today());
    }

    #[test]
    fn should_return_validation_error_when_name_is_missing() {
        let result = AccountData::builder().email("a@b.c").build();
        assert!(matches!(
            result,
            Err(AccountError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_parse_payload_with_all_fields() {
        let body = json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "address": "1 Main Street",
            "phone_number": "555-0100",
            "date_joined": "2024-03-01",
        });
        let data = AccountData::from_json(body.to_string().as_bytes()).unwrap();
        assert_eq!(data, jane());
    }

    #[test]
    fn should_default_optional_fields_when_absent() {
        let body = r#"{"name":"Jane","email":"j@x.io","address":"here"}"#;
        let data = AccountData::from_json(body.as_bytes()).unwrap();
        assert!(data.phone_number.is_none());
        assert_eq!(data.date_joined, today());
    }

    #[test]
    fn should_ignore_unknown_keys_and_id() {
        let body = r#"{"id":99,"name":"Jane","email":"j@x.io","address":"here","nickname":"JD"}"#;
        let data = AccountData::from_json(body.as_bytes()).unwrap();
        assert_eq!(data.name, "Jane");
    }

    #[test]
    fn should_reject_payload_missing_required_fields() {
        let result = AccountData::from_json(br#"{"name":"short"}"#);
        assert!(matches!(result, Err(ValidationError::InvalidPayload(_))));
    }

    #[test]
    fn should_reject_name_of_wrong_type() {
        let result = AccountData::from_json(br#"{"name":42,"email":"e","address":"a"}"#);
        assert!(matches!(result, Err(ValidationError::InvalidPayload(_))));
    }

    #[test]
    fn should_reject_payload_that_is_not_an_object() {
        let result = AccountData::from_json(br#"["Jane","e","a"]"#);
        assert!(matches!(result, Err(ValidationError::InvalidPayload(_))));

        let result = AccountData::from_json(b"not json");
        assert!(matches!(result, Err(ValidationError::InvalidPayload(_))));
    }

    #[test]
    fn should_reject_blank_name() {
        let result = AccountData::from_json(br#"{"name":"  ","email":"e","address":"a"}"#);
        assert!(matches!(result, Err(ValidationError::EmptyName)));
    }

    #[test]
    fn should_reject_malformed_date() {
        let body = br#"{"name":"Jane","email":"e","address":"a","date_joined":"yesterday"}"#;
        let result = AccountData::from_json(body);
        assert!(matches!(result, Err(ValidationError::InvalidPayload(_))));
    }

    #[test]
    fn should_serialize_flat_with_id() {
        let account = Account::new(AccountId::new(3), jane());
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Jane Doe",
                "email": "jane@example.com",
                "address": "1 Main Street",
                "phone_number": "555-0100",
                "date_joined": "2024-03-01",
            })
        );
    }

    #[test]
    fn should_preserve_every_field_except_id_through_serialize() {
        let account = Account::new(AccountId::new(8), jane());
        let json = serde_json::to_vec(&account).unwrap();
        let parsed = AccountData::from_json(&json).unwrap();
        assert_eq!(parsed, account.data);
    }
}
