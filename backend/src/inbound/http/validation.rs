//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs declare their fields as `Option` so a missing value is
//! reported with the field name instead of a generic deserialisation error.

use std::str::FromStr;

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use serde_json::json;

use crate::domain::{Error, ProductCondition};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidIdentifier,
    InvalidCondition,
    MalformedBody,
    MalformedQuery,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidIdentifier => "invalid_identifier",
            ErrorCode::InvalidCondition => "invalid_condition",
            ErrorCode::MalformedBody => "malformed_body",
            ErrorCode::MalformedQuery => "malformed_query",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

/// Unwrap a required request field.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn invalid_identifier_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(
        field,
        format!("{field} must be a non-empty identifier without surrounding whitespace"),
    )
    .with_value(ErrorCode::InvalidIdentifier, value)
}

/// Parse an identifier newtype, reporting the offending field on failure.
pub(crate) fn parse_identifier<T, E>(
    value: String,
    field: FieldName,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<T, Error> {
    parse(&value).map_err(|_| invalid_identifier_error(field, &value))
}

pub(crate) fn invalid_condition_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(
        field,
        format!("{field} must be one of NEW, LIKE_NEW, GOOD, FAIR, POOR"),
    )
    .with_value(ErrorCode::InvalidCondition, value)
}

pub(crate) fn parse_condition(value: String, field: FieldName) -> Result<ProductCondition, Error> {
    ProductCondition::from_str(&value).map_err(|_| invalid_condition_error(field, &value))
}

/// Map JSON body extraction failures onto the domain error envelope.
pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("request body could not be parsed: {err}"))
        .with_details(json!({ "code": ErrorCode::MalformedBody.as_str() }))
        .into()
}

/// Map query string extraction failures onto the domain error envelope.
pub(crate) fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("query string could not be parsed: {err}"))
        .with_details(json!({ "code": ErrorCode::MalformedQuery.as_str() }))
        .into()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{ErrorCode as DomainErrorCode, UserId};
    use rstest::rstest;

    const SELLER_ID: FieldName = FieldName::new("sellerId");

    #[rstest]
    fn missing_field_reports_name() {
        let err = require::<String>(None, SELLER_ID).expect_err("missing");
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        let details = err.details().expect("details");
        assert_eq!(details["field"], "sellerId");
        assert_eq!(details["code"], "missing_field");
    }

    #[rstest]
    #[case("")]
    #[case(" user1")]
    fn invalid_identifiers_are_rejected(#[case] raw: &str) {
        let err = parse_identifier(raw.to_owned(), SELLER_ID, |raw| UserId::new(raw))
            .expect_err("invalid");
        let details = err.details().expect("details");
        assert_eq!(details["code"], "invalid_identifier");
        assert_eq!(details["value"], raw);
    }

    #[rstest]
    fn valid_identifier_parses() {
        let id = parse_identifier("user1".to_owned(), SELLER_ID, |raw| UserId::new(raw))
            .expect("valid");
        assert_eq!(id.as_str(), "user1");
    }

    #[rstest]
    #[case("LIKE_NEW", ProductCondition::LikeNew)]
    #[case("POOR", ProductCondition::Poor)]
    fn conditions_parse(#[case] raw: &str, #[case] expected: ProductCondition) {
        let condition =
            parse_condition(raw.to_owned(), FieldName::new("condition")).expect("valid");
        assert_eq!(condition, expected);
    }

    #[rstest]
    fn unknown_condition_is_rejected() {
        let err = parse_condition("MINT".to_owned(), FieldName::new("condition"))
            .expect_err("invalid");
        assert_eq!(err.details().expect("details")["code"], "invalid_condition");
    }
}
