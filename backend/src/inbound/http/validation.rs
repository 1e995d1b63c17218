//! Shared validation helpers for inbound HTTP adapters.
//!
//! Each failing field yields a [`FieldError`]; handlers collect them and
//! report all failures in one `400` via [`invalid_fields`].

use serde::Serialize;
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidNumber,
    InvalidInteger,
    OutOfRange,
    InvalidTime,
    InvalidBoolean,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidNumber => "invalid_number",
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::InvalidTime => "invalid_time",
            ErrorCode::InvalidBoolean => "invalid_boolean",
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

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

/// One rejected field, serialised into the `details` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct FieldError {
    field: &'static str,
    code: &'static str,
    message: String,
    value: String,
}

impl FieldError {
    fn new(field: FieldName, code: ErrorCode, message: String, value: &str) -> Self {
        Self {
            field: field.as_str(),
            code: code.as_str(),
            message,
            value: value.to_owned(),
        }
    }
}

pub(crate) fn invalid_number(field: FieldName, value: &str) -> FieldError {
    let name = field.as_str();
    FieldError::new(
        field,
        ErrorCode::InvalidNumber,
        format!("{name} must be a number"),
        value,
    )
}

pub(crate) fn invalid_integer(field: FieldName, value: &str) -> FieldError {
    let name = field.as_str();
    FieldError::new(
        field,
        ErrorCode::InvalidInteger,
        format!("{name} must be a whole number"),
        value,
    )
}

pub(crate) fn out_of_range(field: FieldName, value: &str, bounds: &str) -> FieldError {
    let name = field.as_str();
    FieldError::new(
        field,
        ErrorCode::OutOfRange,
        format!("{name} must be {bounds}"),
        value,
    )
}

pub(crate) fn invalid_time(field: FieldName, value: &str) -> FieldError {
    let name = field.as_str();
    FieldError::new(
        field,
        ErrorCode::InvalidTime,
        format!("{name} must be a time in HH:mm format"),
        value,
    )
}

pub(crate) fn invalid_boolean(field: FieldName, value: &str) -> FieldError {
    let name = field.as_str();
    FieldError::new(
        field,
        ErrorCode::InvalidBoolean,
        format!("{name} must be \"true\" or \"false\""),
        value,
    )
}

/// Fold collected field errors into one domain error.
pub(crate) fn invalid_fields(errors: Vec<FieldError>) -> Error {
    Error::invalid_request("Invalid query parameters").with_details(json!(errors))
}
