//! HTTP adapter mapping for domain errors.
//!
//! Response envelopes:
//! - 400 `{error, details, traceId}`
//! - 404 `{error, traceId}`
//! - 500 `{error, message, traceId}` with a fixed message; the underlying
//!   cause is logged, never returned.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Client-facing text for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<&'a str>,
}

impl<'a> ErrorBody<'a> {
    fn from_error(error: &'a Error) -> Self {
        let trace_id = error.trace_id();
        match error.code() {
            ErrorCode::InvalidRequest => Self {
                error: error.message(),
                message: None,
                details: error.details(),
                trace_id,
            },
            ErrorCode::NotFound => Self {
                error: error.message(),
                message: None,
                details: None,
                trace_id,
            },
            ErrorCode::InternalError => Self {
                error: "Internal server error",
                message: Some(INTERNAL_ERROR_MESSAGE),
                details: None,
                trace_id,
            },
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(trace_id = ?self.trace_id(), error = %self, "request failed");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorBody::from_error(self))
    }
}
