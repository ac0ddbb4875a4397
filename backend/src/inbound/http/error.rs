//! HTTP adapter mapping for domain errors.
//!
//! Every failure renders as one of two envelopes: `{"error": message}`, or
//! `{"errors": {field: message}}` for validation failures. Internal errors are
//! logged and their message is replaced unless the error was marked exposed
//! by [`ErrorExposure::Verbose`].

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::{Map, Value, json};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message rendered in place of a redacted internal error.
pub const REDACTED_MESSAGE: &str = "internal server error";

/// Whether internal error messages reach clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorExposure {
    /// Replace internal error messages with [`REDACTED_MESSAGE`].
    #[default]
    Redacted,
    /// Echo internal error messages. Intended for local debugging.
    Verbose,
}

impl ErrorExposure {
    /// Choose the policy from the `debug` configuration flag.
    #[must_use]
    pub const fn from_debug(debug: bool) -> Self {
        if debug { Self::Verbose } else { Self::Redacted }
    }

    /// Mark `error` exposed when the policy is verbose.
    #[must_use]
    pub fn apply(self, error: Error) -> Error {
        match self {
            Self::Verbose => error.exposed(),
            Self::Redacted => error,
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn envelope(error: &Error) -> Value {
    match error.code() {
        ErrorCode::UnprocessableEntity => {
            let fields = error.field_errors().cloned().unwrap_or_else(Map::new);
            json!({ "errors": fields })
        }
        ErrorCode::InternalError if !error.is_exposed() => json!({ "error": REDACTED_MESSAGE }),
        _ => json!({ "error": error.message() }),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(
                message = self.message(),
                trace_id = self.trace_id().unwrap_or_default(),
                "request failed with internal error"
            );
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(envelope(self))
    }
}
