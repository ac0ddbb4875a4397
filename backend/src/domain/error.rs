//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps each
//! [`ErrorCode`] to a status code and renders the uniform JSON envelope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::TraceId;

/// Per-field validation messages keyed by lower-case field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed.
    InvalidRequest,
    /// The request parsed but failed field validation.
    UnprocessableEntity,
    /// The requested resource does not exist.
    NotFound,
    /// The request conflicts with existing state.
    Conflict,
    /// An unexpected error occurred inside the service.
    InternalError,
}

/// Domain error payload.
///
/// Errors capture the active [`TraceId`] on construction so the rendered
/// response can be correlated with server logs.
///
/// # Examples
/// ```
/// use catalog_api::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("course not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "course not found");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    details: Option<Value>,
    trace_id: Option<String>,
    exposed: bool,
}

impl Error {
    /// Create a new error, capturing the current trace identifier.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
            exposed: false,
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Underlying message. Adapters decide whether clients may see it.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary structured details.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Correlation identifier captured when the error was created.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Whether an internal message may be shown to clients verbatim.
    #[must_use]
    pub fn is_exposed(&self) -> bool {
        self.exposed
    }

    /// Attach structured details to the error.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a trace identifier to the error.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Allow the underlying message of an internal error to reach clients.
    #[must_use]
    pub fn exposed(mut self) -> Self {
        self.exposed = true;
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Field validation failure carrying every violated field.
    ///
    /// # Examples
    /// ```
    /// use catalog_api::domain::{Error, ErrorCode, FieldErrors};
    ///
    /// let mut fields = FieldErrors::new();
    /// fields.insert("title".to_owned(), "is required".to_owned());
    /// let err = Error::unprocessable(fields);
    /// assert_eq!(err.code(), ErrorCode::UnprocessableEntity);
    /// assert!(err.field_errors().is_some());
    /// ```
    pub fn unprocessable(fields: FieldErrors) -> Self {
        let details = fields
            .into_iter()
            .map(|(field, message)| (field, Value::String(message)))
            .collect();
        Self::new(ErrorCode::UnprocessableEntity, "validation failed")
            .with_details(Value::Object(details))
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Field errors attached by [`Error::unprocessable`], if any.
    #[must_use]
    pub fn field_errors(&self) -> Option<&serde_json::Map<String, Value>> {
        match (&self.code, &self.details) {
            (ErrorCode::UnprocessableEntity, Some(Value::Object(map))) => Some(map),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
