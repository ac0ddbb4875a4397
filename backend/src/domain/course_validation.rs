//! Field validation for course creation requests.
//!
//! [`CourseValidator`] holds an ordered rule list per field. Every field is
//! checked; for each field only the first failing rule is reported, and all
//! violations are returned together.
//!
//! Rules see the values exactly as received. Trimming happens afterwards,
//! when [`NewCourse`](super::NewCourse) is built for storage.

use serde::Deserialize;
use utoipa::ToSchema;

use super::{COURSE_TEXT_MIN, COURSE_TITLE_MAX, FieldErrors};

/// Raw create-course payload as received from the client.
///
/// Fields are optional so a missing title reaches validation instead of
/// failing deserialisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    /// Course title; required, 3 to 255 characters as sent, trimmed when stored.
    #[schema(example = "Intro to Rust")]
    pub title: Option<String>,
    /// Optional description; at least 3 characters as sent, trimmed when stored.
    #[schema(example = "Ownership, borrowing and lifetimes")]
    pub description: Option<String>,
}

impl CreateCourseRequest {
    /// Title as received, `None` when absent.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Description as received, `None` when absent.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A single check applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Value must be present and non-empty.
    Required,
    /// Value must have at least this many characters.
    MinLength(usize),
    /// Value must have at most this many characters.
    MaxLength(usize),
}

impl FieldRule {
    /// Whether `value` satisfies the rule, counting characters.
    fn accepts(self, value: &str) -> bool {
        let length = value.chars().count();
        match self {
            Self::Required => length > 0,
            Self::MinLength(min) => length >= min,
            Self::MaxLength(max) => length <= max,
        }
    }

    /// Client-facing message for a violation of this rule.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => "is required",
            Self::MinLength(_) => "too short",
            Self::MaxLength(_) => "is invalid",
        }
    }
}

type Extractor = fn(&CreateCourseRequest) -> Option<&str>;

#[derive(Debug, Clone)]
struct FieldRules {
    name: &'static str,
    extract: Extractor,
    rules: Vec<FieldRule>,
}

impl FieldRules {
    fn first_violation(&self, request: &CreateCourseRequest) -> Option<FieldRule> {
        let value = (self.extract)(request).unwrap_or_default();
        let required = self.rules.contains(&FieldRule::Required);
        if value.is_empty() && !required {
            return None;
        }
        self.rules.iter().copied().find(|rule| !rule.accepts(value))
    }
}

/// Stateless validator for [`CreateCourseRequest`].
///
/// Build it once at startup and hand it to the course service.
///
/// # Examples
/// ```
/// use catalog_api::domain::{CourseValidator, CreateCourseRequest};
///
/// let validator = CourseValidator::new();
/// let request = CreateCourseRequest {
///     title: Some(String::new()),
///     description: Some("ab".to_owned()),
/// };
/// let errors = validator.validate(&request);
/// assert_eq!(errors.get("title").map(String::as_str), Some("is required"));
/// assert_eq!(errors.get("description").map(String::as_str), Some("too short"));
/// ```
#[derive(Debug, Clone)]
pub struct CourseValidator {
    fields: Vec<FieldRules>,
}

impl Default for CourseValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseValidator {
    /// Validator with the catalog's course rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: vec![
                FieldRules {
                    name: "Title",
                    extract: CreateCourseRequest::title,
                    rules: vec![
                        FieldRule::Required,
                        FieldRule::MinLength(COURSE_TEXT_MIN),
                        FieldRule::MaxLength(COURSE_TITLE_MAX),
                    ],
                },
                FieldRules {
                    name: "Description",
                    extract: CreateCourseRequest::description,
                    rules: vec![FieldRule::MinLength(COURSE_TEXT_MIN)],
                },
            ],
        }
    }

    /// Check every field, returning one message per violated field.
    ///
    /// An empty map means the request is valid.
    #[must_use]
    pub fn validate(&self, request: &CreateCourseRequest) -> FieldErrors {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .first_violation(request)
                    .map(|rule| (field.name.to_lowercase(), rule.message().to_owned()))
            })
            .collect()
    }
}
