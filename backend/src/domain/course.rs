//! Course catalog entries.
//!
//! Construction functions trim their input, so a [`NewCourse`] handed to the
//! repository is always normalised. Minimum lengths are request rules checked
//! by [`CourseValidator`](super::CourseValidator) before trimming; the value
//! objects only enforce the storage bound on titles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::identifiers::define_uuid_id;

/// Minimum number of characters in a title or description.
pub const COURSE_TEXT_MIN: usize = 3;
/// Maximum number of characters in a title.
pub const COURSE_TITLE_MAX: usize = 255;

define_uuid_id! {
    /// Stable course identifier.
    CourseId
}

/// Validation errors raised by the course value objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CourseValidationError {
    /// Title has more than [`COURSE_TITLE_MAX`] characters after trimming.
    #[error("title must be at most {max} characters")]
    TitleTooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

impl CourseValidationError {
    /// Lower-case name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::TitleTooLong { .. } => "title",
        }
    }
}

/// Trimmed, unique-per-catalog course title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseTitle(String);

impl CourseTitle {
    /// Trim a title and check it fits the `VARCHAR(255)` column.
    ///
    /// # Examples
    /// ```
    /// use catalog_api::domain::CourseTitle;
    ///
    /// let title = CourseTitle::new("  Intro to Rust ").expect("valid title");
    /// assert_eq!(title.as_ref(), "Intro to Rust");
    /// assert_eq!(CourseTitle::new("  ab  ").expect("fits").as_ref(), "ab");
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CourseValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.chars().count() > COURSE_TITLE_MAX {
            return Err(CourseValidationError::TitleTooLong {
                max: COURSE_TITLE_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for CourseTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<CourseTitle> for String {
    fn from(value: CourseTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for CourseTitle {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Trimmed, non-blank course description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDescription(String);

impl CourseDescription {
    /// Trim a description; blank input is an absent description.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for CourseDescription {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Persisted course record.
///
/// Serialises as `{"id", "title", "description", "created_at"}` with an
/// RFC 3339 timestamp and `""` for an absent description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "CourseDto")]
pub struct Course {
    id: CourseId,
    title: CourseTitle,
    description: Option<CourseDescription>,
    created_at: DateTime<Utc>,
}

impl Course {
    /// Assemble a course from validated parts.
    #[must_use]
    pub fn new(
        id: CourseId,
        title: CourseTitle,
        description: Option<CourseDescription>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            created_at,
        }
    }

    /// Course identifier.
    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    /// Course title.
    #[must_use]
    pub fn title(&self) -> &CourseTitle {
        &self.title
    }

    /// Course description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&CourseDescription> {
        self.description.as_ref()
    }

    /// Server-assigned creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Wire shape of a [`Course`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = Course)]
pub struct CourseDto {
    /// Course identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: uuid::Uuid,
    /// Unique title.
    #[schema(example = "Intro to Rust")]
    pub title: String,
    /// Description; empty when absent.
    #[schema(example = "Ownership, borrowing and lifetimes")]
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Course> for CourseDto {
    fn from(value: Course) -> Self {
        Self {
            id: *value.id.as_uuid(),
            title: value.title.into(),
            description: value.description.map(|d| d.0).unwrap_or_default(),
            created_at: value.created_at,
        }
    }
}

/// Insert shape for a course, normalised at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    id: CourseId,
    title: CourseTitle,
    description: Option<CourseDescription>,
}

impl NewCourse {
    /// Build an insertable course with a freshly generated identifier.
    ///
    /// Title and description are trimmed; request rules are not re-checked.
    ///
    /// # Examples
    /// ```
    /// use catalog_api::domain::NewCourse;
    ///
    /// let course = NewCourse::new(" Intro to X ", Some("  desc ")).expect("valid course");
    /// assert_eq!(course.title().as_ref(), "Intro to X");
    /// assert_eq!(course.description().map(AsRef::as_ref), Some("desc"));
    /// ```
    pub fn new(title: &str, description: Option<&str>) -> Result<Self, CourseValidationError> {
        Ok(Self {
            id: CourseId::random(),
            title: CourseTitle::new(title)?,
            description: description.and_then(CourseDescription::new),
        })
    }

    /// Identifier assigned before the insert.
    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    /// Normalised title.
    #[must_use]
    pub fn title(&self) -> &CourseTitle {
        &self.title
    }

    /// Normalised description.
    #[must_use]
    pub fn description(&self) -> Option<&CourseDescription> {
        self.description.as_ref()
    }
}
