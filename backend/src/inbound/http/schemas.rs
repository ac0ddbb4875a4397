//! OpenAPI schema definitions for HTTP envelopes.
//!
//! The error envelopes are rendered with `serde_json::json!` in
//! [`super::error`]; the structs here describe them for the OpenAPI document.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::CourseDto;

/// Error envelope for every failure except validation.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorBody {
    /// Human-readable message.
    #[schema(example = "course not found")]
    error: String,
}

/// Error envelope for field validation failures.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationErrorBody {
    /// Violation message per lower-case field name.
    #[schema(example = json!({"title": "is required"}))]
    errors: BTreeMap<String, String>,
}

/// One page of courses.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CoursePage {
    /// Courses on this page, newest first.
    data: Vec<CourseDto>,
    /// Effective one-based page number.
    #[schema(example = 1)]
    page: u64,
    /// Effective page size.
    #[schema(example = 10)]
    limit: u32,
    /// Count of all matching courses, ignoring pagination.
    #[schema(example = 42)]
    total: u64,
}

/// Single-course response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseEnvelope {
    /// The requested course.
    pub course: CourseDto,
}

/// Body returned after a course is created.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCourse {
    /// Identifier of the new course.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub course_id: Uuid,
}
