//! Driving port for course mutations.

use async_trait::async_trait;

use crate::domain::{CourseId, CreateCourseRequest, Error};

/// Domain use-case port for adding courses to the catalog.
#[async_trait]
pub trait CourseCommand: Send + Sync {
    /// Validate, normalise, and persist a course, returning its identifier.
    async fn create_course(&self, request: CreateCourseRequest) -> Result<CourseId, Error>;
}
