//! Driven port for course persistence.
//!
//! Adapters translate storage failures into [`CourseRepositoryError`]; the
//! domain never sees the storage engine's native error representation.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Course, CourseId, NewCourse};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by course repository adapters.
    pub enum CourseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "course repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "course repository query failed: {message}",
        /// Another course already holds the title.
        DuplicateTitle { title: String } => "course title already exists: {title}",
    }
}

/// Filter and page for a course listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseListQuery {
    /// Case-sensitive substring the title must contain; `None` matches all.
    pub title_contains: Option<String>,
    /// Page to return.
    pub page: PageRequest,
}

/// Port for reading and inserting courses.
///
/// Implementations must:
/// - order listings by creation time, newest first, with ties broken by id;
/// - report `total` over every matching course, ignoring pagination;
/// - rely on the storage uniqueness constraint for titles rather than
///   checking beforehand.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Return one page of courses matching the filter.
    async fn list(&self, query: &CourseListQuery) -> Result<Page<Course>, CourseRepositoryError>;

    /// Fetch a course by identifier; `Ok(None)` when absent.
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError>;

    /// Insert a normalised course and return the stored record.
    async fn insert(&self, course: &NewCourse) -> Result<Course, CourseRepositoryError>;
}
