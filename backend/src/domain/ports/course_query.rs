//! Driving port for course reads.
//!
//! Inbound adapters pass raw client input; parsing and validation happen
//! behind the port so every adapter reports the same errors.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Course, Error};

/// Raw listing parameters as supplied by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCoursesRequest {
    /// One-based page; absent or empty means the first page.
    pub page: Option<String>,
    /// Page size; absent or empty means the default size.
    pub limit: Option<String>,
    /// Title substring filter; trimmed, empty means no filter.
    pub q: Option<String>,
}

/// Domain use-case port for reading the catalog.
#[async_trait]
pub trait CourseQuery: Send + Sync {
    /// List courses, newest first.
    async fn list_courses(&self, request: ListCoursesRequest) -> Result<Page<Course>, Error>;

    /// Fetch a single course by its raw identifier.
    async fn get_course(&self, raw_id: &str) -> Result<Course, Error>;
}
