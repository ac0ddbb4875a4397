//! Course catalog use-cases.
//!
//! [`CourseService`] implements the driving ports [`CourseQuery`] and
//! [`CourseCommand`] on top of the driven [`CourseRepository`] port. It holds
//! no entity state between requests.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CourseCommand, CourseListQuery, CourseMetrics, CourseQuery, CourseRepository,
    CourseRepositoryError, ListCoursesRequest, NoOpCourseMetrics,
};
use crate::domain::{
    Course, CourseId, CourseValidator, CreateCourseRequest, Error, FieldErrors, IdentifierError,
    NewCourse,
};

/// Course catalog service backed by a repository.
#[derive(Clone)]
pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
    validator: CourseValidator,
    metrics: Arc<dyn CourseMetrics>,
}

impl CourseService {
    /// Create a service from its collaborators.
    pub fn new(
        repository: Arc<dyn CourseRepository>,
        validator: CourseValidator,
        metrics: Arc<dyn CourseMetrics>,
    ) -> Self {
        Self {
            repository,
            validator,
            metrics,
        }
    }

    /// Create a service that discards metrics.
    pub fn with_noop_metrics(
        repository: Arc<dyn CourseRepository>,
        validator: CourseValidator,
    ) -> Self {
        Self::new(repository, validator, Arc::new(NoOpCourseMetrics))
    }
}

fn map_repository_error(error: CourseRepositoryError) -> Error {
    match error {
        CourseRepositoryError::DuplicateTitle { .. } => Error::conflict("title already exists"),
        other => Error::internal(other.to_string()),
    }
}

fn parse_course_id(raw: &str) -> Result<CourseId, Error> {
    raw.parse().map_err(|err| match err {
        IdentifierError::Empty => Error::invalid_request("courseId is required"),
        IdentifierError::Invalid => Error::invalid_request("invalid courseId"),
    })
}

fn title_filter(q: Option<&str>) -> Option<String> {
    q.map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_owned)
}

#[async_trait]
impl CourseQuery for CourseService {
    async fn list_courses(&self, request: ListCoursesRequest) -> Result<Page<Course>, Error> {
        let page = PageRequest::from_query(request.page.as_deref(), request.limit.as_deref())
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let query = CourseListQuery {
            title_contains: title_filter(request.q.as_deref()),
            page,
        };
        self.repository
            .list(&query)
            .await
            .map_err(map_repository_error)
    }

    async fn get_course(&self, raw_id: &str) -> Result<Course, Error> {
        let id = parse_course_id(raw_id)?;
        self.repository
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("course not found"))
    }
}

#[async_trait]
impl CourseCommand for CourseService {
    async fn create_course(&self, request: CreateCourseRequest) -> Result<CourseId, Error> {
        let violations = self.validator.validate(&request);
        if !violations.is_empty() {
            debug!(
                fields = ?violations.keys().collect::<Vec<_>>(),
                "course rejected by validation"
            );
            return Err(Error::unprocessable(violations));
        }

        let new_course = NewCourse::new(request.title().unwrap_or_default(), request.description())
            .map_err(|err| {
                let mut fields = FieldErrors::new();
                fields.insert(err.field().to_owned(), "is invalid".to_owned());
                Error::unprocessable(fields)
            })?;

        let course = self
            .repository
            .insert(&new_course)
            .await
            .map_err(map_repository_error)?;

        if let Err(error) = self.metrics.record_course_created().await {
            warn!(%error, "failed to record course creation metric");
        }
        info!(course_id = %course.id(), "course created");
        Ok(course.id())
    }
}
