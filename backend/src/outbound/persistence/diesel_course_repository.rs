//! PostgreSQL-backed `CourseRepository` implementation using Diesel ORM.
//!
//! Listing runs two statements sharing one filter: a `COUNT(*)` for the
//! total and the ordered page itself. Uniqueness is left to the
//! `courses_title_key` index; the adapter classifies the violation.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Page, PageRequest};
use tracing::debug;

use crate::domain::ports::{CourseListQuery, CourseRepository, CourseRepositoryError};
use crate::domain::{Course, CourseId, NewCourse};

use super::error_classifier::{StorageFailure, classify_diesel_error, classify_pool_error};
use super::models::{CourseRow, NewCourseRow};
use super::pool::DbPool;
use super::schema::courses;

const COURSES_TITLE_KEY: &str = "courses_title_key";

/// Diesel-backed implementation of the course repository port.
#[derive(Clone)]
pub struct DieselCourseRepository {
    pool: DbPool,
}

impl DieselCourseRepository {
    /// Create a new repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use catalog_api::outbound::persistence::{DbPool, DieselCourseRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/course_catalog")).await?;
    /// let repository = DieselCourseRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map a classified failure onto the port error.
///
/// A unique violation counts as a title clash when it names the title index
/// or when the driver did not report a constraint name.
fn map_storage_failure(failure: StorageFailure, title: Option<&str>) -> CourseRepositoryError {
    match failure {
        ref clash if clash.violates(COURSES_TITLE_KEY) => {
            CourseRepositoryError::duplicate_title(title.unwrap_or_default())
        }
        StorageFailure::UniqueViolation { constraint: None } => {
            CourseRepositoryError::duplicate_title(title.unwrap_or_default())
        }
        StorageFailure::Connection { message } => CourseRepositoryError::connection(message),
        other => CourseRepositoryError::query(other.to_string()),
    }
}

fn map_row(row: CourseRow) -> Result<Course, CourseRepositoryError> {
    let id = row.id;
    Course::try_from(row).map_err(|err| {
        debug!(course_id = %id, error = %err, "stored course failed validation");
        CourseRepositoryError::query(format!("stored course {id} is invalid: {err}"))
    })
}

/// Escape `LIKE` metacharacters so `fragment` matches literally.
fn like_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len().saturating_add(2));
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn filtered(title_contains: Option<&str>) -> courses::BoxedQuery<'static, Pg> {
    let query = courses::table.into_boxed();
    match title_contains {
        Some(fragment) => query.filter(courses::title.like(like_pattern(fragment))),
        None => query,
    }
}

fn limit_and_offset(page: PageRequest) -> (i64, i64) {
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    (i64::from(page.limit()), offset)
}

#[async_trait]
impl CourseRepository for DieselCourseRepository {
    async fn list(&self, query: &CourseListQuery) -> Result<Page<Course>, CourseRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_storage_failure(classify_pool_error(err), None))?;
        let fragment = query.title_contains.as_deref();

        let total: i64 = filtered(fragment)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_storage_failure(classify_diesel_error(err), None))?;

        let (limit, offset) = limit_and_offset(query.page);
        let rows: Vec<CourseRow> = filtered(fragment)
            .order((courses::created_at.desc(), courses::id.desc()))
            .limit(limit)
            .offset(offset)
            .load(&mut conn)
            .await
            .map_err(|err| map_storage_failure(classify_diesel_error(err), None))?;

        let data = rows
            .into_iter()
            .map(map_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(
            data,
            query.page,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_storage_failure(classify_pool_error(err), None))?;

        let row: Option<CourseRow> = courses::table
            .find(*id.as_uuid())
            .select(CourseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_storage_failure(classify_diesel_error(err), None))?;

        row.map(map_row).transpose()
    }

    async fn insert(&self, course: &NewCourse) -> Result<Course, CourseRepositoryError> {
        let title = Some(course.title().as_ref());
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_storage_failure(classify_pool_error(err), title))?;

        let row: CourseRow = diesel::insert_into(courses::table)
            .values(NewCourseRow::from(course))
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_storage_failure(classify_diesel_error(err), title))?;

        map_row(row)
    }
}
