//! In-memory doubles for exercising the HTTP stack without PostgreSQL.
//!
//! Compiled for unit tests and, via the `test-support` feature, for the
//! integration suites under `backend/tests`.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use pagination::Page;

use crate::domain::ports::{
    CourseListQuery, CourseMetrics, CourseMetricsError, CourseRepository, CourseRepositoryError,
};
use crate::domain::{Course, CourseId, NewCourse};

#[derive(Default)]
struct Store {
    courses: Vec<Course>,
    last_created_at: Option<DateTime<Utc>>,
}

/// `CourseRepository` backed by a vector.
///
/// Mirrors the PostgreSQL adapter: exact-title uniqueness, case-sensitive
/// substring filtering, newest-first ordering with ties broken by id, and
/// strictly increasing creation timestamps.
#[derive(Clone, Default)]
pub struct InMemoryCourseRepository {
    store: Arc<Mutex<Store>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryCourseRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a connection error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored courses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().courses.len()
    }

    /// Whether no course is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_available(&self) -> Result<(), CourseRepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CourseRepositoryError::connection("in-memory store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn list(&self, query: &CourseListQuery) -> Result<Page<Course>, CourseRepositoryError> {
        self.check_available()?;
        let store = self.lock();

        let mut matching: Vec<&Course> = store
            .courses
            .iter()
            .filter(|course| {
                query
                    .title_contains
                    .as_deref()
                    .is_none_or(|fragment| course.title().as_ref().contains(fragment))
            })
            .collect();
        matching.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });

        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let offset = usize::try_from(query.page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.page.limit()).unwrap_or(usize::MAX);
        let data = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(Page::new(data, query.page, total))
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        self.check_available()?;
        Ok(self
            .lock()
            .courses
            .iter()
            .find(|course| course.id() == *id)
            .cloned())
    }

    async fn insert(&self, course: &NewCourse) -> Result<Course, CourseRepositoryError> {
        self.check_available()?;
        let mut store = self.lock();

        if store
            .courses
            .iter()
            .any(|existing| existing.title() == course.title())
        {
            return Err(CourseRepositoryError::duplicate_title(
                course.title().as_ref(),
            ));
        }

        let now = Utc::now();
        let created_at = match store.last_created_at {
            Some(last) if last >= now => last + TimeDelta::microseconds(1),
            _ => now,
        };
        store.last_created_at = Some(created_at);

        let stored = Course::new(
            course.id(),
            course.title().clone(),
            course.description().cloned(),
            created_at,
        );
        store.courses.push(stored.clone());
        Ok(stored)
    }
}

/// `CourseMetrics` double counting recorded creations.
#[derive(Clone, Default)]
pub struct CountingCourseMetrics {
    created: Arc<AtomicUsize>,
}

impl CountingCourseMetrics {
    /// Number of creations recorded so far.
    #[must_use]
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CourseMetrics for CountingCourseMetrics {
    async fn record_course_created(&self) -> Result<(), CourseMetricsError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
