//! Prometheus adapter for course catalog metrics.
//!
//! Registers the `total_created_courses` counter with the registry served
//! at `/metrics`.

use async_trait::async_trait;
use prometheus::{IntCounter, Registry};

use crate::domain::ports::{CourseMetrics, CourseMetricsError};

/// Name of the course creation counter.
pub const COURSES_CREATED_METRIC: &str = "total_created_courses";

/// Prometheus-backed course metrics recorder.
pub struct PrometheusCourseMetrics {
    created: IntCounter,
}

impl PrometheusCourseMetrics {
    /// Create and register metrics with the given registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the counter cannot be registered, for example when
    /// a metric with the same name already exists in the registry.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let created = IntCounter::new(
            COURSES_CREATED_METRIC,
            "Total number of courses created",
        )?;
        registry.register(Box::new(created.clone()))?;
        Ok(Self { created })
    }
}

#[async_trait]
impl CourseMetrics for PrometheusCourseMetrics {
    async fn record_course_created(&self) -> Result<(), CourseMetricsError> {
        self.created.inc();
        Ok(())
    }
}
