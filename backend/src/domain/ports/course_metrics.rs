//! Domain port for recording course catalog metrics.
//!
//! Implementations may export to Prometheus or discard the events; the
//! service treats recording failures as non-fatal.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors exposed when recording course metrics.
    pub enum CourseMetricsError {
        /// Metric exporter rejected the write.
        Export { message: String } => "course metrics exporter failed: {message}",
    }
}

/// Metrics recording port for catalog mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseMetrics: Send + Sync {
    /// Record a successfully created course.
    async fn record_course_created(&self) -> Result<(), CourseMetricsError>;
}

/// No-op implementation for when metrics are disabled or in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpCourseMetrics;

#[async_trait]
impl CourseMetrics for NoOpCourseMetrics {
    async fn record_course_created(&self) -> Result<(), CourseMetricsError> {
        Ok(())
    }
}
