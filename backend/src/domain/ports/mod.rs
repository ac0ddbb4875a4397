//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod catalog_seed_repository;
mod course_command;
mod course_metrics;
mod course_query;
mod course_repository;

#[cfg(test)]
pub use catalog_seed_repository::MockCatalogSeedRepository;
pub use catalog_seed_repository::{
    CatalogSeed, CatalogSeedRepository, CatalogSeedRepositoryError, SeededCatalog,
};
pub use course_command::CourseCommand;
#[cfg(test)]
pub use course_metrics::MockCourseMetrics;
pub use course_metrics::{CourseMetrics, CourseMetricsError, NoOpCourseMetrics};
pub use course_query::{CourseQuery, ListCoursesRequest};
#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{CourseListQuery, CourseRepository, CourseRepositoryError};
