//! Port abstraction for inserting seed catalogs.
//!
//! Adapters must insert users, courses, and enrollments atomically: either
//! every row is stored or none is.

use async_trait::async_trait;

use crate::domain::{Course, Enrollment, NewCourse, NewEnrollment, NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by catalog seed repository adapters.
    pub enum CatalogSeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "catalog seeding connection failed: {message}",
        /// A row collided with an existing unique key.
        Conflict { constraint: String } => "catalog seeding conflicts with {constraint}",
        /// Query or mutation failed during execution.
        Query { message: String } => "catalog seeding query failed: {message}",
    }
}

/// Rows to insert in one seeding transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSeed {
    /// Users to insert.
    pub users: Vec<NewUser>,
    /// Courses to insert.
    pub courses: Vec<NewCourse>,
    /// Enrollments referencing the users and courses above.
    pub enrollments: Vec<NewEnrollment>,
}

/// Records stored by a seeding transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeededCatalog {
    /// Stored users.
    pub users: Vec<User>,
    /// Stored courses.
    pub courses: Vec<Course>,
    /// Stored enrollments.
    pub enrollments: Vec<Enrollment>,
}

/// Port for applying a seed catalog in a single transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSeedRepository: Send + Sync {
    /// Insert every row of `seed`, rolling back on the first failure.
    async fn insert_catalog(
        &self,
        seed: CatalogSeed,
    ) -> Result<SeededCatalog, CatalogSeedRepositoryError>;
}
