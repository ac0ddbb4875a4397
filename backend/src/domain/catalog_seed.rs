//! Seeding the catalog with deterministic example data.
//!
//! [`CatalogSeeder`] converts generated records into validated insert shapes
//! and hands them to the [`CatalogSeedRepository`] as one atomic batch.

use std::sync::Arc;

use example_data::{CatalogSeedData, GenerationError, SeedSpec, generate_catalog_seed};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{CatalogSeed, CatalogSeedRepository, CatalogSeedRepositoryError};
use crate::domain::{CourseValidationError, NewCourse, NewEnrollment, NewUser, UserValidationError};

/// Errors raised while seeding the catalog.
#[derive(Debug, Error)]
pub enum CatalogSeedingError {
    /// The generator could not produce the requested data.
    #[error("catalog generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated user failed domain validation.
    #[error("generated user {index} is invalid: {source}")]
    InvalidUser {
        /// Position of the user in the generated data.
        index: usize,
        /// Underlying validation failure.
        #[source]
        source: UserValidationError,
    },
    /// A generated course failed domain validation.
    #[error("generated course {index} is invalid: {source}")]
    InvalidCourse {
        /// Position of the course in the generated data.
        index: usize,
        /// Underlying validation failure.
        #[source]
        source: CourseValidationError,
    },
    /// An enrollment referenced a user or course that was not generated.
    #[error("enrollment {index} references a missing user or course")]
    DanglingEnrollment {
        /// Position of the enrollment in the generated data.
        index: usize,
    },
    /// Persisting the catalog failed; nothing was stored.
    #[error("catalog persistence failed: {0}")]
    Repository(#[from] CatalogSeedRepositoryError),
}

/// Counts of rows stored by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSeedOutcome {
    /// RNG seed used for generation.
    pub seed: u64,
    /// Users inserted.
    pub users: usize,
    /// Courses inserted.
    pub courses: usize,
    /// Enrollments inserted.
    pub enrollments: usize,
}

/// Domain service seeding the catalog.
#[derive(Clone)]
pub struct CatalogSeeder {
    repository: Arc<dyn CatalogSeedRepository>,
}

impl CatalogSeeder {
    /// Create a seeder backed by the given repository.
    pub fn new(repository: Arc<dyn CatalogSeedRepository>) -> Self {
        Self { repository }
    }

    /// Generate a catalog from `spec` and insert it in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogSeedingError`] when generation, validation, or
    /// persistence fails. A persistence failure leaves no rows behind.
    pub async fn seed(&self, spec: &SeedSpec) -> Result<CatalogSeedOutcome, CatalogSeedingError> {
        let data = generate_catalog_seed(spec)?;
        let seed = build_catalog_seed(&data)?;
        let stored = self.repository.insert_catalog(seed).await?;

        let outcome = CatalogSeedOutcome {
            seed: spec.seed,
            users: stored.users.len(),
            courses: stored.courses.len(),
            enrollments: stored.enrollments.len(),
        };
        info!(
            seed = outcome.seed,
            users = outcome.users,
            courses = outcome.courses,
            enrollments = outcome.enrollments,
            "catalog seeded"
        );
        Ok(outcome)
    }
}

fn build_catalog_seed(data: &CatalogSeedData) -> Result<CatalogSeed, CatalogSeedingError> {
    let users = data
        .users
        .iter()
        .enumerate()
        .map(|(index, user)| {
            NewUser::new(&user.email, &user.name)
                .map_err(|source| CatalogSeedingError::InvalidUser { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let courses = data
        .courses
        .iter()
        .enumerate()
        .map(|(index, course)| {
            NewCourse::new(&course.title, Some(course.description.as_str()))
                .map_err(|source| CatalogSeedingError::InvalidCourse { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let enrollments = data
        .enrollments
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            let user = users.get(pair.user_index);
            let course = courses.get(pair.course_index);
            match (user, course) {
                (Some(user), Some(course)) => Ok(NewEnrollment::new(user.id(), course.id())),
                _ => Err(CatalogSeedingError::DanglingEnrollment { index }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CatalogSeed {
        users,
        courses,
        enrollments,
    })
}
