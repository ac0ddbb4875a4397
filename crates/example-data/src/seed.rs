//! Seed request and generated record types.

use serde::{Deserialize, Serialize};

/// Number of users generated when no count is supplied.
pub const DEFAULT_USER_COUNT: usize = 3;
/// Number of courses generated when no count is supplied.
pub const DEFAULT_COURSE_COUNT: usize = 2;

/// Parameters controlling a generation run.
///
/// The same spec always yields identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSpec {
    /// RNG seed.
    pub seed: u64,
    /// Number of users to generate.
    pub user_count: usize,
    /// Number of courses to generate.
    pub course_count: usize,
}

impl SeedSpec {
    /// Spec with the default user and course counts.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            user_count: DEFAULT_USER_COUNT,
            course_count: DEFAULT_COURSE_COUNT,
        }
    }

    /// Override the number of users.
    #[must_use]
    pub const fn with_user_count(mut self, user_count: usize) -> Self {
        self.user_count = user_count;
        self
    }

    /// Override the number of courses.
    #[must_use]
    pub const fn with_course_count(mut self, course_count: usize) -> Self {
        self.course_count = course_count;
        self
    }
}

/// A generated user. Emails are lower-case and unique within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSeed {
    /// Lower-case email address.
    pub email: String,
    /// Full name.
    pub name: String,
}

/// A generated course. Titles are unique within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSeed {
    /// Course title.
    pub title: String,
    /// Course description.
    pub description: String,
}

/// Enrollment expressed as indexes into the generated users and courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentSeed {
    /// Index into [`CatalogSeedData::users`].
    pub user_index: usize,
    /// Index into [`CatalogSeedData::courses`].
    pub course_index: usize,
}

/// Complete output of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSeedData {
    /// Generated users.
    pub users: Vec<UserSeed>,
    /// Generated courses.
    pub courses: Vec<CourseSeed>,
    /// Enrollment pairs; each `(user, course)` pair appears once.
    pub enrollments: Vec<EnrollmentSeed>,
}
