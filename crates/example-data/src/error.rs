//! Error types for the example-data crate.

use thiserror::Error;

/// Errors that can occur during catalog data generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Could not produce enough distinct emails after the retry budget.
    #[error("failed to generate {wanted} unique emails after {max_attempts} attempts")]
    EmailsExhausted {
        /// Number of emails requested.
        wanted: usize,
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// Could not produce enough distinct course titles after the retry budget.
    #[error("failed to generate {wanted} unique course titles after {max_attempts} attempts")]
    TitlesExhausted {
        /// Number of titles requested.
        wanted: usize,
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// Users were requested but no course exists to enroll them in.
    #[error("cannot enroll {user_count} users without any courses")]
    NoCoursesForEnrollment {
        /// Number of users awaiting enrollment.
        user_count: usize,
    },
}
