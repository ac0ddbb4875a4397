//! Enrollment join records linking one user to one course.

use chrono::{DateTime, Utc};

use super::identifiers::define_uuid_id;
use super::{CourseId, UserId};

define_uuid_id! {
    /// Stable enrollment identifier.
    EnrollmentId
}

/// Persisted enrollment record. `(user_id, course_id)` is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    id: EnrollmentId,
    user_id: UserId,
    course_id: CourseId,
    created_at: DateTime<Utc>,
}

impl Enrollment {
    /// Assemble an enrollment from stored parts.
    #[must_use]
    pub fn new(
        id: EnrollmentId,
        user_id: UserId,
        course_id: CourseId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            course_id,
            created_at,
        }
    }

    /// Enrollment identifier.
    #[must_use]
    pub fn id(&self) -> EnrollmentId {
        self.id
    }

    /// Enrolled user.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Course the user is enrolled in.
    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// Server-assigned creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Insert shape for an enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewEnrollment {
    id: EnrollmentId,
    user_id: UserId,
    course_id: CourseId,
}

impl NewEnrollment {
    /// Link a user to a course under a freshly generated identifier.
    #[must_use]
    pub fn new(user_id: UserId, course_id: CourseId) -> Self {
        Self {
            id: EnrollmentId::random(),
            user_id,
            course_id,
        }
    }

    /// Identifier assigned before the insert.
    #[must_use]
    pub fn id(&self) -> EnrollmentId {
        self.id
    }

    /// Enrolled user.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Course the user is enrolled in.
    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }
}
