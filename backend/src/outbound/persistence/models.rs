//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Reads convert back into domain records
//! through the same validating constructors the services use.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Course, CourseDescription, CourseId, CourseTitle, CourseValidationError, DisplayName,
    EmailAddress, Enrollment, EnrollmentId, NewCourse, NewEnrollment, NewUser, User, UserId,
    UserValidationError,
};

use super::schema::{courses, enrollments, users};

/// Row struct for reading from the courses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CourseRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<CourseRow> for Course {
    type Error = CourseValidationError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        Ok(Self::new(
            CourseId::from_uuid(row.id),
            CourseTitle::new(row.title)?,
            CourseDescription::new(row.description),
            row.created_at,
        ))
    }
}

/// Insertable struct for creating course records.
///
/// An absent description is stored as the empty string.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = courses)]
pub(crate) struct NewCourseRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a NewCourse> for NewCourseRow<'a> {
    fn from(course: &'a NewCourse) -> Self {
        Self {
            id: *course.id().as_uuid(),
            title: course.title().as_ref(),
            description: course.description().map_or("", AsRef::as_ref),
        }
    }
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self::new(
            UserId::from_uuid(row.id),
            EmailAddress::new(row.email)?,
            DisplayName::new(row.name)?,
            row.created_at,
        ))
    }
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub name: &'a str,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            id: *user.id().as_uuid(),
            email: user.email().as_ref(),
            name: user.name().as_ref(),
        }
    }
}

/// Row struct for reading from the enrollments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = enrollments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EnrollmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Self::new(
            EnrollmentId::from_uuid(row.id),
            UserId::from_uuid(row.user_id),
            CourseId::from_uuid(row.course_id),
            row.created_at,
        )
    }
}

/// Insertable struct for creating enrollment records.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = enrollments)]
pub(crate) struct NewEnrollmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
}

impl From<&NewEnrollment> for NewEnrollmentRow {
    fn from(enrollment: &NewEnrollment) -> Self {
        Self {
            id: *enrollment.id().as_uuid(),
            user_id: *enrollment.user_id().as_uuid(),
            course_id: *enrollment.course_id().as_uuid(),
        }
    }
}
