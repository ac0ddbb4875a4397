//! PostgreSQL-backed catalog seeding adapter.
//!
//! This adapter implements the `CatalogSeedRepository` port, inserting users,
//! courses and enrollments within a single transaction. Any failure rolls the
//! whole batch back.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{
    CatalogSeed, CatalogSeedRepository, CatalogSeedRepositoryError, SeededCatalog,
};
use crate::domain::{Course, Enrollment, User};

use super::error_classifier::{StorageFailure, classify_diesel_error, classify_pool_error};
use super::models::{
    CourseRow, EnrollmentRow, NewCourseRow, NewEnrollmentRow, NewUserRow, UserRow,
};
use super::pool::DbPool;
use super::schema::{courses, enrollments, users};

/// Diesel-backed implementation of the catalog seeding repository.
#[derive(Clone)]
pub struct DieselCatalogSeedRepository {
    pool: DbPool,
}

impl DieselCatalogSeedRepository {
    /// Create a new seeding repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_storage_failure(failure: StorageFailure) -> CatalogSeedRepositoryError {
    match failure {
        StorageFailure::UniqueViolation { constraint } => CatalogSeedRepositoryError::conflict(
            constraint.unwrap_or_else(|| "unique constraint".to_owned()),
        ),
        StorageFailure::Connection { message } => CatalogSeedRepositoryError::connection(message),
        other => CatalogSeedRepositoryError::query(other.to_string()),
    }
}

struct InsertedRows {
    users: Vec<UserRow>,
    courses: Vec<CourseRow>,
    enrollments: Vec<EnrollmentRow>,
}

async fn insert_rows(
    conn: &mut AsyncPgConnection,
    user_rows: &[NewUserRow<'_>],
    course_rows: &[NewCourseRow<'_>],
    enrollment_rows: &[NewEnrollmentRow],
) -> QueryResult<InsertedRows> {
    let mut inserted = InsertedRows {
        users: Vec::new(),
        courses: Vec::new(),
        enrollments: Vec::new(),
    };

    if !user_rows.is_empty() {
        inserted.users = diesel::insert_into(users::table)
            .values(user_rows)
            .returning(UserRow::as_returning())
            .get_results(conn)
            .await?;
    }
    if !course_rows.is_empty() {
        inserted.courses = diesel::insert_into(courses::table)
            .values(course_rows)
            .returning(CourseRow::as_returning())
            .get_results(conn)
            .await?;
    }
    if !enrollment_rows.is_empty() {
        inserted.enrollments = diesel::insert_into(enrollments::table)
            .values(enrollment_rows)
            .returning(EnrollmentRow::as_returning())
            .get_results(conn)
            .await?;
    }

    Ok(inserted)
}

fn into_seeded_catalog(rows: InsertedRows) -> Result<SeededCatalog, CatalogSeedRepositoryError> {
    let users = rows
        .users
        .into_iter()
        .map(|row| {
            User::try_from(row)
                .map_err(|err| CatalogSeedRepositoryError::query(format!("stored user: {err}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let courses = rows
        .courses
        .into_iter()
        .map(|row| {
            Course::try_from(row)
                .map_err(|err| CatalogSeedRepositoryError::query(format!("stored course: {err}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let enrollments = rows.enrollments.into_iter().map(Enrollment::from).collect();

    Ok(SeededCatalog {
        users,
        courses,
        enrollments,
    })
}

#[async_trait]
impl CatalogSeedRepository for DieselCatalogSeedRepository {
    async fn insert_catalog(
        &self,
        seed: CatalogSeed,
    ) -> Result<SeededCatalog, CatalogSeedRepositoryError> {
        let user_rows: Vec<NewUserRow<'_>> = seed.users.iter().map(NewUserRow::from).collect();
        let course_rows: Vec<NewCourseRow<'_>> =
            seed.courses.iter().map(NewCourseRow::from).collect();
        let enrollment_rows: Vec<NewEnrollmentRow> = seed
            .enrollments
            .iter()
            .map(NewEnrollmentRow::from)
            .collect();

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_storage_failure(classify_pool_error(err)))?;

        let inserted = conn
            .transaction(|conn| {
                async move { insert_rows(conn, &user_rows, &course_rows, &enrollment_rows).await }
                    .scope_boxed()
            })
            .await
            .map_err(|err| map_storage_failure(classify_diesel_error(err)))?;

        into_seeded_catalog(inserted)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for seed repository error mapping.
    use chrono::Utc;
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    #[rstest]
    #[case(Some("users_email_key".to_owned()), "users_email_key")]
    #[case(None, "unique constraint")]
    fn unique_violations_name_the_constraint(
        #[case] constraint: Option<String>,
        #[case] expected: &str,
    ) {
        let err = map_storage_failure(StorageFailure::UniqueViolation { constraint });
        assert_eq!(err, CatalogSeedRepositoryError::conflict(expected));
    }

    #[rstest]
    fn connection_failures_are_preserved() {
        let err = map_storage_failure(StorageFailure::Connection {
            message: "refused".to_owned(),
        });
        assert_eq!(err, CatalogSeedRepositoryError::connection("refused"));
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        let err = map_storage_failure(StorageFailure::NotFound);
        assert!(matches!(err, CatalogSeedRepositoryError::Query { .. }));
    }

    #[rstest]
    fn inserted_rows_convert_to_domain_records() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();
        let rows = InsertedRows {
            users: vec![UserRow {
                id: user_id,
                email: "ada@example.com".to_owned(),
                name: "Ada".to_owned(),
                created_at: Utc::now(),
            }],
            courses: vec![CourseRow {
                id: course_id,
                title: "Intro to X".to_owned(),
                description: String::new(),
                created_at: Utc::now(),
            }],
            enrollments: vec![EnrollmentRow {
                id: Uuid::new_v4(),
                user_id,
                course_id,
                created_at: Utc::now(),
            }],
        };

        let catalog = into_seeded_catalog(rows).expect("valid rows");

        assert_eq!(catalog.users.len(), 1);
        assert_eq!(catalog.courses.len(), 1);
        assert_eq!(catalog.enrollments.len(), 1);
    }
}
