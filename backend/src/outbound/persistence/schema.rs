//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes a table.

diesel::table! {
    /// Registered users. `email` is stored lower-cased and is unique.
    users (id) {
        id -> Uuid,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 255]
        name -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Catalog courses. `title` is unique; an absent description is `''`.
    courses (id) {
        id -> Uuid,
        #[max_length = 255]
        title -> Varchar,
        description -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Links between users and courses; `(user_id, course_id)` is unique.
    enrollments (id) {
        id -> Uuid,
        user_id -> Uuid,
        course_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(enrollments -> users (user_id));
diesel::joinable!(enrollments -> courses (course_id));

diesel::allow_tables_to_appear_in_same_query!(users, courses, enrollments);
