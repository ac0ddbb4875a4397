//! Shared helpers for the embedded PostgreSQL suites.
//!
//! Each integration test compiles as its own crate; suites that need a real
//! database pull these in with `mod support;`.

pub mod cluster_skip;
pub mod embedded_postgres;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{count_rows, provision_database, set_created_at};

/// Render a `postgres` error with its SQLSTATE and detail.
///
/// The `Display` implementation collapses server errors to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };
    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}
