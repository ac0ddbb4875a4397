//! Database provisioning on an embedded cluster.
//!
//! Databases are dropped and recreated through `postgres` because
//! `DROP DATABASE` cannot run inside the transaction Diesel would open. The
//! schema comes from the service's own embedded migrations.

use catalog_api::outbound::persistence::run_pending_migrations;
use chrono::{DateTime, Utc};
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::format_postgres_error;

const MAINTENANCE_DB: &str = "postgres";

fn connect(url: &str) -> Result<Client, String> {
    Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))
}

/// Recreate `name` on `cluster`, migrate it, and return its URL.
pub fn provision_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let connection = cluster.connection();
    let mut admin = connect(&connection.database_url(MAINTENANCE_DB))?;
    for statement in [
        format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"),
        format!("CREATE DATABASE \"{name}\""),
    ] {
        admin
            .batch_execute(&statement)
            .map_err(|err| format_postgres_error(&err))?;
    }

    let url = connection.database_url(name);
    run_pending_migrations(&url).map_err(|err| err.to_string())?;
    Ok(url)
}

/// Number of rows in `table`.
pub fn count_rows(url: &str, table: &str) -> Result<i64, String> {
    let mut client = connect(url)?;
    let row = client
        .query_one(&format!("SELECT COUNT(*) FROM {table}"), &[])
        .map_err(|err| format_postgres_error(&err))?;
    Ok(row.get(0))
}

/// Pin a course's creation time so ordering checks are deterministic.
pub fn set_created_at(
    url: &str,
    course_id: Uuid,
    created_at: DateTime<Utc>,
) -> Result<(), String> {
    let mut client = connect(url)?;
    let rfc3339 = created_at.to_rfc3339();
    client
        .execute(
            "UPDATE courses SET created_at = $2::text::timestamptz WHERE id = $1",
            &[&course_id, &rfc3339],
        )
        .map_err(|err| format_postgres_error(&err))?;
    Ok(())
}
