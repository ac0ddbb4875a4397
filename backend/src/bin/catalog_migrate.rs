//! Apply pending schema migrations to the catalog database.

use std::ffi::OsString;

use catalog_api::config::{DatabaseMode, DatabaseSettings};
use catalog_api::outbound::persistence::run_pending_migrations;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `catalog-migrate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catalog-migrate",
    about = "Apply embedded schema migrations to the catalog database",
    version
)]
struct CliArgs {
    /// Target the test database (`DB_*_TEST` values).
    #[arg(long)]
    test: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let mode = DatabaseMode::from_test_flag(args.test);
    let settings = DatabaseSettings::load_from_iter([OsString::from("catalog-migrate")])
        .wrap_err("load database settings")?;
    let database_url = settings.database_url(mode)?;

    let applied = run_pending_migrations(&database_url)?;
    info!(
        ?mode,
        database = settings.name(mode),
        applied = applied.len(),
        "database schema is up to date"
    );
    Ok(())
}
