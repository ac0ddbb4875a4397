//! Insert deterministic example users, courses and enrollments.

use std::ffi::OsString;
use std::sync::Arc;

use catalog_api::config::{DatabaseMode, DatabaseSettings};
use catalog_api::domain::CatalogSeeder;
use catalog_api::outbound::persistence::{DbPool, DieselCatalogSeedRepository, PoolConfig};
use clap::Parser;
use color_eyre::eyre::WrapErr;
use example_data::{DEFAULT_COURSE_COUNT, DEFAULT_USER_COUNT, SeedSpec};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_SEED: u64 = 42;

/// `catalog-seed` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catalog-seed",
    about = "Seed the catalog database with deterministic example data",
    version
)]
struct CliArgs {
    /// Target the test database (`DB_*_TEST` values).
    #[arg(long)]
    test: bool,
    /// RNG seed; the same seed always yields the same catalog.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Number of users to generate.
    #[arg(long, default_value_t = DEFAULT_USER_COUNT)]
    users: usize,
    /// Number of courses to generate.
    #[arg(long, default_value_t = DEFAULT_COURSE_COUNT)]
    courses: usize,
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
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: CliArgs) -> color_eyre::Result<()> {
    let mode = DatabaseMode::from_test_flag(args.test);
    let settings = DatabaseSettings::load_from_iter([OsString::from("catalog-seed")])
        .wrap_err("load database settings")?;
    let database_url = settings.database_url(mode)?;
    let pool = DbPool::new(PoolConfig::new(database_url.as_str()).with_min_idle(None))
        .await
        .wrap_err("create database pool")?;

    let seeder = CatalogSeeder::new(Arc::new(DieselCatalogSeedRepository::new(pool)));
    let spec = SeedSpec::new(args.seed)
        .with_user_count(args.users)
        .with_course_count(args.courses);
    let outcome = seeder.seed(&spec).await.wrap_err("seed catalog")?;

    info!(
        ?mode,
        seed = outcome.seed,
        users = outcome.users,
        courses = outcome.courses,
        enrollments = outcome.enrollments,
        "seeding complete"
    );
    Ok(())
}
