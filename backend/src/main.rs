//! Course catalog entry-point: loads settings, connects to PostgreSQL, and
//! serves the REST endpoints with OpenAPI docs in debug builds.

mod server;

use std::ffi::OsString;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use color_eyre::eyre::WrapErr;
#[cfg(feature = "metrics")]
use color_eyre::eyre::eyre;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use catalog_api::config::{DatabaseSettings, ServerSettings};
use catalog_api::inbound::http::ErrorExposure;
use catalog_api::inbound::http::health::HealthState;
use catalog_api::outbound::persistence::{DbPool, PoolConfig};
use server::{ServerConfig, create_server};

const PROGRAM_NAME: &str = "catalog-api";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter([OsString::from(PROGRAM_NAME)])
        .wrap_err("load server settings")?;
    let db_settings = DatabaseSettings::load_from_iter([OsString::from(PROGRAM_NAME)])
        .wrap_err("load database settings")?;
    let mode = settings.db_mode()?;
    let bind_addr = settings.bind_addr()?;
    let database_url = db_settings.database_url(mode)?;

    let db_pool = DbPool::new(PoolConfig::new(database_url.as_str()))
        .await
        .wrap_err("create database pool")?;
    info!(
        ?mode,
        database = db_settings.name(mode),
        host = db_settings.host(mode),
        "database pool ready"
    );

    let config = ServerConfig::new(bind_addr, db_pool)
        .with_exposure(ErrorExposure::from_debug(settings.debug));
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, debug = settings.debug, "listening");
    server.await?;
    Ok(())
}

#[cfg(feature = "metrics")]
fn make_metrics() -> color_eyre::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("catalog")
        .endpoint("/metrics")
        .build()
        .map_err(|e| eyre!("configure Prometheus metrics: {e}"))
}
