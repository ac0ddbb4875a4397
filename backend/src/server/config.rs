//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use catalog_api::inbound::http::ErrorExposure;
use catalog_api::outbound::persistence::DbPool;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) exposure: ErrorExposure,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr` and backed by
    /// `db_pool`. Internal errors are redacted until
    /// [`with_exposure`](Self::with_exposure) says otherwise.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            exposure: ErrorExposure::default(),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Choose how internal error messages are rendered to clients.
    #[must_use]
    pub fn with_exposure(mut self, exposure: ErrorExposure) -> Self {
        self.exposure = exposure;
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
