//! Builders wiring the PostgreSQL adapters into HTTP state.

use std::sync::Arc;

use actix_web::web;

use catalog_api::domain::{CourseService, CourseValidator};
use catalog_api::inbound::http::state::HttpState;
use catalog_api::outbound::persistence::DieselCourseRepository;
#[cfg(feature = "metrics")]
use catalog_api::outbound::metrics::PrometheusCourseMetrics;

use super::ServerConfig;

/// Build the course service over the Diesel repository.
///
/// When a Prometheus registry is configured the creation counter is
/// registered on it; otherwise creations are not counted.
///
/// # Errors
/// Returns [`std::io::Error`] if Prometheus metric registration fails.
#[cfg(feature = "metrics")]
fn build_course_service(config: &ServerConfig) -> std::io::Result<CourseService> {
    let repository = Arc::new(DieselCourseRepository::new(config.db_pool.clone()));
    match &config.prometheus {
        Some(prom) => {
            let metrics = PrometheusCourseMetrics::new(&prom.registry).map_err(|e| {
                std::io::Error::other(format!("course metrics registration failed: {e}"))
            })?;
            Ok(CourseService::new(
                repository,
                CourseValidator::new(),
                Arc::new(metrics),
            ))
        }
        None => Ok(CourseService::with_noop_metrics(
            repository,
            CourseValidator::new(),
        )),
    }
}

#[cfg(not(feature = "metrics"))]
fn build_course_service(config: &ServerConfig) -> std::io::Result<CourseService> {
    Ok(CourseService::with_noop_metrics(
        Arc::new(DieselCourseRepository::new(config.db_pool.clone())),
        CourseValidator::new(),
    ))
}

/// Assemble the shared handler state from the server configuration.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let service = Arc::new(build_course_service(config)?);
    Ok(web::Data::new(
        HttpState::new(service.clone(), service).with_exposure(config.exposure),
    ))
}
