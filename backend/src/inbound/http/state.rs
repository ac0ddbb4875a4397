//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::Error;
use crate::domain::ports::{CourseCommand, CourseQuery};

use super::error::ErrorExposure;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the catalog.
    pub courses_query: Arc<dyn CourseQuery>,
    /// Write side of the catalog.
    pub courses_command: Arc<dyn CourseCommand>,
    /// Rendering policy for internal errors.
    pub exposure: ErrorExposure,
}

impl HttpState {
    /// Construct state from the catalog ports with redacted internal errors.
    pub fn new(
        courses_query: Arc<dyn CourseQuery>,
        courses_command: Arc<dyn CourseCommand>,
    ) -> Self {
        Self {
            courses_query,
            courses_command,
            exposure: ErrorExposure::default(),
        }
    }

    /// Replace the internal error rendering policy.
    #[must_use]
    pub fn with_exposure(mut self, exposure: ErrorExposure) -> Self {
        self.exposure = exposure;
        self
    }

    /// Apply the configured exposure policy to a handler failure.
    pub fn reject(&self, error: Error) -> Error {
        self.exposure.apply(error)
    }
}
