//! Outbound adapters for metrics exporting.
//!
//! Prometheus-backed implementations of domain metrics ports, compiled only
//! with the `metrics` feature.

mod prometheus_courses;

pub use prometheus_courses::{COURSES_CREATED_METRIC, PrometheusCourseMetrics};
