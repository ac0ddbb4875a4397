//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of the driven repository
//! ports backed by PostgreSQL via `diesel-async` and `bb8` pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain records. Validation lives in the domain.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **One classifier**: every Diesel and pool error passes through
//!   [`classify_diesel_error`] or [`classify_pool_error`] before a repository
//!   maps it onto its port error.
//!
//! # Example
//!
//! ```ignore
//! use catalog_api::outbound::persistence::{DbPool, DieselCourseRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/course_catalog")).await?;
//! let repository = DieselCourseRepository::new(pool);
//! ```

mod diesel_catalog_seed_repository;
mod diesel_course_repository;
mod error_classifier;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_catalog_seed_repository::DieselCatalogSeedRepository;
pub use diesel_course_repository::DieselCourseRepository;
pub use error_classifier::{StorageFailure, classify_diesel_error, classify_pool_error};
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, DbPool, PoolConfig, PoolError,
};
