//! Deterministic example catalog data for seeding and demonstrations.
//!
//! This crate generates believable, reproducible users, courses, and
//! enrollment pairs from a numeric seed. It is independent of backend domain
//! types; the backend converts the generated values into its own validated
//! types at the point of use.
//!
//! # Example
//!
//! ```
//! use example_data::{SeedSpec, generate_catalog_seed};
//!
//! let spec = SeedSpec::new(42);
//! let data = generate_catalog_seed(&spec).expect("generation succeeds");
//!
//! assert_eq!(data.users.len(), 3);
//! assert_eq!(data.courses.len(), 2);
//! assert_eq!(data.enrollments.len(), 3);
//! ```

mod error;
mod generator;
mod seed;

pub use error::GenerationError;
pub use generator::generate_catalog_seed;
pub use seed::{
    CatalogSeedData, CourseSeed, DEFAULT_COURSE_COUNT, DEFAULT_USER_COUNT, EnrollmentSeed,
    SeedSpec, UserSeed,
};
