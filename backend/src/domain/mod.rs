//! Domain primitives, ports, and services for the course catalog.
//!
//! Purpose: define strongly typed entities and use-cases independent of HTTP
//! and storage. Inbound adapters call the driving ports; outbound adapters
//! implement the driven ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failures.
//! - Course, User, Enrollment and their insert shapes.
//! - CourseValidator: ordered field rules for course creation.
//! - CourseService, CatalogSeeder: use-case implementations.

pub mod catalog_seed;
pub mod course;
pub mod course_service;
pub mod course_validation;
pub mod enrollment;
pub mod error;
mod identifiers;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::catalog_seed::{CatalogSeedOutcome, CatalogSeeder, CatalogSeedingError};
pub use self::course::{
    COURSE_TEXT_MIN, COURSE_TITLE_MAX, Course, CourseDescription, CourseDto, CourseId,
    CourseTitle, CourseValidationError, NewCourse,
};
pub use self::course_service::CourseService;
pub use self::course_validation::{CourseValidator, CreateCourseRequest, FieldRule};
pub use self::enrollment::{Enrollment, EnrollmentId, NewEnrollment};
pub use self::error::{Error, ErrorCode, FieldErrors};
pub use self::identifiers::IdentifierError;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{DisplayName, EmailAddress, NewUser, User, UserId, UserValidationError};
