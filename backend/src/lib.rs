//! Course catalog service library.
//!
//! The binaries in `src/bin` and `src/main.rs` wire these modules together;
//! integration tests build the same app through [`inbound::http::courses`].

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
