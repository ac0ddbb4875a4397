//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the course and health endpoints together with the
//! envelope schemas from [`crate::inbound::http::schemas`]. The document is
//! served by Swagger UI in debug builds and exported by `openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{CourseDto, CreateCourseRequest};
use crate::inbound::http::schemas::{
    CourseEnvelope, CoursePage, CreatedCourse, ErrorBody, ValidationErrorBody,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course catalog API",
        description = "Paginated listing, retrieval and creation of catalog courses."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CourseDto,
        CoursePage,
        CourseEnvelope,
        CreatedCourse,
        CreateCourseRequest,
        ErrorBody,
        ValidationErrorBody
    )),
    tags(
        (name = "courses", description = "Course catalog operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
