//! Course catalog HTTP handlers.
//!
//! ```text
//! GET  /courses?page=&limit=&q=
//! GET  /courses/{courseId}
//! POST /courses {"title": "...", "description": "..."}
//! ```
//!
//! Handlers pass raw input to the driving ports; parsing of identifiers and
//! page parameters happens in the domain so every adapter shares the rules.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::debug;
use url::form_urlencoded;
use utoipa::IntoParams;

use crate::domain::ports::ListCoursesRequest;
use crate::domain::{CourseDto, CreateCourseRequest, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    CourseEnvelope, CoursePage, CreatedCourse, ErrorBody, ValidationErrorBody,
};
use crate::inbound::http::state::HttpState;

/// Query string accepted by the listing endpoint.
///
/// Values stay raw strings so malformed integers surface as the domain's
/// "Invalid page" / "Invalid limit" errors.
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCoursesParams {
    /// One-based page number; defaults to 1, values below 1 become 1.
    #[param(example = "1")]
    pub page: Option<String>,
    /// Page size; defaults to 10, values outside 1..=100 become 10.
    #[param(example = "10")]
    pub limit: Option<String>,
    /// Case-sensitive title substring filter.
    #[param(example = "Rust")]
    pub q: Option<String>,
}

impl ListCoursesParams {
    /// Read the listing parameters from a raw query string.
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    fn from_query_string(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "q" => &mut params.q,
                _ => continue,
            };
            slot.get_or_insert_with(|| value.into_owned());
        }
        params
    }
}

impl From<ListCoursesParams> for ListCoursesRequest {
    fn from(params: ListCoursesParams) -> Self {
        Self {
            page: params.page,
            limit: params.limit,
            q: params.q,
        }
    }
}

/// Register the course routes on an app or scope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use catalog_api::inbound::http::courses;
///
/// let app = App::new().configure(courses::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_courses)
        .service(get_course)
        .service(create_course);
}

/// List courses, newest first.
#[utoipa::path(
    get,
    path = "/courses",
    params(ListCoursesParams),
    responses(
        (status = 200, description = "One page of courses", body = CoursePage),
        (status = 400, description = "Malformed page or limit", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["courses"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    let params = ListCoursesParams::from_query_string(req.query_string());
    let page = state
        .courses_query
        .list_courses(params.into())
        .await
        .map_err(|err| state.reject(err))?;
    Ok(HttpResponse::Ok().json(page))
}

/// Fetch one course by identifier.
#[utoipa::path(
    get,
    path = "/courses/{courseId}",
    params(("courseId" = String, Path, description = "Course UUID")),
    responses(
        (status = 200, description = "The course", body = CourseEnvelope),
        (status = 400, description = "Missing or malformed identifier", body = ErrorBody),
        (status = 404, description = "No such course", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/{course_id:[^/]*}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CourseEnvelope>> {
    let course = state
        .courses_query
        .get_course(path.as_str())
        .await
        .map_err(|err| state.reject(err))?;
    Ok(web::Json(CourseEnvelope {
        course: CourseDto::from(course),
    }))
}

/// Create a course.
///
/// The body is parsed by hand so malformed JSON is reported as a 400 with the
/// standard envelope whatever the request's content type.
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CreatedCourse,
            headers(("Location" = String, description = "Path of the new course"))),
        (status = 400, description = "Malformed JSON body", body = ErrorBody),
        (status = 409, description = "Title already exists", body = ErrorBody),
        (status = 422, description = "Field validation failed", body = ValidationErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["courses"],
    operation_id = "createCourse"
)]
#[post("/courses")]
pub async fn create_course(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request: CreateCourseRequest = serde_json::from_slice(&body).map_err(|err| {
        debug!(error = %err, "rejected course body");
        state.reject(Error::invalid_request("invalid JSON body"))
    })?;

    let id = state
        .courses_command
        .create_course(request)
        .await
        .map_err(|err| state.reject(err))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/courses/{id}")))
        .json(CreatedCourse {
            course_id: *id.as_uuid(),
        }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::App;
    use actix_web::test::{self};
    use chrono::Utc;
    use pagination::Page;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{CourseRepositoryError, MockCourseRepository};
    use crate::domain::{Course, CourseService, CourseValidator, NewCourse};
    use crate::inbound::http::error::ErrorExposure;

    fn stored(course: &NewCourse) -> Course {
        Course::new(
            course.id(),
            course.title().clone(),
            course.description().cloned(),
            Utc::now(),
        )
    }

    fn state(repository: MockCourseRepository, exposure: ErrorExposure) -> web::Data<HttpState> {
        let service = Arc::new(CourseService::with_noop_metrics(
            Arc::new(repository),
            CourseValidator::new(),
        ));
        web::Data::new(HttpState::new(service.clone(), service).with_exposure(exposure))
    }

    async fn send(
        state: web::Data<HttpState>,
        req: test::TestRequest,
    ) -> (StatusCode, actix_web::http::header::HeaderMap, Value) {
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;
        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let headers = res.headers().clone();
        let bytes = test::read_body(res).await;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, headers, body)
    }

    #[rstest]
    #[actix_web::test]
    async fn list_passes_raw_params_to_the_domain() {
        let mut repository = MockCourseRepository::new();
        repository
            .expect_list()
            .withf(|query| {
                query.page.page() == 2
                    && query.page.limit() == 5
                    && query.title_contains.as_deref() == Some("Rust")
            })
            .returning(|query| Ok(Page::new(Vec::new(), query.page, 7)));

        let (status, _, body) = send(
            state(repository, ErrorExposure::Redacted),
            test::TestRequest::get().uri("/courses?page=2&limit=5&q=%20Rust%20"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"data": [], "page": 2, "limit": 5, "total": 7}));
    }

    #[rstest]
    #[case("page=2&page=5&limit=3", Some("2"), Some("3"), None)]
    #[case("q=a%26b&q=c&other=1", None, None, Some("a&b"))]
    #[case("q=C%2B%2B+basics", None, None, Some("C++ basics"))]
    #[case("page&limit=", Some(""), Some(""), None)]
    #[case("", None, None, None)]
    fn first_occurrence_of_each_key_wins(
        #[case] query: &str,
        #[case] page: Option<&str>,
        #[case] limit: Option<&str>,
        #[case] q: Option<&str>,
    ) {
        let params = ListCoursesParams::from_query_string(query);
        assert_eq!(params.page.as_deref(), page);
        assert_eq!(params.limit.as_deref(), limit);
        assert_eq!(params.q.as_deref(), q);
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_page_is_a_bad_request() {
        let mut repository = MockCourseRepository::new();
        repository.expect_list().never();

        let (status, _, body) = send(
            state(repository, ErrorExposure::Redacted),
            test::TestRequest::get().uri("/courses?page=abc"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid page"}));
    }

    #[rstest]
    #[case("/courses/", "courseId is required")]
    #[case("/courses/not-a-uuid", "invalid courseId")]
    #[actix_web::test]
    async fn get_rejects_bad_identifiers(#[case] uri: &str, #[case] message: &str) {
        let mut repository = MockCourseRepository::new();
        repository.expect_find_by_id().never();

        let (status, _, body) = send(
            state(repository, ErrorExposure::Redacted),
            test::TestRequest::get().uri(uri),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": message }));
    }

    #[rstest]
    #[actix_web::test]
    async fn get_wraps_the_course() {
        let course = stored(&NewCourse::new("Intro to X", None).expect("valid course"));
        let id = course.id();
        let mut repository = MockCourseRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(course.clone())));

        let (status, _, body) = send(
            state(repository, ErrorExposure::Redacted),
            test::TestRequest::get().uri(&format!("/courses/{id}")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["course"]["id"], json!(id.to_string()));
        assert_eq!(body["course"]["title"], json!("Intro to X"));
        assert_eq!(body["course"]["description"], json!(""));
    }

    #[rstest]
    #[case("{not json")]
    #[case(r#"{"title": 5}"#)]
    #[case("")]
    #[actix_web::test]
    async fn create_rejects_malformed_bodies(#[case] payload: &'static str) {
        let mut repository = MockCourseRepository::new();
        repository.expect_insert().never();

        let (status, _, body) = send(
            state(repository, ErrorExposure::Redacted),
            test::TestRequest::post()
                .uri("/courses")
                .insert_header((header::CONTENT_TYPE, "text/plain"))
                .set_payload(payload),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "invalid JSON body"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn create_returns_location_and_identifier() {
        let mut repository = MockCourseRepository::new();
        repository
            .expect_insert()
            .times(1)
            .returning(|course| Ok(stored(course)));

        let (status, headers, body) = send(
            state(repository, ErrorExposure::Redacted),
            test::TestRequest::post()
                .uri("/courses")
                .set_json(json!({"title": "Intro to X", "description": "desc"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let id = body["courseId"].as_str().expect("courseId string");
        assert!(id.parse::<uuid::Uuid>().is_ok());
        let location = headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok());
        assert_eq!(location, Some(format!("/courses/{id}").as_str()));
    }

    #[rstest]
    #[case(ErrorExposure::Redacted, "internal server error")]
    #[case(ErrorExposure::Verbose, "course repository connection failed: refused")]
    #[actix_web::test]
    async fn storage_failures_follow_the_exposure_policy(
        #[case] exposure: ErrorExposure,
        #[case] message: &str,
    ) {
        let mut repository = MockCourseRepository::new();
        repository
            .expect_insert()
            .returning(|_| Err(CourseRepositoryError::connection("refused")));

        let (status, _, body) = send(
            state(repository, exposure),
            test::TestRequest::post()
                .uri("/courses")
                .set_json(json!({"title": "Intro to X"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": message }));
    }
}
