//! Behavioural tests for the course catalog endpoints.

#[path = "support/catalog_app.rs"]
mod catalog_app;

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::test::TestRequest;
use catalog_api::domain::TRACE_ID_HEADER;
use catalog_api::inbound::http::ErrorExposure;
use catalog_app::{CatalogHarness, Reply};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use uuid::Uuid;

#[fixture]
fn harness() -> CatalogHarness {
    CatalogHarness::default()
}

async fn seeded(harness: &CatalogHarness, titles: &[&str]) -> Vec<String> {
    let mut ids = Vec::with_capacity(titles.len());
    for title in titles {
        ids.push(harness.create(title, None).await);
    }
    ids
}

async fn list(harness: &CatalogHarness, query: &str) -> Reply {
    harness
        .send(TestRequest::get().uri(&format!("/courses{query}")))
        .await
}

fn titles(body: &Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|course| course["title"].as_str().expect("title string"))
        .collect()
}

fn assert_single_error_key(body: &Value) {
    let object = body.as_object().expect("error body is an object");
    assert_eq!(object.len(), 1, "unexpected body {body}");
    assert!(object.contains_key("error") ^ object.contains_key("errors"));
}

#[rstest]
#[actix_web::test]
async fn empty_catalog_lists_with_defaults(harness: CatalogHarness) {
    let reply = list(&harness, "").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, json!({"data": [], "page": 1, "limit": 10, "total": 0}));
}

#[rstest]
#[case("?page=1&limit=2", 2)]
#[case("?page=2&limit=2", 2)]
#[case("?page=3&limit=2", 1)]
#[case("?page=4&limit=2", 0)]
#[case("?limit=100", 5)]
#[actix_web::test]
async fn pages_never_exceed_the_limit_and_total_ignores_paging(
    harness: CatalogHarness,
    #[case] query: &str,
    #[case] expected_len: usize,
) {
    seeded(&harness, &["Course A", "Course B", "Course C", "Course D", "Course E"]).await;

    let reply = list(&harness, query).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(titles(&reply.body).len(), expected_len);
    assert_eq!(reply.body["total"], json!(5));
}

#[rstest]
#[case("?page=0", 1, 10)]
#[case("?page=-4", 1, 10)]
#[case("?limit=0", 1, 10)]
#[case("?limit=101", 1, 10)]
#[case("?limit=-1", 1, 10)]
#[case("?page=&limit=", 1, 10)]
#[case("?page=3&limit=100", 3, 100)]
#[actix_web::test]
async fn out_of_range_paging_falls_back_to_defaults(
    harness: CatalogHarness,
    #[case] query: &str,
    #[case] page: u64,
    #[case] limit: u64,
) {
    let reply = list(&harness, query).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["page"], json!(page));
    assert_eq!(reply.body["limit"], json!(limit));
}

#[rstest]
#[case("?page=abc", "Invalid page")]
#[case("?page=1.5", "Invalid page")]
#[case("?limit=ten", "Invalid limit")]
#[case("?page=2&limit=x", "Invalid limit")]
#[actix_web::test]
async fn non_integer_paging_is_rejected(
    harness: CatalogHarness,
    #[case] query: &str,
    #[case] message: &str,
) {
    harness.repository.set_unavailable(true);

    let reply = list(&harness, query).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, json!({ "error": message }));
}

#[rstest]
#[actix_web::test]
async fn listing_is_newest_first(harness: CatalogHarness) {
    seeded(&harness, &["First", "Second", "Third"]).await;

    let reply = list(&harness, "").await;

    assert_eq!(titles(&reply.body), vec!["Third", "Second", "First"]);
}

#[rstest]
#[case("?q=Rust", vec!["Rust async", "Rust basics"])]
#[case("?q=%20Rust%20", vec!["Rust async", "Rust basics"])]
#[case("?q=rust", vec!["Advanced rust"])]
#[case("?q=", vec!["Rust async", "Advanced rust", "Rust basics"])]
#[case("?q=100%25", vec![])]
#[actix_web::test]
async fn title_filter_is_a_case_sensitive_substring(
    harness: CatalogHarness,
    #[case] query: &str,
    #[case] expected: Vec<&str>,
) {
    seeded(&harness, &["Rust basics", "Advanced rust", "Rust async"]).await;

    let reply = list(&harness, query).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(titles(&reply.body), expected);
    assert_eq!(reply.body["total"], json!(expected.len()));
}

#[rstest]
#[actix_web::test]
async fn repeated_query_keys_use_the_first_value(harness: CatalogHarness) {
    seeded(&harness, &["A one", "A two", "A three", "A four", "B five"]).await;

    let reply = list(&harness, "?page=2&page=5&limit=3&limit=x&q=A&q=B").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["page"], json!(2));
    assert_eq!(reply.body["limit"], json!(3));
    assert_eq!(reply.body["total"], json!(4));
    assert_eq!(titles(&reply.body), vec!["A one"]);
}

#[rstest]
#[actix_web::test]
async fn repeated_reads_are_identical(harness: CatalogHarness) {
    let ids = seeded(&harness, &["Alpha", "Beta", "Gamma"]).await;

    let first = list(&harness, "?page=1&limit=2&q=a").await;
    let second = list(&harness, "?page=1&limit=2&q=a").await;
    assert_eq!(first.body, second.body);

    let uri = format!("/courses/{}", ids[0]);
    let one = harness.send(TestRequest::get().uri(&uri)).await;
    let two = harness.send(TestRequest::get().uri(&uri)).await;
    assert_eq!(one.body, two.body);
}

#[rstest]
#[actix_web::test]
async fn creation_round_trips(harness: CatalogHarness) {
    let reply = harness
        .send(
            TestRequest::post()
                .uri("/courses")
                .set_json(json!({"title": "Intro to X", "description": "desc"})),
        )
        .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    let id = reply.body["courseId"].as_str().expect("courseId string");
    assert!(id.parse::<Uuid>().is_ok());
    let location = format!("/courses/{id}");
    assert_eq!(reply.header(header::LOCATION.as_str()), Some(location.as_str()));
    assert_eq!(harness.metrics.created(), 1);

    let fetched = harness.send(TestRequest::get().uri(&location)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["course"]["id"], json!(id));
    assert_eq!(fetched.body["course"]["title"], json!("Intro to X"));
    assert_eq!(fetched.body["course"]["description"], json!("desc"));
    assert!(fetched.body["course"]["created_at"].is_string());
}

#[rstest]
#[actix_web::test]
async fn created_values_are_trimmed(harness: CatalogHarness) {
    let id = harness.create("  Padded title  ", Some("  padded  ")).await;

    let fetched = harness
        .send(TestRequest::get().uri(&format!("/courses/{id}")))
        .await;

    assert_eq!(fetched.body["course"]["title"], json!("Padded title"));
    assert_eq!(fetched.body["course"]["description"], json!("padded"));
}

#[rstest]
#[actix_web::test]
async fn lengths_are_checked_before_trimming(harness: CatalogHarness) {
    let id = harness.create("  ab  ", Some(" a ")).await;

    let fetched = harness
        .send(TestRequest::get().uri(&format!("/courses/{id}")))
        .await;

    assert_eq!(fetched.body["course"]["title"], json!("ab"));
    assert_eq!(fetched.body["course"]["description"], json!("a"));
}

#[rstest]
#[actix_web::test]
async fn duplicate_titles_conflict(harness: CatalogHarness) {
    harness.create("Same title", None).await;

    let reply = harness
        .send(
            TestRequest::post()
                .uri("/courses")
                .set_json(json!({"title": "Same title", "description": "other"})),
        )
        .await;

    assert_eq!(reply.status, StatusCode::CONFLICT);
    assert_eq!(reply.body, json!({"error": "title already exists"}));
    assert_eq!(harness.repository.len(), 1);
    assert_eq!(harness.metrics.created(), 1);
    let listed = list(&harness, "?q=Same%20title").await;
    assert_eq!(listed.body["total"], json!(1));
}

#[rstest]
#[case(
    json!({"title": "", "description": "ab"}),
    json!({"title": "is required", "description": "too short"})
)]
#[case(json!({"description": "valid text"}), json!({"title": "is required"}))]
#[case(json!({"title": "ab"}), json!({"title": "too short"}))]
#[case(json!({"title": "x".repeat(256)}), json!({"title": "is invalid"}))]
#[case(json!({"title": "Fine title", "description": " a"}), json!({"description": "too short"}))]
#[actix_web::test]
async fn validation_failures_are_aggregated(
    harness: CatalogHarness,
    #[case] payload: Value,
    #[case] errors: Value,
) {
    let reply = harness
        .send(TestRequest::post().uri("/courses").set_json(payload))
        .await;

    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(reply.body, json!({ "errors": errors }));
    assert!(harness.repository.is_empty());
    assert_eq!(harness.metrics.created(), 0);
}

#[rstest]
#[case("application/json", "{\"title\": ")]
#[case("application/json", "\"just a string\"")]
#[case("application/json", "{\"title\": 7}")]
#[case("text/plain", "{\"title\": \"Plain\"")]
#[actix_web::test]
async fn malformed_bodies_are_bad_requests(
    harness: CatalogHarness,
    #[case] content_type: &str,
    #[case] payload: &'static str,
) {
    let reply = harness
        .send(
            TestRequest::post()
                .uri("/courses")
                .insert_header((header::CONTENT_TYPE, content_type))
                .set_payload(payload),
        )
        .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, json!({"error": "invalid JSON body"}));
    assert!(harness.repository.is_empty());
}

#[rstest]
#[actix_web::test]
async fn json_without_content_type_is_accepted(harness: CatalogHarness) {
    let reply = harness
        .send(
            TestRequest::post()
                .uri("/courses")
                .set_payload(r#"{"title": "No header"}"#),
        )
        .await;

    assert_eq!(reply.status, StatusCode::CREATED);
}

#[rstest]
#[case("/courses/", StatusCode::BAD_REQUEST, "courseId is required")]
#[case("/courses/not-a-uuid", StatusCode::BAD_REQUEST, "invalid courseId")]
#[case("/courses/3fa85f64-5717-4562-b3fc", StatusCode::BAD_REQUEST, "invalid courseId")]
#[case(
    "/courses/3fa85f64-5717-4562-b3fc-2c963f66afa6",
    StatusCode::NOT_FOUND,
    "course not found"
)]
#[actix_web::test]
async fn lookups_distinguish_malformed_from_missing(
    harness: CatalogHarness,
    #[case] uri: &str,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    seeded(&harness, &["Existing"]).await;

    let reply = harness.send(TestRequest::get().uri(uri)).await;

    assert_eq!(reply.status, status);
    assert_eq!(reply.body, json!({ "error": message }));
}

#[rstest]
#[case(ErrorExposure::Redacted, "internal server error")]
#[case(
    ErrorExposure::Verbose,
    "course repository connection failed: in-memory store unavailable"
)]
#[actix_web::test]
async fn storage_outages_return_internal_errors(
    #[case] exposure: ErrorExposure,
    #[case] message: &str,
) {
    let harness = CatalogHarness::with_exposure(exposure);
    harness.repository.set_unavailable(true);

    let listed = list(&harness, "").await;
    let created = harness
        .send(
            TestRequest::post()
                .uri("/courses")
                .set_json(json!({"title": "Offline"})),
        )
        .await;
    let fetched = harness
        .send(TestRequest::get().uri(&format!("/courses/{}", Uuid::new_v4())))
        .await;

    for reply in [listed, created, fetched] {
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.body, json!({ "error": message }));
    }
    assert_eq!(harness.metrics.created(), 0);
}

#[rstest]
#[actix_web::test]
async fn every_response_carries_a_trace_id(harness: CatalogHarness) {
    let requests = [
        TestRequest::get().uri("/courses"),
        TestRequest::get().uri("/courses?page=x"),
        TestRequest::get().uri("/courses/nope"),
        TestRequest::post()
            .uri("/courses")
            .set_json(json!({"title": ""})),
        TestRequest::post().uri("/courses").set_payload("{"),
    ];

    for request in requests {
        let reply = harness.send(request).await;
        let trace_id = reply.header(TRACE_ID_HEADER).expect("trace-id header");
        assert!(trace_id.parse::<Uuid>().is_ok());
        if !reply.status.is_success() {
            assert_single_error_key(&reply.body);
        }
    }
}

#[rstest]
#[actix_web::test]
async fn health_endpoints_report_readiness(harness: CatalogHarness) {
    let ready = harness.send(TestRequest::get().uri("/health/ready")).await;
    let live = harness.send(TestRequest::get().uri("/health/live")).await;

    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(live.status, StatusCode::OK);
}
