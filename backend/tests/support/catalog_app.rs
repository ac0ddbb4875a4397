//! Harness running the full course app against the in-memory repository.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::HeaderMap;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use catalog_api::Trace;
use catalog_api::domain::{CourseService, CourseValidator};
use catalog_api::inbound::http::ErrorExposure;
use catalog_api::inbound::http::courses;
use catalog_api::inbound::http::health::{HealthState, live, ready};
use catalog_api::inbound::http::state::HttpState;
use catalog_api::test_support::{CountingCourseMetrics, InMemoryCourseRepository};
use serde_json::Value;

/// Decoded response: status, headers and JSON body (`Null` when empty).
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl Reply {
    /// Value of `name` as a string, if present and ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Shared collaborators behind one app instance.
#[derive(Clone, Default)]
pub struct CatalogHarness {
    pub repository: InMemoryCourseRepository,
    pub metrics: CountingCourseMetrics,
    pub exposure: ErrorExposure,
}

impl CatalogHarness {
    pub fn with_exposure(exposure: ErrorExposure) -> Self {
        Self {
            exposure,
            ..Self::default()
        }
    }

    fn http_state(&self) -> web::Data<HttpState> {
        let service = Arc::new(CourseService::new(
            Arc::new(self.repository.clone()),
            CourseValidator::new(),
            Arc::new(self.metrics.clone()),
        ));
        web::Data::new(HttpState::new(service.clone(), service).with_exposure(self.exposure))
    }

    /// Send `request` through a freshly initialised app sharing this
    /// harness's repository and metrics.
    pub async fn send(&self, request: TestRequest) -> Reply {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let app = test::init_service(
            App::new()
                .app_data(self.http_state())
                .app_data(health)
                .wrap(Trace)
                .configure(courses::configure)
                .service(ready)
                .service(live),
        )
        .await;
        let res = test::call_service(&app, request.to_request()).await;
        let status = res.status();
        let headers = res.headers().clone();
        let bytes = test::read_body(res).await;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        Reply {
            status,
            headers,
            body,
        }
    }

    /// Create a course and return its identifier, panicking on failure.
    pub async fn create(&self, title: &str, description: Option<&str>) -> String {
        let mut payload = serde_json::json!({ "title": title });
        if let Some(description) = description {
            payload["description"] = Value::from(description);
        }
        let reply = self
            .send(TestRequest::post().uri("/courses").set_json(payload))
            .await;
        assert_eq!(reply.status, StatusCode::CREATED, "create {title}: {}", reply.body);
        reply.body["courseId"]
            .as_str()
            .expect("courseId string")
            .to_owned()
    }
}
