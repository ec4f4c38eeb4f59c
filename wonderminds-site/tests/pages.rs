//! Integration tests for the page routes
//!
//! Full documents for regular requests, main-content partials for HTMX.

use axum::{body::Body, Router};
use http::{Request, StatusCode};
use tower::ServiceExt;

use wonderminds_site::{build_router, testing::{test_state, MockEmailSender}};

fn test_app() -> Router {
    build_router(test_state(MockEmailSender::new()))
}

async fn get(uri: &str, htmx: bool) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri);
    if htmx {
        request = request.header("HX-Request", "true");
    }

    let response = test_app()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_every_page_renders() {
    for path in ["/", "/about", "/programs", "/services", "/gallery", "/contact", "/booking"] {
        let (status, body) = get(path, false).await;

        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.starts_with("<!DOCTYPE html>"), "{path}");
        assert!(body.contains("<nav>"), "{path}");
    }
}

#[tokio::test]
async fn test_htmx_request_gets_partial() {
    let (status, body) = get("/programs", true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<nav>"));
    assert!(body.contains("Our Programs"));
    assert!(body.contains("Kindergarten"));
}

#[tokio::test]
async fn test_unknown_path_is_404_page() {
    let (status, body) = get("/enrolment", false).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
    assert!(body.contains("<nav>"));
}

#[tokio::test]
async fn test_unknown_path_partial_for_htmx() {
    let (status, body) = get("/missing", true).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.starts_with("<section>"));
}

#[tokio::test]
async fn test_contact_page_shows_center_details() {
    let (_, body) = get("/contact", false).await;

    assert!(body.contains("Ferdaws Mosque, Al Khobar, SA"));
    assert!(body.contains("+966 51 053 2513"));
    assert!(body.contains("info@wonderminds.edu"));
}

#[tokio::test]
async fn test_health_reports_mail_state() {
    let (status, body) = get("/health", false).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["mail"], "configured");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
