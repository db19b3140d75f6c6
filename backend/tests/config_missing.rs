//! Fail-closed behavior when Supabase settings are absent. Kept in its own
//! test binary so clearing the environment cannot race the mocked tests.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use backend::create_app;

async fn request(method: Method) -> (StatusCode, Value) {
    let response = create_app()
        .oneshot(
            Request::builder()
                .method(method)
                .uri("/api/todos")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, serde_json::from_slice(&bytes).expect("body should be JSON"))
}

#[tokio::test]
async fn missing_configuration_fails_closed_for_every_method() {
    std::env::remove_var("SUPABASE_URL");
    std::env::remove_var("SUPABASE_PUBLISHABLE_KEY");

    // Configuration outranks the method check: even a POST gets the 500.
    for method in [Method::GET, Method::POST] {
        let (status, json) = request(method).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Supabase configuration missing");
    }

    // One of the two values alone is not enough.
    std::env::set_var("SUPABASE_URL", "http://localhost:54321");
    let (status, json) = request(Method::GET).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Supabase configuration missing");

    // Empty strings count as missing.
    std::env::set_var("SUPABASE_URL", "");
    std::env::set_var("SUPABASE_PUBLISHABLE_KEY", "");
    let (status, json) = request(Method::GET).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Supabase configuration missing");
}
