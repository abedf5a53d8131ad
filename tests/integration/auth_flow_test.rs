//! Auth-path integration tests through the composed application router.
//!
//! Protected routes must reject a request before any business logic or
//! database access happens; these tests therefore run against a lazily
//! connected pool and a stubbed JWKS endpoint only.

mod common;

use axum::body::Body;
use axum::http::{header::AUTHORIZATION, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use common::{build_app, future_exp, mint_rs256, past_exp, AUDIENCE, TEST_KID};

fn get_request(uri: &str, auth_header: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = auth_header {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_check_needs_no_token() {
    let server = common::start_jwks_server().await;
    let app = build_app(&server);

    let response = app.oneshot(get_request("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_route_rejects_missing_authorization() {
    let server = common::start_jwks_server().await;
    let app = build_app(&server);

    let response = app
        .oneshot(get_request("/api/analysts", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "MISSING_AUTHORIZATION");

    // The rejection happened before any key lookup
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn protected_route_rejects_malformed_scheme() {
    let server = common::start_jwks_server().await;
    let app = build_app(&server);

    let response = app
        .oneshot(get_request("/api/analysts", Some("Basic abc123")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "INVALID_AUTHORIZATION");
}

#[tokio::test]
async fn whoami_returns_verified_claims() {
    let server = common::start_jwks_server().await;
    let app = build_app(&server);

    let token = mint_rs256("user_2abc", future_exp(), AUDIENCE, Some(TEST_KID));
    let response = app
        .oneshot(get_request(
            "/api/auth/whoami",
            Some(&format!("Bearer {token}")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["sub"], "user_2abc");
    assert_eq!(json["aud"], AUDIENCE);
}

#[tokio::test]
async fn whoami_rejects_expired_token() {
    let server = common::start_jwks_server().await;
    let app = build_app(&server);

    let token = mint_rs256("user_2abc", past_exp(), AUDIENCE, Some(TEST_KID));
    let response = app
        .oneshot(get_request(
            "/api/auth/whoami",
            Some(&format!("Bearer {token}")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn whoami_rejects_unknown_kid() {
    let server = common::start_jwks_server().await;
    let app = build_app(&server);

    let token = mint_rs256("user_2abc", future_exp(), AUDIENCE, Some("rotated-away"));
    let response = app
        .oneshot(get_request(
            "/api/auth/whoami",
            Some(&format!("Bearer {token}")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "UNKNOWN_KEY");
}

#[tokio::test]
async fn key_set_outage_answers_unauthorized_not_server_error() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.well-known/jwks.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let app = build_app(&server);

    let token = mint_rs256("user_2abc", future_exp(), AUDIENCE, Some(TEST_KID));
    let response = app
        .oneshot(get_request(
            "/api/auth/whoami",
            Some(&format!("Bearer {token}")),
        ))
        .await
        .unwrap();

    // An unreachable issuer is an authentication failure, not a 5xx
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "KEY_SET_UNAVAILABLE");
}

#[tokio::test]
async fn two_concurrent_requests_with_the_same_token_both_succeed() {
    let server = common::start_jwks_server().await;
    let app = build_app(&server);

    let token = mint_rs256("user_2abc", future_exp(), AUDIENCE, Some(TEST_KID));
    let auth_value = format!("Bearer {token}");

    let (a, b) = tokio::join!(
        app.clone()
            .oneshot(get_request("/api/auth/whoami", Some(&auth_value))),
        app.oneshot(get_request("/api/auth/whoami", Some(&auth_value))),
    );

    assert_eq!(a.unwrap().status(), StatusCode::OK);
    assert_eq!(b.unwrap().status(), StatusCode::OK);

    // No cache configured: each request fetched its own key-set copy
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
