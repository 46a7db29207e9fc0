#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Router-level tests for the identity middleware and extractors
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use modkit_identity::{Authentication, Principal, SecurityContext, authorities};
use modkit_identity_axum::{
    Authenticated, CurrentIdentity, CurrentLogin, IdentityLayerConfig, MissingContextMode,
    ensure_security_context,
};
use tower::ServiceExt;

async fn whoami(CurrentIdentity(ctx): CurrentIdentity) -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "login": ctx.current_login(),
        "authenticated": ctx.is_authenticated().ok(),
    }))
}

async fn login(CurrentLogin(login): CurrentLogin) -> impl IntoResponse {
    login
}

async fn secured(Authenticated(ctx): Authenticated) -> impl IntoResponse {
    ctx.current_login().unwrap_or_default().to_owned()
}

/// Simulates upstream authentication resolving `alice` as a regular user.
async fn inject_alice(mut req: Request, next: Next) -> Response {
    let ctx = SecurityContext::authenticated(
        Authentication::builder()
            .principal(Principal::user("alice"))
            .authority(authorities::USER)
            .build(),
    );
    req.extensions_mut().insert(ctx);
    next.run(req).await
}

fn app(cfg: IdentityLayerConfig) -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route("/login", get(login))
        .route("/secured", get(secured))
        .layer(middleware::from_fn_with_state(Arc::new(cfg), ensure_security_context))
}

fn mode(missing_context: MissingContextMode) -> IdentityLayerConfig {
    IdentityLayerConfig {
        missing_context,
        ..IdentityLayerConfig::default()
    }
}

async fn call(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn anonymous_mode_inserts_anonymous_context() {
    let (status, body) = call(app(IdentityLayerConfig::default()), "/whoami").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["login"], "anonymousUser");
    assert_eq!(json["authenticated"], false);
}

#[tokio::test]
async fn anonymous_mode_uses_configured_principal() {
    let cfg = IdentityLayerConfig {
        anonymous_principal: "guest".to_owned(),
        ..IdentityLayerConfig::default()
    };
    let (status, body) = call(app(cfg), "/login").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"guest");
}

#[tokio::test]
async fn empty_mode_has_no_login() {
    let (status, body) = call(app(mode(MissingContextMode::Empty)), "/whoami").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["login"].is_null());
    assert!(json["authenticated"].is_null());
}

#[tokio::test]
async fn empty_mode_rejects_login_extractor() {
    let (status, _) = call(app(mode(MissingContextMode::Empty)), "/login").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_mode_rejects_secured_route_as_unauthenticated() {
    let (status, body) = call(app(mode(MissingContextMode::Empty)), "/secured").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], 401);
    assert_eq!(json["title"], "Unauthorized");
    assert_eq!(json["detail"], "security context carries no authentication");
}

#[tokio::test]
async fn empty_mode_extractors_agree_on_status() {
    let app = app(mode(MissingContextMode::Empty));

    let (login_status, _) = call(app.clone(), "/login").await;
    let (secured_status, _) = call(app, "/secured").await;
    assert_eq!(login_status, secured_status);
}

#[tokio::test]
async fn reject_mode_short_circuits() {
    let (status, body) = call(app(mode(MissingContextMode::Reject)), "/whoami").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], 401);
    assert_eq!(json["detail"], "authentication required");
}

#[tokio::test]
async fn anonymous_caller_cannot_reach_secured_route() {
    let (status, _) = call(app(IdentityLayerConfig::default()), "/secured").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn existing_context_is_preserved() {
    let app = app(mode(MissingContextMode::Reject)).layer(middleware::from_fn(inject_alice));

    let (status, body) = call(app.clone(), "/secured").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"alice");

    let (status, body) = call(app, "/whoami").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["login"], "alice");
    assert_eq!(json["authenticated"], true);
}

#[tokio::test]
async fn extractor_without_middleware_is_a_wiring_fault() {
    let app = Router::new().route("/whoami", get(whoami));

    let (status, body) = call(app, "/whoami").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json["detail"],
        "security context not available - identity middleware not configured"
    );
}
