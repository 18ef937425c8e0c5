use axum::{body::Body, http::Request, http::StatusCode, Router};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot` and `ready`

use seekho_backend_rust::app::{build_router, AppState};
use seekho_backend_rust::otp::{OtpIssuer, OtpVerifier};

use super::fakes::{FakeProvisioner, MemoryOtpStore, RecordingNotifier};

/// Full app wired onto in-memory fakes, with handles kept for assertions
pub struct TestContext {
    pub app: Router,
    pub store: Arc<MemoryOtpStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub provisioner: Arc<FakeProvisioner>,
}

pub fn test_context() -> TestContext {
    let store = Arc::new(MemoryOtpStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let provisioner = Arc::new(FakeProvisioner::default());
    let state = AppState {
        issuer: Arc::new(OtpIssuer::new(store.clone(), notifier.clone())),
        verifier: Arc::new(OtpVerifier::new(store.clone(), provisioner.clone())),
    };
    TestContext {
        app: build_router(state),
        store,
        notifier,
        provisioner,
    }
}

pub fn build_post_request(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub async fn send_json(app: Router, path: &str, body: &str) -> (StatusCode, JsonValue) {
    let res = app.oneshot(build_post_request(path, body)).await.unwrap();
    let status = res.status();
    let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
    let json: JsonValue = serde_json::from_slice(&body).unwrap();
    (status, json)
}

pub async fn generate_otp(app: Router, email: &str, full_name: &str) -> (StatusCode, JsonValue) {
    let body = format!("{{\"email\": \"{}\", \"fullName\": \"{}\"}}", email, full_name);
    send_json(app, "/api/v1/auth/generateOtp", &body).await
}

pub async fn verify_otp(app: Router, email: &str, otp: &str) -> (StatusCode, JsonValue) {
    let body = format!(
        "{{\"email\": \"{}\", \"otp\": \"{}\", \"password\": \"secret-password\", \"fullName\": \"Test User\", \"role\": \"student\"}}",
        email, otp
    );
    send_json(app, "/api/v1/auth/verifyOtp", &body).await
}
