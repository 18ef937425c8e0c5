use axum::routing::{get, post, IntoMakeService};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    constants::*,
    handlers::{
        default_route_handler, generate_otp_handler, global_404_handler, ping_handler,
        verify_otp_handler,
    },
    otp::{OtpIssuer, OtpVerifier},
    swagger::ApiDoc,
};

/// Shared handler state. The issuer and verifier are stateless coordinators
/// over the injected store, notifier and provisioner; the store is the only
/// shared mutable resource behind them.
#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<OtpIssuer>,
    pub verifier: Arc<OtpVerifier>,
}

/// Build the router with all routes, layers and the swagger ui
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(default_route_handler))
        .route("/api/v1/ping", get(ping_handler))
        .route("/api/v1/auth/generateOtp", post(generate_otp_handler))
        .route("/api/v1/auth/verifyOtp", post(verify_otp_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(global_404_handler)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .with_state(state)
}

pub fn build_app(state: AppState) -> IntoMakeService<Router> {
    tracing::debug!("Initializing the app");
    let app = build_router(state);
    app.into_make_service()
}
