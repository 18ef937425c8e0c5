use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct DefaultResponse {
    pub success: bool,
    pub message: String,
}

/// Handler function for default route "/"
/// Returns a JSON response with 200 status code
pub async fn default_route_handler() -> impl IntoResponse {
    let response = DefaultResponse {
        success: true,
        message: "Server is running".to_string(),
    };
    (StatusCode::OK, Json(response))
}
