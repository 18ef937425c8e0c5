use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    app::AppState,
    constants::MAX_FULL_NAME_LEN,
    models::GenericResponse,
    utils::{AppError, ValidatedBody},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOtpReq {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = "MAX_FULL_NAME_LEN"))]
    pub full_name: String,
}

/// Generate signup otp
///
/// Issues a fresh otp for the email and sends it out. Calling again for the
/// same email supersedes any outstanding code, which also serves as resend.
#[utoipa::path(
    post,
    path = "/api/v1/auth/generateOtp",
    request_body = GenerateOtpReq,
    responses(
        (status = 200, description = "Otp generated and sent", body = GenericResponse),
        (status = 400, description = "Invalid request data", body = GenericResponse),
        (status = 500, description = "Storage or email delivery failure", body = GenericResponse),
    ),
    tag = "Auth API"
)]
pub async fn generate_otp_handler(
    State(state): State<AppState>,
    ValidatedBody(body): ValidatedBody<GenerateOtpReq>,
) -> Result<Json<JsonValue>, AppError> {
    state
        .issuer
        .generate(&body.email, &body.full_name)
        .await
        .map_err(|err| err.into_app_error())?;
    Ok(Json(
        json!({"success": true, "message": "OTP generated and sent successfully"}),
    ))
}
