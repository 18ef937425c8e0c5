use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    app::AppState,
    constants::{MAX_FULL_NAME_LEN, MIN_PASSWORD_LEN},
    models::{
        user::{AccountRef, Role},
        GenericResponse,
    },
    services::provisioner::ProvisioningPayload,
    utils::{validate_otp, AppError, ValidatedBody},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpReq {
    #[validate(email)]
    pub email: String,

    #[validate(custom(function = "validate_otp"))]
    pub otp: String,

    #[validate(length(min = "MIN_PASSWORD_LEN"))]
    pub password: String,

    #[validate(length(min = 1, max = "MAX_FULL_NAME_LEN"))]
    pub full_name: String,

    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: String,
    pub data: AccountRef,
}

/// Verify signup otp
///
/// Redeems the otp exactly once and provisions the account in the identity
/// store. Wrong, already used and never issued codes get one uniform
/// rejection.
#[utoipa::path(
    post,
    path = "/api/v1/auth/verifyOtp",
    request_body = VerifyOtpReq,
    responses(
        (status = 200, description = "Email verified and account created", body = VerifyOtpResponse),
        (status = 400, description = "Invalid or expired otp, or duplicate account", body = GenericResponse),
        (status = 500, description = "Storage or provisioning failure", body = GenericResponse),
    ),
    tag = "Auth API"
)]
pub async fn verify_otp_handler(
    State(state): State<AppState>,
    ValidatedBody(body): ValidatedBody<VerifyOtpReq>,
) -> Result<Json<VerifyOtpResponse>, AppError> {
    let payload = ProvisioningPayload {
        password: body.password,
        full_name: body.full_name,
        role: body.role,
    };
    let account = state
        .verifier
        .verify(&body.email, &body.otp, &payload)
        .await
        .map_err(|err| err.into_app_error())?;
    let response = VerifyOtpResponse {
        success: true,
        message: "Email verified and account created successfully".to_owned(),
        data: account,
    };
    Ok(Json(response))
}
