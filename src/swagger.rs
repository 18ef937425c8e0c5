use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::ping::ping_handler,
        crate::handlers::auth::generate_otp::generate_otp_handler,
        crate::handlers::auth::verify_otp::verify_otp_handler,
    ),
    components(
        schemas(
            crate::handlers::auth::generate_otp::GenerateOtpReq,
            crate::handlers::auth::verify_otp::VerifyOtpReq,
            crate::handlers::auth::verify_otp::VerifyOtpResponse,

            crate::models::GenericResponse,
            crate::models::AccountRef,
            crate::models::Role,
        )
    ),
    tags(
        (name = "Debugging API", description = "API for debugging purposes"),
        (name = "Auth API", description = "API for signup otp issuance and verification")
    )
)]
pub struct ApiDoc;
