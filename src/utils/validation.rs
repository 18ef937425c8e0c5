use axum::{
    async_trait,
    extract::FromRequest,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestExt,
};
use validator::{Validate, ValidationError};

use super::AppError;
use crate::{constants::*, models::GenericResponse};

/// Custom validator function to check a submitted otp code
pub fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    // otp must have the exact generated length
    if otp.len() != OTP_LENGTH as usize {
        let mut err = ValidationError::new("otp");
        err.message = Some(format!("OTP must be {OTP_LENGTH} digits").into());
        return Err(err);
    }
    // otp must be all numeric chars
    if !otp.chars().all(|ch| ch.is_ascii_digit()) {
        let mut err = ValidationError::new("otp");
        err.message = Some(format!("OTP must be all digits").into());
        return Err(err);
    }

    Ok(())
}

pub struct ValidatedBody<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for ValidatedBody<T>
where
    B: Send + 'static,
    S: Send + Sync,
    T: Validate + 'static,
    Json<T>: FromRequest<(), B>,
{
    type Rejection = Response;

    async fn from_request(req: Request<B>, _state: &S) -> Result<Self, Self::Rejection> {
        // extract the JSON body
        let Json(data) = req.extract::<Json<T>, _>().await.map_err(|_| {
            let response = GenericResponse {
                success: false,
                message: "Invalid JSON body".to_owned(),
            };
            (StatusCode::UNPROCESSABLE_ENTITY, Json(response)).into_response()
        })?;
        // validate the extracted body
        data.validate()
            .map_err(|err| AppError::BadRequestErr(err.to_string()).into_response())?;
        Ok(Self(data))
    }
}
