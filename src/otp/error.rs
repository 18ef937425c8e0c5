use crate::{constants::OTP_REJECTED_MSG, services::provisioner::ProvisionError, utils::AppError};

/// Failure taxonomy of the otp issuance and verification flow.
#[derive(Debug)]
pub enum OtpError {
    /// Submitted code does not have the expected shape; the store is never
    /// consulted for these.
    MalformedCode(String),
    /// No usable record matched: wrong code, already consumed or never
    /// issued. The cases are deliberately indistinguishable.
    InvalidOrConsumedCode,
    /// A matching record existed but its validity window had passed. The
    /// record is removed as part of the failed attempt.
    CodeExpired,
    StoreUnavailable(anyhow::Error),
    NotificationFailed(anyhow::Error),
    ProvisioningFailed(ProvisionError),
}

impl OtpError {
    /// Map to the HTTP error response. The two rejection variants collapse
    /// into one uniform message; the distinction stays in the logs only.
    pub fn into_app_error(self) -> AppError {
        match self {
            Self::MalformedCode(msg) => AppError::BadRequestErr(msg),
            Self::InvalidOrConsumedCode | Self::CodeExpired => {
                AppError::BadRequestErr(OTP_REJECTED_MSG.to_owned())
            }
            Self::StoreUnavailable(err) => AppError::AnyError(err.context("otp store unavailable")),
            Self::NotificationFailed(err) => {
                AppError::AnyError(err.context("Failed to send OTP email"))
            }
            Self::ProvisioningFailed(ProvisionError::DuplicateEmail(email)) => {
                AppError::BadRequestErr(format!("User already exists with same email: {email}"))
            }
            Self::ProvisioningFailed(ProvisionError::Unavailable(err)) => {
                AppError::AnyError(err.context("Failed to create user account"))
            }
        }
    }
}
