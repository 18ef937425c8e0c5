use std::sync::Arc;

use super::{error::OtpError, store::OtpStore};
use crate::{
    constants::*,
    models::otp::OtpRecord,
    services::notifier::OtpNotifier,
    utils::{generate_otp, normalize_email},
};

/// Generates a fresh code for an email, persists it and hands it to the
/// notifier. Stateless apart from the injected collaborators.
pub struct OtpIssuer {
    store: Arc<dyn OtpStore>,
    notifier: Arc<dyn OtpNotifier>,
}

impl OtpIssuer {
    pub fn new(store: Arc<dyn OtpStore>, notifier: Arc<dyn OtpNotifier>) -> Self {
        Self { store, notifier }
    }

    /// Issue a new otp for the email and send it out. A repeat call for the
    /// same email replaces the outstanding code, even if unexpired; resend
    /// is this same operation triggered again by the client. The generated
    /// code never travels back to the caller.
    pub async fn generate(&self, email: &str, display_name: &str) -> Result<(), OtpError> {
        let email = normalize_email(email);
        let otp = generate_otp(OTP_LENGTH);
        let record = OtpRecord::new(&email, &otp);
        self.store
            .put(&record)
            .await
            .map_err(OtpError::StoreUnavailable)?;
        tracing::debug!("otp stored for {}, valid till {}", email, record.valid_till);
        // a failed send leaves the stored record usable, the client retries
        // through resend instead of restarting the signup
        self.notifier
            .send(&email, &otp, display_name)
            .await
            .map_err(OtpError::NotificationFailed)?;
        Ok(())
    }
}
