use std::sync::Arc;

use super::{
    error::OtpError,
    store::{ConsumeOutcome, OtpStore},
};
use crate::{
    models::user::AccountRef,
    services::provisioner::{AccountProvisioner, ProvisioningPayload},
    utils::{get_epoch_ts, normalize_email, validate_otp},
};

/// Validates a submitted code against the store and provisions the account
/// on success. Consuming the record and creating the account are two steps;
/// the code stays spent even when provisioning fails.
pub struct OtpVerifier {
    store: Arc<dyn OtpStore>,
    provisioner: Arc<dyn AccountProvisioner>,
}

impl OtpVerifier {
    pub fn new(store: Arc<dyn OtpStore>, provisioner: Arc<dyn AccountProvisioner>) -> Self {
        Self { store, provisioner }
    }

    pub async fn verify(
        &self,
        email: &str,
        otp: &str,
        payload: &ProvisioningPayload,
    ) -> Result<AccountRef, OtpError> {
        // shape check happens before any store access
        if let Err(err) = validate_otp(otp) {
            let msg = err
                .message
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| "Invalid OTP format".to_owned());
            return Err(OtpError::MalformedCode(msg));
        }
        let email = normalize_email(email);
        let now = get_epoch_ts();
        let outcome = self
            .store
            .consume_if_valid(&email, otp, now)
            .await
            .map_err(OtpError::StoreUnavailable)?;
        match outcome {
            ConsumeOutcome::NotFound => {
                tracing::debug!("otp rejected for {}: no matching record", email);
                Err(OtpError::InvalidOrConsumedCode)
            }
            ConsumeOutcome::Expired => {
                tracing::debug!("otp rejected for {}: code expired", email);
                Err(OtpError::CodeExpired)
            }
            ConsumeOutcome::Found(_) => {
                let account = self
                    .provisioner
                    .create_account(&email, payload)
                    .await
                    .map_err(OtpError::ProvisioningFailed)?;
                // consume already removed the record; the explicit delete
                // only matters for stores which mark records instead of
                // removing them
                if let Err(err) = self.store.delete(&email).await {
                    tracing::debug!("post-provision otp delete failed for {}: {:?}", email, err);
                }
                tracing::debug!("account provisioned for {}", email);
                Ok(account)
            }
        }
    }
}
