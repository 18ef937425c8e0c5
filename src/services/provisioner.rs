use axum::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::{
    constants::*,
    models::user::{AccountRef, Role},
};

#[cfg(test)]
use mockall::automock;

/// Credentials and profile data collected alongside the otp.
#[derive(Debug, Clone)]
pub struct ProvisioningPayload {
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

/// Failure modes of the external identity store.
#[derive(Debug)]
pub enum ProvisionError {
    /// The identity store owns email uniqueness and reports duplicates
    /// distinguishably.
    DuplicateEmail(String),
    Unavailable(anyhow::Error),
}

/// Creates the permanent account record in the external identity store,
/// gated on a consumed otp.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountProvisioner: Send + Sync {
    async fn create_account(
        &self,
        email: &str,
        payload: &ProvisioningPayload,
    ) -> Result<AccountRef, ProvisionError>;
}

/// Account creation through the identity store admin API. The email is
/// marked confirmed, ownership was already proven by the consumed otp.
pub struct IdentityProvisioner {
    client: Client,
    base_url: String,
    service_key: String,
}

impl IdentityProvisioner {
    pub fn new() -> Self {
        let base_url =
            std::env::var("IDENTITY_BASE_URL").expect("IDENTITY_BASE_URL not found in .env file");
        let service_key = std::env::var("IDENTITY_SERVICE_KEY")
            .expect("IDENTITY_SERVICE_KEY not found in .env file");
        let client = Client::builder()
            .timeout(Duration::from_secs(EXTERNAL_CALL_TIMEOUT_SECS))
            .build()
            .expect("Unable to build the identity http client");
        Self {
            client,
            base_url,
            service_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatedUser {
    id: String,
}

#[async_trait]
impl AccountProvisioner for IdentityProvisioner {
    async fn create_account(
        &self,
        email: &str,
        payload: &ProvisioningPayload,
    ) -> Result<AccountRef, ProvisionError> {
        let url = format!("{}/auth/v1/admin/users", self.base_url);
        let body = json!({
            "email": email,
            "password": payload.password,
            "email_confirm": true,
            "user_metadata": {
                "full_name": payload.full_name,
                "role": payload.role,
            }
        });
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.service_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| ProvisionError::Unavailable(err.into()))?;
        match response.status() {
            status if status.is_success() => {
                let created = response
                    .json::<CreatedUser>()
                    .await
                    .map_err(|err| ProvisionError::Unavailable(err.into()))?;
                Ok(AccountRef {
                    id: created.id,
                    email: email.to_owned(),
                    full_name: payload.full_name.to_owned(),
                    role: payload.role,
                })
            }
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ProvisionError::DuplicateEmail(email.to_owned()))
            }
            status => {
                let text = response.text().await.unwrap_or_default();
                Err(ProvisionError::Unavailable(anyhow::anyhow!(
                    "identity store returned {status}: {text}"
                )))
            }
        }
    }
}
