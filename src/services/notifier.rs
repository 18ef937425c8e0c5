use axum::async_trait;
use reqwest::Client;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

use crate::{constants::*, utils::replace_placeholders};

#[cfg(test)]
use mockall::automock;

/// Delivers a generated otp to an email address. Content formatting is the
/// notifier's concern; the flow only hands over the 6 digit string.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait OtpNotifier: Send + Sync {
    async fn send(&self, email: &str, otp: &str, display_name: &str) -> anyhow::Result<()>;
}

const OTP_EMAIL_TEMPLATE: &str = r#"
<div style="max-width: 600px; margin: 0 auto; padding: 20px; font-family: Arial, sans-serif;">
  <div style="text-align: center; margin-bottom: 30px;">
    <h1 style="color: #4F46E5; margin: 0; font-size: 28px;">SEEKHO</h1>
    <p style="color: #666; margin: 10px 0 0 0;">E-Learning Platform</p>
  </div>
  <div style="background: #f8f9fa; padding: 30px; border-radius: 10px; margin-bottom: 20px;">
    <h2 style="color: #333; margin: 0 0 20px 0;">Welcome to SEEKHO, {{fullName}}!</h2>
    <p style="color: #666; line-height: 1.6; margin-bottom: 20px;">
      Thank you for signing up! Please use the verification code below to complete your registration:
    </p>
    <div style="text-align: center; margin: 30px 0;">
      <div style="display: inline-block; background: #4F46E5; color: white; padding: 15px 30px; border-radius: 8px; font-size: 24px; font-weight: bold; letter-spacing: 3px;">
        {{otp}}
      </div>
    </div>
    <p style="color: #666; line-height: 1.6; margin-bottom: 0;">
      This code will expire in 10 minutes. If you didn't create an account with us, please ignore this email.
    </p>
  </div>
  <div style="text-align: center; padding-top: 20px; border-top: 1px solid #eee;">
    <p style="color: #999; font-size: 14px; margin: 0;">
      This is an automated message from SEEKHO. Please do not reply to this email.
    </p>
  </div>
</div>
"#;

/// Transactional email delivery through the Resend HTTP API
pub struct ResendNotifier {
    client: Client,
    api_key: String,
    from: String,
}

impl ResendNotifier {
    pub fn new() -> Self {
        // api key is mandatory, sender address falls back to the default
        let api_key =
            std::env::var("RESEND_API_KEY").expect("RESEND_API_KEY not found in .env file");
        let from =
            std::env::var("OTP_EMAIL_FROM").unwrap_or_else(|_| DEFAULT_EMAIL_FROM.to_owned());
        let client = Client::builder()
            .timeout(Duration::from_secs(EXTERNAL_CALL_TIMEOUT_SECS))
            .build()
            .expect("Unable to build the email http client");
        Self {
            client,
            api_key,
            from,
        }
    }
}

#[async_trait]
impl OtpNotifier for ResendNotifier {
    async fn send(&self, email: &str, otp: &str, display_name: &str) -> anyhow::Result<()> {
        let name = if display_name.trim().is_empty() {
            "there"
        } else {
            display_name
        };
        let mut options = HashMap::new();
        options.insert("fullName".to_owned(), name.to_owned());
        options.insert("otp".to_owned(), otp.to_owned());
        let html = replace_placeholders(OTP_EMAIL_TEMPLATE, options)?;
        let body = json!({
            "from": self.from,
            "to": [email],
            "subject": OTP_EMAIL_SUBJECT,
            "html": html,
        });
        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("resend returned {status}: {text}"));
        }
        tracing::debug!("otp email sent to {email}");
        Ok(())
    }
}
