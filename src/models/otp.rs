use serde::{Deserialize, Serialize};

use crate::{constants::*, utils::get_epoch_ts};

/// The single persistent entity of the signup otp flow, one record per
/// normalized email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpRecord {
    pub email: String,
    pub otp: String,
    pub valid_till: u64,
    pub created_ts: u64,
}

impl OtpRecord {
    pub fn new(email: &str, otp: &str) -> Self {
        let ts = get_epoch_ts();
        Self {
            email: email.to_string(),
            otp: otp.to_string(),
            valid_till: ts + OTP_VALIDITY_MINS * 60,
            created_ts: ts,
        }
    }

    /// A record is valid for verification strictly before `valid_till`.
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.valid_till
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_expiry_window() {
        let record = OtpRecord::new("ann@example.com", "123456");
        assert_eq!(record.valid_till, record.created_ts + OTP_VALIDITY_MINS * 60);
        assert_eq!(record.is_expired(record.created_ts), false);
    }

    #[test]
    fn test_is_expired_boundary() {
        let record = OtpRecord::new("ann@example.com", "123456");
        assert_eq!(record.is_expired(record.valid_till - 1), false);
        assert_eq!(record.is_expired(record.valid_till), true);
        assert_eq!(record.is_expired(record.valid_till + 1), true);
    }
}
