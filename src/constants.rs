pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const MONGO_MIN_POOL_SIZE: u32 = 5;
pub const MONGO_MAX_POOL_SIZE: u32 = 10;
pub const MONGO_CONN_TIMEOUT: u64 = 10;
pub const OTP_LENGTH: u32 = 6;
pub const OTP_VALIDITY_MINS: u64 = 10;
// OTP_RETENTION is mentioned in number of days
pub const OTP_RETENTION: u64 = 1;
pub const CLEANUP_JOB_INTERVAL: u64 = 24 * 60 * 60;
pub const EXTERNAL_CALL_TIMEOUT_SECS: u64 = 5;
pub const MIN_PASSWORD_LEN: u64 = 8;
pub const MAX_FULL_NAME_LEN: u64 = 50;

pub const RESEND_API_URL: &str = "https://api.resend.com/emails";
pub const DEFAULT_EMAIL_FROM: &str = "SEEKHO <onboarding@resend.dev>";
pub const OTP_EMAIL_SUBJECT: &str = "Verify your email - SEEKHO";
// one user facing message covers every otp rejection, logs keep the detail
pub const OTP_REJECTED_MSG: &str = "Invalid or expired OTP";

pub const DB_NAME: &str = "seekho";

pub const COLL_OTP: &str = "otpVerifications";
