pub mod error;
pub mod issuer;
pub mod store;
pub mod verifier;

pub use error::OtpError;
pub use issuer::OtpIssuer;
pub use store::{ConsumeOutcome, MongoOtpStore, OtpStore};
pub use verifier::OtpVerifier;
