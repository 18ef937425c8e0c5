use axum::async_trait;
use mongodb::bson::doc;
use mongodb::options::UpdateOptions;
use std::sync::Arc;

use crate::{constants::*, database::AppDatabase, models::otp::OtpRecord};

#[cfg(test)]
use mockall::automock;

/// Result of an atomic consume attempt for an (email, otp) pair.
#[derive(Debug, PartialEq)]
pub enum ConsumeOutcome {
    /// The matching record was removed while still valid.
    Found(OtpRecord),
    /// No matching record: wrong code, already consumed or never issued.
    NotFound,
    /// The matching record was removed but its validity window had passed.
    Expired,
}

impl ConsumeOutcome {
    /// Classify a record removed from storage against the submitted instant.
    pub fn classify(removed: Option<OtpRecord>, now: u64) -> Self {
        match removed {
            None => Self::NotFound,
            Some(record) if record.is_expired(now) => Self::Expired,
            Some(record) => Self::Found(record),
        }
    }
}

/// Single source of truth for outstanding otp records.
///
/// `put` replaces any existing record for the same email (last writer wins)
/// and `consume_if_valid` removes the matching record in the same atomic
/// step, so two racing consumers can never both observe `Found`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait OtpStore: Send + Sync {
    async fn put(&self, record: &OtpRecord) -> anyhow::Result<()>;

    async fn consume_if_valid(
        &self,
        email: &str,
        otp: &str,
        now: u64,
    ) -> anyhow::Result<ConsumeOutcome>;

    async fn delete(&self, email: &str) -> anyhow::Result<()>;
}

/// Otp storage in the `otpVerifications` collection, one document per email.
/// Per document atomicity of upsert and findOneAndDelete carries the whole
/// concurrency contract.
pub struct MongoOtpStore {
    db: Arc<AppDatabase>,
}

impl MongoOtpStore {
    pub fn new(db: Arc<AppDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OtpStore for MongoOtpStore {
    async fn put(&self, record: &OtpRecord) -> anyhow::Result<()> {
        let filter = doc! {"email": &record.email};
        let update = doc! {
            "$set": {
                "otp": &record.otp,
                "validTill": record.valid_till as i64,
                "createdTs": record.created_ts as i64,
            }
        };
        let options = UpdateOptions::builder().upsert(Some(true)).build();
        self.db
            .update_one(DB_NAME, COLL_OTP, filter, update, Some(options))
            .await?;
        Ok(())
    }

    async fn consume_if_valid(
        &self,
        email: &str,
        otp: &str,
        now: u64,
    ) -> anyhow::Result<ConsumeOutcome> {
        // an expired match is removed as well, classification happens after
        let filter = doc! {"email": email, "otp": otp};
        let removed = self
            .db
            .find_one_and_delete::<OtpRecord>(DB_NAME, COLL_OTP, filter, None)
            .await?;
        Ok(ConsumeOutcome::classify(removed, now))
    }

    async fn delete(&self, email: &str) -> anyhow::Result<()> {
        let filter = doc! {"email": email};
        self.db.delete_one(DB_NAME, COLL_OTP, filter, None).await?;
        Ok(())
    }
}
