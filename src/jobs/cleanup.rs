use mongodb::bson::doc;
use std::{sync::Arc, time::Duration};
use tokio::time::interval;

use crate::{constants::*, database::AppDatabase, utils::get_epoch_ts};

/// This function periodically deletes stale otp records from database.
/// Expiry is enforced at consume time; the sweep only reclaims storage and
/// never runs on the request path.
pub async fn cleanup_job(db: Arc<AppDatabase>) {
    tracing::debug!("initializing cleanup scheduler job");
    // CLEANUP_JOB_INTERVAL is mentioned in seconds
    let mut interval = interval(Duration::from_secs(CLEANUP_JOB_INTERVAL));
    loop {
        interval.tick().await;
        if let Err(err) = delete_stale_otps(&db).await {
            tracing::debug!("Error in otp deletion: {:?}", err);
        }
    }
}

/// This function deletes the otp records which expired before the retention period
async fn delete_stale_otps(db: &Arc<AppDatabase>) -> anyhow::Result<()> {
    let ts = get_epoch_ts();
    // OTP_RETENTION variable is mentioned in number of days
    let cut_off = OTP_RETENTION * 24 * 3600;
    let cut_off = ts - cut_off;
    let filter = doc! {"validTill": {"$lt": cut_off as i64}};
    db.delete_many(DB_NAME, COLL_OTP, filter, None).await?;
    Ok(())
}
