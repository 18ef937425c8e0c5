use std::sync::Arc;

use self::cleanup::cleanup_job;
use crate::database::AppDatabase;

pub mod cleanup;

pub fn spawn_all_jobs(db_client: Arc<AppDatabase>) {
    // spawn job to cleanup stale otp records
    tokio::spawn(async {
        cleanup_job(db_client).await;
    });
}
