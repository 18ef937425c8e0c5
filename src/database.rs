use crate::constants::*;
use mongodb::bson::Document;
use mongodb::error::Result as MongoResult;
use mongodb::options::{ClientOptions, DeleteOptions, FindOneAndDeleteOptions, UpdateOptions};
use mongodb::results::{DeleteResult, UpdateResult};
use mongodb::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct AppDatabase(Client);

impl AppDatabase {
    pub async fn new() -> MongoResult<Self> {
        // get all database parameters from environment
        // when not found in environemtn it should panic
        let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI not found in .env file");
        let min_pool = std::env::var("MONGODB_MIN_POOL_SIZE").unwrap_or_default();
        let max_pool = std::env::var("MONGODB_MAX_POOL_SIZE").unwrap_or_default();
        let min_pool = min_pool.parse::<u32>().unwrap_or(MONGO_MIN_POOL_SIZE);
        let max_pool = max_pool.parse::<u32>().unwrap_or(MONGO_MAX_POOL_SIZE);
        let timeout = Duration::from_secs(MONGO_CONN_TIMEOUT);
        // create the mongodb client options
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.max_pool_size = Some(max_pool);
        client_options.min_pool_size = Some(min_pool);
        client_options.connect_timeout = Some(timeout);
        // create the client and return Result object
        let client = Client::with_options(client_options)?;
        let app_db = Self(client);
        Ok(app_db)
    }

    pub async fn update_one(
        &self,
        db: &str,
        coll: &str,
        filter: Document,
        update: Document,
        options: Option<UpdateOptions>,
    ) -> MongoResult<UpdateResult> {
        let coll = self.0.database(db).collection::<Document>(coll);
        coll.update_one(filter, update, options).await
    }

    pub async fn find_one_and_delete<T>(
        &self,
        db: &str,
        coll: &str,
        filter: Document,
        options: Option<FindOneAndDeleteOptions>,
    ) -> MongoResult<Option<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync + 'static,
    {
        let coll = self.0.database(db).collection::<T>(coll);
        coll.find_one_and_delete(filter, options).await
    }

    pub async fn delete_one(
        &self,
        db: &str,
        coll: &str,
        filter: Document,
        options: Option<DeleteOptions>,
    ) -> MongoResult<DeleteResult> {
        let coll = self.0.database(db).collection::<Document>(coll);
        coll.delete_one(filter, options).await
    }

    pub async fn delete_many(
        &self,
        db: &str,
        coll: &str,
        filter: Document,
        options: Option<DeleteOptions>,
    ) -> MongoResult<DeleteResult> {
        let coll = self.0.database(db).collection::<Document>(coll);
        coll.delete_many(filter, options).await
    }
}
