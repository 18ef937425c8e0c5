use std::{net::SocketAddr, sync::Arc};

use app::AppState;
use database::AppDatabase;
use dotenvy::dotenv;
use jobs::spawn_all_jobs;
use otp::{MongoOtpStore, OtpIssuer, OtpVerifier};
use services::{IdentityProvisioner, ResendNotifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod app;
pub mod constants;
pub mod database;
pub mod handlers;
pub mod jobs;
pub mod models;
pub mod otp;
pub mod services;
pub mod swagger;
pub mod utils;

pub async fn start_web_server() {
    // import .env file
    dotenv().ok();
    initialize_logging();
    // create database client
    let db_client = AppDatabase::new()
        .await
        .expect("Unable to accquire database client");
    let db_client = Arc::new(db_client);
    let state = build_state(db_client.clone());
    spawn_all_jobs(db_client);
    start_server(state).await;
}

/// Wire the mongo backed store and the external collaborators into the
/// stateless issuer and verifier
fn build_state(db_client: Arc<AppDatabase>) -> AppState {
    let store = Arc::new(MongoOtpStore::new(db_client));
    let notifier = Arc::new(ResendNotifier::new());
    let provisioner = Arc::new(IdentityProvisioner::new());
    AppState {
        issuer: Arc::new(OtpIssuer::new(store.clone(), notifier)),
        verifier: Arc::new(OtpVerifier::new(store, provisioner)),
    }
}

fn initialize_logging() {
    // create default env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or("seekho_backend_rust=debug".into());

    // initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

async fn start_server(state: AppState) {
    // read the port number from env variable
    let port = std::env::var("PORT").unwrap_or_default();
    let port = port.parse::<u16>().unwrap_or(3000);
    // build the socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    // create the app instance
    let app = app::build_app(state);
    tracing::debug!("Starting the app in: {addr}");
    // start serving the app in the socket address
    axum::Server::bind(&addr).serve(app).await.unwrap();
}
