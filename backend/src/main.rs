//! Main entry point for the TeeBox backend.
//!
//! This file initializes the Axum web server, sets up the database connection,
//! and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall structure.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod services;
mod utils;

use axum::{Extension, Router, response::Json, routing::get};
use config::Config;
use database::Database;
use serde_json::{Value, json};
use tracing::info;
use tracing_subscriber::fmt::init;
use utils::jwt::JwtUtils;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();
    let pool = db.pool().clone();
    let jwt_utils = JwtUtils::new(&config.jwt_secret, config.jwt_expires_in_seconds);

    let app = Router::new()
        .route("/", get(root_handler))
        .nest(
            "/api",
            auth::routes::auth_router().merge(api::tee_time::routes::tee_time_router()),
        )
        .layer(Extension(pool))
        .layer(Extension(jwt_utils));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting TeeBox server on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "TeeBox Backend",
        "version": "0.1.0"
    }))
}
