// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spacegen Server - floor-plan to IFC generation service.
//!
//! Accepts a 2D floor plan (rooms with polygon boundaries, heights, base
//! elevations, and a core flag) and returns a generated IFC4 building model
//! as a binary file.
//!
//! # Endpoints
//!
//! - `GET /` - API information
//! - `GET /api/v1/health` - Health check
//! - `POST /generate-ifc` - Generate and return the IFC artifact

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

mod config;
mod error;
mod routes;
mod services;
mod types;

use config::Config;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,tower_http=debug,spacegen_server=debug".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!(
        port = config.port,
        output_dir = %config.output_dir.display(),
        max_body_size_mb = config.max_body_size_mb,
        "Starting Spacegen Server"
    );

    let state = AppState {
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = Router::new()
        // Root endpoint - API information
        .route("/", get(routes::health::info))
        // Health check
        .route("/api/v1/health", get(routes::health::check))
        // Generation endpoint
        .route("/generate-ifc", post(routes::generate::generate_ifc))
        // Middleware
        .layer(DefaultBodyLimit::max(config.max_body_size_mb * 1024 * 1024))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
