//! # PharmSched API
//!
//! The API crate provides the web server implementation for the PharmSched
//! staff scheduling service. It exposes the roster's URL surface: schedules,
//! shifts, people (with their backing accounts), and groups, all gated by the
//! role-based access policy in `pharmsched-core`.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Session authentication, actor extraction, error mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database interactions.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement the gated CRUD workflows
pub mod handlers;
/// Session authentication, actor extraction, and error handling
pub mod middleware;
/// Handler outcome types and redirect helpers
pub mod response;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Secret used to sign session cookies
    pub session_secret: String,
}

/// Builds the application router.
///
/// Split out of [`start_server`] so tests can drive the full route table
/// without binding a socket.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Landing page, login and logout
        .merge(routes::auth::routes())
        // Schedule and shift management endpoints
        .merge(routes::schedule::routes())
        // Staff roster and account endpoints
        .merge(routes::people::routes())
        // Group endpoints
        .merge(routes::groups::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and database
/// connection: sets up logging, builds the router, and serves until the
/// process is stopped.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let session_secret = config.session_secret.clone().unwrap_or_else(|| {
        warn!("SESSION_SECRET not set; falling back to a development-only secret");
        "pharmsched-insecure-dev-secret".to_string()
    });

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        db_pool,
        session_secret,
    });

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
