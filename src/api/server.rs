//! Server setup and startup.
//!
//! [`ApiServer`] composes the Axum router, registers the routes, applies the
//! CORS allow-list, and starts the HTTP listener.

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use crate::ai::TextGenerator;
use crate::core::config::AppConfig;
use crate::errors::ApiError;

use super::AppState;
use super::handler;

/// Build the Axum router with all routes registered.
///
/// # Errors
///
/// Returns an error if the configured allowed origin is not a valid header
/// value.
pub fn router(state: Arc<AppState>) -> Result<Router, ApiError> {
    let origin = state
        .config
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| {
            ApiError::ConfigError(format!(
                "ALLOWED_ORIGIN {:?}: {e}",
                state.config.allowed_origin
            ))
        })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Router::new()
        .route("/generate-summary", post(handler::generate_summary))
        .route("/healthz", get(handler::healthz))
        .layer(cors)
        .with_state(state))
}

/// The newsbrief HTTP server.
pub struct ApiServer {
    config: AppConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    /// Create a new server with an injected text-generation client.
    pub fn new(config: AppConfig, generator: Arc<dyn TextGenerator>) -> Self {
        let state = Arc::new(AppState {
            generator,
            config: config.clone(),
        });
        Self { config, state }
    }

    /// The address this server will bind to.
    #[must_use]
    pub fn addr(&self) -> &str {
        &self.config.bind_addr
    }

    /// Start the server and block until it is shut down.
    ///
    /// # Errors
    ///
    /// Returns an error if the router cannot be built or the TCP listener
    /// cannot be bound.
    pub async fn start(self) -> anyhow::Result<()> {
        let router = router(Arc::clone(&self.state))?;

        tracing::info!(
            addr = %self.config.bind_addr,
            allowed_origin = %self.config.allowed_origin,
            model = %self.config.model(),
            "starting newsbrief server"
        );

        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr).await?;
        axum::serve(listener, router).await?;
        Ok(())
    }
}
