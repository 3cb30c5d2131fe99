//! HTTP surface: shared state, routes, and the server itself.

pub mod handler;
pub mod server;

use std::sync::Arc;

use crate::ai::TextGenerator;
use crate::core::config::AppConfig;

pub use server::{ApiServer, router};

/// Shared state accessible from every Axum handler.
///
/// Holds the injected text-generation client and the immutable startup
/// configuration. Wrapped in an `Arc` and cloned into each handler.
pub struct AppState {
    /// The LLM client used for the summarize and refine calls.
    pub generator: Arc<dyn TextGenerator>,

    /// Process-wide configuration, loaded once at startup.
    pub config: AppConfig,
}
