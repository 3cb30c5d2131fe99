/// Newsbrief - an HTTP service that condenses news headlines into a short
/// summary using ChatGPT.
///
/// The service exposes a single `POST /generate-summary` endpoint. Each
/// request makes two sequential calls to the OpenAI API: the first produces
/// a draft summary of the headlines, the second rewrites the draft for
/// fluency. The refined text is returned as JSON.
///
/// # Architecture
///
/// The system uses:
/// - Axum for the HTTP server and routing
/// - tower-http for the CORS allow-list
/// - openai-api-rs message types with reqwest for the OpenAI calls
/// - Tokio for async runtime
///
/// The OpenAI client is injected into the request handlers behind the
/// [`ai::TextGenerator`] trait so tests can substitute a stub.
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;

/// Configure structured logging for the server process.
///
/// Sets up tracing-subscriber with an fmt layer and an `RUST_LOG`-driven
/// filter (defaulting to `info`). Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
