use std::env;

/// Server bind address used when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Origin allowed to make cross-origin requests when `ALLOWED_ORIGIN` is not set.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub allowed_origin: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_org_id: env::var("OPENAI_ORG_ID").ok(),
            openai_model: env::var("OPENAI_MODEL").ok(),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }

    /// The model name to request from OpenAI.
    #[must_use]
    pub fn model(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}
