use std::sync::Arc;

use anyhow::Result;

use newsbrief::ai::LlmClient;
use newsbrief::api::ApiServer;
use newsbrief::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    newsbrief::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("missing configuration: {e}"))?;

    let client = Arc::new(LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_org_id.clone(),
        config.model().to_string(),
    ));

    ApiServer::new(config, client).start().await
}
