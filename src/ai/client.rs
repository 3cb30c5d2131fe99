//! LLM (`OpenAI`) API client module
//!
//! Encapsulates all LLM API interactions for generating and refining
//! summaries.

use std::time::Duration;

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::ApiError;
use crate::prompt::{refinement_prompt, summary_prompt};

const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const SYSTEM_PROMPT: &str = "You are a news assistant that writes concise, \
    neutral summaries of news headlines. Output only the summary text.";

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Chat messages for the first (summarize) pass.
#[must_use]
pub fn summary_messages(headlines: &[String]) -> Vec<ChatCompletionMessage> {
    vec![
        system_message(),
        user_message(summary_prompt(headlines)),
    ]
}

/// Chat messages for the second (refinement) pass.
#[must_use]
pub fn refinement_messages(draft: &str) -> Vec<ChatCompletionMessage> {
    vec![system_message(), user_message(refinement_prompt(draft))]
}

fn system_message() -> ChatCompletionMessage {
    ChatCompletionMessage {
        role: MessageRole::system,
        content: Content::Text(SYSTEM_PROMPT.to_string()),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

fn user_message(text: String) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role: MessageRole::user,
        content: Content::Text(text),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

/// A text-generation capability: submit a prompt, get generated text back.
///
/// Request handlers depend on this trait rather than on [`LlmClient`]
/// directly, so tests can inject a stub that records calls and returns
/// canned output.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: Vec<ChatCompletionMessage>) -> Result<String, ApiError>;
}

/// LLM API client for generating summaries
pub struct LlmClient {
    api_key: String,
    org_id: Option<String>,
    model_name: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, org_id: Option<String>, model_name: String) -> Self {
        Self {
            api_key,
            org_id,
            model_name,
        }
    }

    fn build_headers(&self) -> Result<reqwest::header::HeaderMap, ApiError> {
        let mut headers = reqwest::header::HeaderMap::new();

        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| ApiError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| ApiError::HttpError(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                ApiError::HttpError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    /// Submit a chat prompt to `OpenAI` and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be
    /// parsed into the expected shape. Errors are not retried.
    async fn generate(&self, prompt: Vec<ChatCompletionMessage>) -> Result<String, ApiError> {
        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
            .sum::<usize>();

        info!(
            model = %self.model_name,
            messages = prompt.len(),
            estimated_input_tokens,
            "sending chat completion request"
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": build_chat_input(&prompt),
        });

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::HttpError(format!("Failed to build OpenAI HTTP client: {e}")))?;

        let response = client
            .post(OPENAI_CHAT_COMPLETIONS_URL)
            .headers(self.build_headers()?)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ApiError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(ApiError::OpenAIError(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| ApiError::OpenAIError(format!("Failed to parse OpenAI response: {e}")))?;

        extract_message_text(&response_json)
            .ok_or_else(|| ApiError::OpenAIError("No text in response".to_string()))
    }
}

/// Build the chat-completions `messages` payload from a chat-style prompt.
pub(crate) fn build_chat_input(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::assistant => "assistant",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
            };
            let text = match &m.content {
                Content::Text(t) => t.clone(),
                Content::ImageUrl(_) => String::new(),
            };
            json!({
                "role": role_str,
                "content": text
            })
        })
        .collect()
}

/// Pull the generated text out of a chat-completions response body.
pub(crate) fn extract_message_text(response_json: &Value) -> Option<String> {
    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(std::string::ToString::to_string)
}
