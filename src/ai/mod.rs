//! All AI/LLM functionality

pub mod client;

// Re-export main types for convenience
pub use client::{LlmClient, TextGenerator, estimate_tokens, refinement_messages, summary_messages};
