//! Chat-completion backends.

pub mod client;
pub mod mock;

pub use client::{Auth, InferenceClient};
pub use mock::ScriptedBackend;

use crate::tools::ToolDefinition;
use crate::types::{ChatMessage, InferenceResponse};
use anyhow::Result;
use async_trait::async_trait;

/// Anything that can answer a chat turn, optionally requesting tool calls.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Run one completion. An empty `tools` slice disables tool calling.
    async fn chat(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
    ) -> Result<InferenceResponse>;

    /// Model identifier used for requests.
    fn model(&self) -> &str;
}
