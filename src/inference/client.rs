//! Model inference over an OpenAI-compatible chat-completions API.
//!
//! Supports tool-use (function calling). Works against OpenAI, Azure OpenAI
//! deployments and GitHub Models; they differ only in URL and auth header.

use super::ChatBackend;
use crate::config::{CookingConfig, Provider};
use crate::tools::ToolDefinition;
use crate::types::*;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// How the API key is presented.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// `Authorization: Bearer <key>` (OpenAI, GitHub Models).
    Bearer(String),
    /// `api-key: <key>` (Azure OpenAI).
    ApiKeyHeader(String),
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer(_) => write!(f, "Bearer(***)"),
            Self::ApiKeyHeader(_) => write!(f, "ApiKeyHeader(***)"),
        }
    }
}

/// Inference client for a single chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    url: String,
    auth: Auth,
    model: String,
    max_tokens: u32,
    temperature: f64,
    http: reqwest::Client,
}

// -- OpenAI-compatible request/response types --------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<MessagePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<ToolPayload<'a>>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct MessagePayload {
    role: String,
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<ToolCallPayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct ToolPayload<'a> {
    r#type: &'a str,
    function: FunctionPayload<'a>,
}

#[derive(Debug, Serialize)]
struct FunctionPayload<'a> {
    name: &'a str,
    description: &'a str,
    parameters: &'a serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ToolCallPayload {
    id: String,
    r#type: String,
    function: FunctionCallPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FunctionCallPayload {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<UsagePayload>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<ToolCallPayload>,
}

#[derive(Debug, Deserialize)]
struct UsagePayload {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

impl MessagePayload {
    fn from_message(m: &ChatMessage) -> Self {
        let tool_calls = if m.tool_calls.is_empty() {
            None
        } else {
            Some(
                m.tool_calls
                    .iter()
                    .map(|tc| ToolCallPayload {
                        id: tc.id.clone(),
                        r#type: "function".into(),
                        function: FunctionCallPayload {
                            name: tc.name.clone(),
                            arguments: tc.arguments.to_string(),
                        },
                    })
                    .collect(),
            )
        };

        // Assistant turns that only call tools carry no content.
        let content = if tool_calls.is_some() && m.content.is_empty() {
            None
        } else {
            Some(m.content.clone())
        };

        Self {
            role: m.role.to_string(),
            content,
            tool_calls,
            tool_call_id: m.tool_call_id.clone(),
        }
    }
}

impl InferenceClient {
    /// Create a client for an explicit endpoint.
    pub fn new(url: &str, auth: Auth, model: &str) -> Self {
        Self {
            url: url.to_string(),
            auth,
            model: model.to_string(),
            max_tokens: 1024,
            temperature: 0.7,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client for the provider selected in `config`.
    pub fn from_config(config: &CookingConfig) -> Result<Self> {
        let auth = match config.provider {
            Provider::Azure => Auth::ApiKeyHeader(config.api_key.clone()),
            Provider::OpenAi | Provider::Github => Auth::Bearer(config.api_key.clone()),
        };
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            url: config.chat_completions_url(),
            auth,
            model: config.effective_model().to_string(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run inference with tool support. Returns a response with optional tool calls.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
    ) -> Result<InferenceResponse> {
        let msg_payloads: Vec<MessagePayload> =
            messages.iter().map(MessagePayload::from_message).collect();

        let tool_payloads: Option<Vec<ToolPayload>> = if tools.is_empty() {
            None
        } else {
            Some(
                tools
                    .iter()
                    .map(|t| ToolPayload {
                        r#type: "function",
                        function: FunctionPayload {
                            name: &t.name,
                            description: &t.description,
                            parameters: &t.parameters,
                        },
                    })
                    .collect(),
            )
        };

        let request = ChatRequest {
            model: &self.model,
            messages: msg_payloads,
            tools: tool_payloads,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!(
            "Inference request to model {} ({} messages, {} tools)",
            self.model,
            messages.len(),
            tools.len()
        );

        let builder = self.http.post(&self.url).json(&request);
        let builder = match &self.auth {
            Auth::Bearer(key) => builder.bearer_auth(key),
            Auth::ApiKeyHeader(key) => builder.header("api-key", key),
        };

        let resp = builder.send().await.context("Inference request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("Inference failed ({}): {}", status, body);
        }

        let body: ChatResponse = resp
            .json()
            .await
            .context("Failed to parse inference response")?;

        let message = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .unwrap_or_default();

        let tool_calls: Vec<ToolCall> = message
            .tool_calls
            .into_iter()
            .map(|tc| {
                let args: serde_json::Value =
                    serde_json::from_str(&tc.function.arguments).unwrap_or_default();
                ToolCall {
                    id: tc.id,
                    name: tc.function.name,
                    arguments: args,
                }
            })
            .collect();

        let usage = body
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(InferenceResponse {
            content: message.content,
            tool_calls,
            usage,
        })
    }

    /// One-line connectivity probe against the configured endpoint.
    pub async fn ping(&self) -> Result<String> {
        let messages = [
            ChatMessage::system("You are a helpful assistant."),
            ChatMessage::user("Say 'Hello World' if you can hear me."),
        ];
        let response = self.complete(&messages, &[]).await?;
        response
            .content
            .filter(|c| !c.trim().is_empty())
            .context("Model returned an empty reply")
    }
}

#[async_trait]
impl ChatBackend for InferenceClient {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
    ) -> Result<InferenceResponse> {
        self.complete(messages, tools).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}
