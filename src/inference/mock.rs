//! Scripted backend that replays queued responses, for tests and offline demos.

use super::ChatBackend;
use crate::tools::ToolDefinition;
use crate::types::{ChatMessage, InferenceResponse, ToolCall};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One recorded `chat` invocation.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub messages: Vec<ChatMessage>,
    pub tool_names: Vec<String>,
}

pub struct ScriptedBackend {
    responses: Mutex<VecDeque<Result<InferenceResponse, String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    model: String,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            model: "scripted".to_string(),
        }
    }

    pub fn push(&self, response: InferenceResponse) {
        self.lock_responses().push_back(Ok(response));
    }

    pub fn push_text(&self, content: impl Into<String>) {
        self.push(InferenceResponse::text(content));
    }

    pub fn push_tool_call(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: serde_json::Value,
    ) {
        self.push(InferenceResponse::with_tool_calls(vec![ToolCall {
            id: id.into(),
            name: name.into(),
            arguments,
        }]));
    }

    /// Queue a failure for the next call.
    pub fn push_error(&self, message: impl Into<String>) {
        self.lock_responses().push_back(Err(message.into()));
    }

    pub fn remaining(&self) -> usize {
        self.lock_responses().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<InferenceResponse, String>>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
    ) -> Result<InferenceResponse> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedRequest {
                messages: messages.to_vec(),
                tool_names: tools.iter().map(|t| t.name.clone()).collect(),
            });

        let next = self.lock_responses().pop_front();
        match next {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(anyhow::anyhow!(message)),
            None => anyhow::bail!("ScriptedBackend: no more responses in queue"),
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}
