//! Conversation threads and the per-turn tool-calling exchange.
//!
//! A user turn in `tools` mode:
//! 1. Appends the user message to the thread
//! 2. Calls inference with the cooking tool definitions
//! 3. Executes any requested tool calls and feeds the results back
//! 4. Repeats until the model answers in text (bounded by `max_tool_rounds`)
//!
//! In `router` mode the keyword router answers first and the model only
//! sees turns the router could not place.

use crate::agent::{context, system_prompt};
use crate::config::CookingConfig;
use crate::inference::ChatBackend;
use crate::router;
use crate::tools::{ToolDefinition, ToolRegistry};
use crate::types::*;
use anyhow::{bail, Result};
use tracing::{info, warn};

/// A conversation thread: its ID, message history and accumulated usage.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: String,
    history: Vec<ChatMessage>,
    usage: TokenUsage,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            history: Vec::new(),
            usage: TokenUsage::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn usage(&self) -> &TokenUsage {
        &self.usage
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// The cooking assistant: a chat backend plus the cooking tools.
pub struct CookingAgent<B> {
    backend: B,
    registry: ToolRegistry,
    system_prompt: String,
    mode: DispatchMode,
    max_tool_rounds: u32,
    history_window: usize,
}

impl<B: ChatBackend> CookingAgent<B> {
    pub fn new(backend: B, config: &CookingConfig) -> Self {
        Self {
            backend,
            registry: ToolRegistry::cooking(),
            system_prompt: system_prompt::build_system_prompt(config),
            mode: config.mode,
            max_tool_rounds: config.max_tool_rounds.max(1),
            history_window: config.history_window,
        }
    }

    /// Override the dispatch mode from the config.
    pub fn with_mode(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Start a fresh conversation thread.
    pub fn new_conversation(&self) -> Conversation {
        let conversation = Conversation::new();
        info!(
            "New conversation {} (mode: {}, model: {})",
            conversation.id,
            self.mode,
            self.backend.model()
        );
        conversation
    }

    /// Answer one user message, updating the conversation thread.
    ///
    /// On error the thread is rolled back to its state before the turn.
    pub async fn respond(&self, conversation: &mut Conversation, input: &str) -> Result<String> {
        let checkpoint = conversation.history.len();
        let result = match self.mode {
            DispatchMode::Tools => self.respond_with_tools(conversation, input).await,
            DispatchMode::Router => self.respond_routed(conversation, input).await,
        };
        if result.is_err() {
            conversation.history.truncate(checkpoint);
        }
        result
    }

    async fn respond_with_tools(
        &self,
        conversation: &mut Conversation,
        input: &str,
    ) -> Result<String> {
        conversation.history.push(ChatMessage::user(input));
        let tool_defs = self.registry.definitions();
        let mut rounds = 0;

        loop {
            // Once the round budget is spent the model must answer in text.
            let offered: &[ToolDefinition] = if rounds < self.max_tool_rounds {
                &tool_defs
            } else {
                &[]
            };
            let response = self.infer(conversation, offered).await?;

            if response.tool_calls.is_empty() {
                return Ok(self.finish(conversation, response.content));
            }
            if offered.is_empty() {
                bail!(
                    "Model kept requesting tools after {} rounds",
                    self.max_tool_rounds
                );
            }

            rounds += 1;
            conversation.history.push(ChatMessage::assistant_tool_calls(
                response.content,
                response.tool_calls.clone(),
            ));

            for tc in &response.tool_calls {
                info!(
                    "[{}] Tool: {}({})",
                    conversation.id, tc.name, tc.arguments
                );

                let mut result = self.registry.execute(&tc.name, &tc.arguments).await;
                result.tool_call_id = tc.id.clone();

                if result.success {
                    info!("[{}] Tool result: {} chars", conversation.id, result.output.len());
                } else {
                    warn!("[{}] Tool error: {}", conversation.id, result.output);
                }

                conversation
                    .history
                    .push(ChatMessage::tool(result.tool_call_id, result.output));
            }
        }
    }

    async fn respond_routed(&self, conversation: &mut Conversation, input: &str) -> Result<String> {
        conversation.history.push(ChatMessage::user(input));

        if let Some(intent) = router::route(input) {
            info!(
                "[{}] Routed to {} without inference",
                conversation.id,
                intent.tool_name()
            );
            return Ok(self.finish(conversation, Some(intent.dispatch())));
        }

        let response = self.infer(conversation, &[]).await?;
        Ok(self.finish(conversation, response.content))
    }

    async fn infer(
        &self,
        conversation: &mut Conversation,
        tools: &[ToolDefinition],
    ) -> Result<InferenceResponse> {
        let messages = context::build_messages(
            &self.system_prompt,
            &conversation.history,
            self.history_window,
        );
        let response = self.backend.chat(&messages, tools).await?;
        conversation.usage.add(&response.usage);
        Ok(response)
    }

    fn finish(&self, conversation: &mut Conversation, content: Option<String>) -> String {
        let reply = content.unwrap_or_default();
        if reply.is_empty() {
            warn!("[{}] Empty reply from model", conversation.id);
        }
        conversation.history.push(ChatMessage::assistant(reply.clone()));
        reply
    }
}
