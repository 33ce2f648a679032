//! Configuration schema for config.toml.

use crate::types::DispatchMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default Azure OpenAI API version.
pub const DEFAULT_AZURE_API_VERSION: &str = "2024-08-01-preview";

/// OpenAI API base URL.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";

/// GitHub Models inference endpoint.
pub const GITHUB_MODELS_URL: &str = "https://models.github.ai/inference";

/// Hosted chat-completion service flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// OpenAI or any OpenAI-compatible endpoint (bearer auth).
    #[serde(rename = "openai")]
    OpenAi,
    /// Azure OpenAI deployment (`api-key` header, versioned URL).
    Azure,
    /// GitHub Models (bearer auth with a GitHub token).
    Github,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenAi => write!(f, "openai"),
            Self::Azure => write!(f, "azure"),
            Self::Github => write!(f, "github"),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookingConfig {
    /// Assistant display name.
    pub name: String,

    /// Chat-completion provider.
    pub provider: Provider,

    /// Base URL for `openai` and `github` providers.
    pub api_url: String,

    /// API key or token for the provider.
    pub api_key: String,

    /// Azure OpenAI resource endpoint.
    pub azure_endpoint: String,

    /// Azure OpenAI deployment name.
    pub azure_deployment: String,

    /// Azure OpenAI API version.
    pub azure_api_version: String,

    /// Model identifier (ignored by Azure, which routes by deployment).
    pub model: String,

    /// Maximum tokens per completion.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f64,

    /// How user turns reach the cooking tools.
    pub mode: DispatchMode,

    /// Maximum rounds of tool execution per user turn.
    pub max_tool_rounds: u32,

    /// Number of prior messages replayed to the model each turn.
    pub history_window: usize,

    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Log level (debug, info, warn, error).
    pub log_level: String,
}

impl Default for CookingConfig {
    fn default() -> Self {
        Self {
            name: "CookingAssistant".into(),
            provider: Provider::OpenAi,
            api_url: DEFAULT_OPENAI_URL.into(),
            api_key: String::new(),
            azure_endpoint: String::new(),
            azure_deployment: String::new(),
            azure_api_version: DEFAULT_AZURE_API_VERSION.into(),
            model: "gpt-4o-mini".into(),
            max_tokens: 1024,
            temperature: 0.7,
            mode: DispatchMode::Tools,
            max_tool_rounds: 4,
            history_window: 20,
            request_timeout_secs: 60,
            log_level: "warn".into(),
        }
    }
}

impl CookingConfig {
    /// Apply environment overrides. `lookup` is usually `std::env::var`.
    ///
    /// Azure variables switch the provider to Azure. `GITHUB_TOKEN` selects
    /// GitHub Models only when no other key is configured.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = var("AZURE_OPENAI_API_KEY") {
            self.provider = Provider::Azure;
            self.api_key = key;
        }
        if let Some(endpoint) = var("AZURE_OPENAI_ENDPOINT") {
            self.azure_endpoint = endpoint;
        }
        if let Some(deployment) = var("AZURE_OPENAI_DEPLOYMENT") {
            self.azure_deployment = deployment;
        }

        if self.api_key.is_empty() {
            if let Some(key) = var("OPENAI_API_KEY") {
                self.provider = Provider::OpenAi;
                self.api_key = key;
            } else if let Some(token) = var("GITHUB_TOKEN") {
                self.provider = Provider::Github;
                self.api_key = token;
            }
        }

        if let Some(model) = var("COOKING_AGENT_MODEL") {
            self.model = model;
        }
    }

    /// Check that the selected provider has what it needs to connect.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!(
                "No API key configured for provider '{}'.\n\n\
                 Set one of the following, or add `api_key` to config.toml:\n  \
                 AZURE_OPENAI_API_KEY (with AZURE_OPENAI_ENDPOINT and AZURE_OPENAI_DEPLOYMENT)\n  \
                 OPENAI_API_KEY\n  \
                 GITHUB_TOKEN (needs the models:read scope)",
                self.provider
            );
        }
        if self.provider == Provider::Azure {
            if self.azure_endpoint.is_empty() {
                anyhow::bail!("Azure provider requires AZURE_OPENAI_ENDPOINT or `azure_endpoint`");
            }
            if self.azure_deployment.is_empty() {
                anyhow::bail!("Azure provider requires AZURE_OPENAI_DEPLOYMENT or `azure_deployment`");
            }
        }
        if self.max_tool_rounds == 0 {
            anyhow::bail!("max_tool_rounds must be at least 1");
        }
        Ok(())
    }

    /// Model name reported to the user and sent in requests.
    pub fn effective_model(&self) -> &str {
        match self.provider {
            Provider::Azure if !self.azure_deployment.is_empty() => &self.azure_deployment,
            _ => &self.model,
        }
    }

    /// Chat-completions URL for the selected provider.
    pub fn chat_completions_url(&self) -> String {
        match self.provider {
            Provider::Azure => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                self.azure_endpoint.trim_end_matches('/'),
                self.azure_deployment,
                self.azure_api_version,
            ),
            Provider::OpenAi | Provider::Github => {
                format!("{}/chat/completions", self.base_url().trim_end_matches('/'))
            }
        }
    }

    /// Base URL for OpenAI-style providers. GitHub Models replaces the
    /// OpenAI default unless `api_url` was set explicitly.
    fn base_url(&self) -> &str {
        match self.provider {
            Provider::Github if self.api_url == DEFAULT_OPENAI_URL => GITHUB_MODELS_URL,
            _ => &self.api_url,
        }
    }
}
