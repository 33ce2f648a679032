pub mod schema;

pub use schema::{CookingConfig, Provider};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Config file name inside the home directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Default home directory (~/.cooking-agent).
pub fn default_home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().join(".cooking-agent"))
        .unwrap_or_else(|| PathBuf::from(".cooking-agent"))
}

/// Resolve a `--home` argument that may contain `~`.
pub fn resolve_home(home: Option<&str>) -> PathBuf {
    match home {
        Some(h) => PathBuf::from(shellexpand::tilde(h).into_owned()),
        None => default_home_dir(),
    }
}

/// Load config from the given path, or return defaults.
pub fn load_config(path: &Path) -> Result<CookingConfig> {
    if path.exists() {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: CookingConfig =
            toml::from_str(&contents).context("Failed to parse config (TOML)")?;
        Ok(config)
    } else {
        Ok(CookingConfig::default())
    }
}

/// Load config and apply environment overrides from the process environment.
pub fn load_with_env(path: &Path) -> Result<CookingConfig> {
    let mut config = load_config(path)?;
    config.apply_env(|name| std::env::var(name).ok());
    Ok(config)
}

/// Save config to the given path (TOML format).
pub fn save_config(config: &CookingConfig, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents).context("Failed to write config file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DispatchMode;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, CookingConfig::default());
    }

    #[test]
    fn save_then_load_preserves_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = CookingConfig {
            mode: DispatchMode::Router,
            max_tool_rounds: 2,
            model: "gpt-4o".into(),
            ..CookingConfig::default()
        };
        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "mode = \"router\"\nprovider = \"github\"\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.mode, DispatchMode::Router);
        assert_eq!(config.provider, Provider::Github);
        assert_eq!(config.history_window, 20);
    }

    #[test]
    fn github_provider_from_file_uses_models_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "provider = \"github\"\napi_key = \"ghp_x\"\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(
            config.chat_completions_url(),
            "https://models.github.ai/inference/chat/completions"
        );

        let proxied = CookingConfig {
            api_url: "http://localhost:8080/v1/".into(),
            ..config
        };
        assert_eq!(
            proxied.chat_completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "mode = [").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn azure_env_selects_azure() {
        let mut config = CookingConfig::default();
        config.apply_env(env(&[
            ("AZURE_OPENAI_API_KEY", "az-key"),
            ("AZURE_OPENAI_ENDPOINT", "https://example.openai.azure.com/"),
            ("AZURE_OPENAI_DEPLOYMENT", "chef"),
            ("GITHUB_TOKEN", "ghp_ignored"),
        ]));
        assert_eq!(config.provider, Provider::Azure);
        assert_eq!(config.api_key, "az-key");
        assert_eq!(config.effective_model(), "chef");
        assert_eq!(
            config.chat_completions_url(),
            "https://example.openai.azure.com/openai/deployments/chef/chat/completions?api-version=2024-08-01-preview"
        );
        config.validate().unwrap();
    }

    #[test]
    fn github_token_is_a_fallback() {
        let mut config = CookingConfig::default();
        config.apply_env(env(&[("GITHUB_TOKEN", "ghp_token"), ("COOKING_AGENT_MODEL", "gpt-4o")]));
        assert_eq!(config.provider, Provider::Github);
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(
            config.chat_completions_url(),
            "https://models.github.ai/inference/chat/completions"
        );
    }

    #[test]
    fn configured_key_is_not_overridden_by_fallbacks() {
        let mut config = CookingConfig {
            api_key: "sk-file".into(),
            ..CookingConfig::default()
        };
        config.apply_env(env(&[("GITHUB_TOKEN", "ghp_token"), ("OPENAI_API_KEY", "")]));
        assert_eq!(config.provider, Provider::OpenAi);
        assert_eq!(config.api_key, "sk-file");
    }

    #[test]
    fn validate_reports_missing_pieces() {
        let err = CookingConfig::default().validate().unwrap_err().to_string();
        assert!(err.contains("No API key configured"));

        let azure = CookingConfig {
            provider: Provider::Azure,
            api_key: "k".into(),
            ..CookingConfig::default()
        };
        assert!(azure.validate().unwrap_err().to_string().contains("AZURE_OPENAI_ENDPOINT"));
    }
}
