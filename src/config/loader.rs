// Configuration loading from TOML
//
// Every key is optional; missing keys fall back to the built-in defaults,
// which are the values the assistant has always run with.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::default_config_path;

/// Top-level assistant configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub llm: LlmConfig,
    pub search: SearchConfig,
    pub fetch: FetchConfig,
    pub server: ServerConfig,
}

/// Hosted LLM endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model identifier sent with every completion request
    pub model: String,
    /// OpenAI-compatible API root (`/chat/completions` is appended)
    pub base_url: String,
    pub temperature: f32,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "mistralai/Mistral-7B-Instruct-v0.2".to_string(),
            base_url: "https://api.together.xyz/v1".to_string(),
            temperature: 0.1,
            api_key_env: "TOGETHER_API_KEY".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Result URLs requested per search query
    pub num_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            num_results: crate::web::DEFAULT_NUM_RESULTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Characters of page text kept before prompting
    pub max_page_chars: usize,
    pub user_agent: String,
    /// Request timeout; `None` waits for the server indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_page_chars: crate::research::MAX_PAGE_CHARS,
            user_agent: concat!("research-assistant/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: Vec::new(),
        }
    }
}

impl AssistantConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| anyhow!("Failed to parse config: {}", e))
    }

    /// Load a config file. An explicitly given path must exist; the default
    /// path (~/.research-assistant/config.toml) is optional.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match explicit_path {
            Some(p) => {
                if !p.exists() {
                    return Err(anyhow!("Config file '{}' does not exist", p.display()));
                }
                p.to_path_buf()
            }
            None => match default_config_path() {
                Some(p) if p.exists() => p,
                _ => {
                    log::debug!("[config] No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = fs::read_to_string(&path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml_str(&contents)
            .map_err(|e| anyhow!("{} ('{}')", e, path.display()))?;

        log::info!("[config] Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Read the LLM API key from the configured environment variable
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.llm.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "Environment variable {} must be set to the LLM API key",
                    self.llm.api_key_env
                )
            })
    }
}
