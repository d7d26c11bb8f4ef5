// Configuration: TOML file, CLI overrides and built-in defaults

pub mod loader;
pub mod merger;

pub use loader::{AssistantConfig, FetchConfig, LlmConfig, SearchConfig, ServerConfig};
pub use merger::{CliOverrides, ConfigMerger};
