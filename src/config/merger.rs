// Configuration merging with priority

use crate::config::loader::AssistantConfig;

/// Overrides supplied on the command line.
/// Every field is optional so only flags the user actually passed win.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub model: Option<String>,
    pub num_results: Option<usize>,
    pub cors_origins: Option<Vec<String>>,
}

/// Configuration merger
/// Priority order: CLI -> config file -> defaults
pub struct ConfigMerger {
    file: Option<AssistantConfig>,
    cli: Option<CliOverrides>,
}

impl ConfigMerger {
    pub fn new() -> Self {
        Self {
            file: None,
            cli: None,
        }
    }

    /// Set the config loaded from disk
    pub fn with_file(mut self, config: Option<AssistantConfig>) -> Self {
        self.file = config;
        self
    }

    /// Set CLI overrides
    pub fn with_cli(mut self, overrides: Option<CliOverrides>) -> Self {
        self.cli = overrides;
        self
    }

    /// Merge all layers
    pub fn merge(&self) -> AssistantConfig {
        let mut result = self.file.clone().unwrap_or_default();

        if let Some(ref cli) = self.cli {
            if let Some(ref bind) = cli.bind {
                result.server.bind = bind.clone();
            }
            if let Some(port) = cli.port {
                result.server.port = port;
            }
            if let Some(ref model) = cli.model {
                result.llm.model = model.clone();
            }
            if let Some(n) = cli.num_results {
                result.search.num_results = n;
            }
            if let Some(ref origins) = cli.cors_origins {
                result.server.cors_origins = origins.clone();
            }
        }

        result
    }
}
