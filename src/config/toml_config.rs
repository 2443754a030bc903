use crate::config::{CopySettings, InteractionSettings};
use crate::utils::error::{DemoError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file with an `[interaction]` and a `[copy]` table.
/// Every key is optional; missing keys leave the current value alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    pub interaction: Option<InteractionOverrides>,
    pub copy: Option<CopyOverrides>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractionOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub read_buffer: Option<usize>,
    pub tasks: Option<usize>,
    pub delay_ms: Option<u64>,
    pub source: Option<String>,
    pub offline: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopyOverrides {
    pub initial: Option<i64>,
    pub items: Option<Vec<i64>>,
    pub append: Option<i64>,
}

impl SettingsFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unknown
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_interaction(&self, settings: &mut InteractionSettings) {
        if let Some(overrides) = &self.interaction {
            overrides.apply(settings);
        }
    }

    pub fn apply_copy(&self, settings: &mut CopySettings) {
        if let Some(overrides) = &self.copy {
            overrides.apply(settings);
        }
    }
}

impl InteractionOverrides {
    pub fn apply(&self, settings: &mut InteractionSettings) {
        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(read_buffer) = self.read_buffer {
            settings.read_buffer = read_buffer;
        }
        if let Some(tasks) = self.tasks {
            settings.tasks = tasks;
        }
        if let Some(delay_ms) = self.delay_ms {
            settings.delay_ms = delay_ms;
        }
        if let Some(source) = &self.source {
            settings.source = Some(source.clone());
        }
        if let Some(offline) = self.offline {
            settings.offline = offline;
        }
    }
}

impl CopyOverrides {
    pub fn apply(&self, settings: &mut CopySettings) {
        if let Some(initial) = self.initial {
            settings.initial = initial;
        }
        if let Some(items) = &self.items {
            settings.items = items.clone();
        }
        if let Some(append) = self.append {
            settings.append = append;
        }
    }
}
