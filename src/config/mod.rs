#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};

pub const MAX_DELAY_MS: u64 = 60_000;

/// Settings for the interaction-model demo. Defaults reproduce the plain,
/// argument-free run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    pub host: String,
    pub port: u16,
    pub read_buffer: usize,
    pub tasks: usize,
    pub delay_ms: u64,
    /// File for the blocking read; the demo's own source when unset.
    pub source: Option<String>,
    /// Probe a scripted peer instead of the network.
    pub offline: bool,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            host: "example.com".to_string(),
            port: 80,
            read_buffer: 1024,
            tasks: 2,
            delay_ms: 1000,
            source: None,
            offline: false,
        }
    }
}

impl Validate for InteractionSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_positive_number("port", self.port as usize, 1)?;
        validate_positive_number("read_buffer", self.read_buffer, 1)?;
        validate_positive_number("tasks", self.tasks, 1)?;
        validate_range("delay_ms", self.delay_ms, 0, MAX_DELAY_MS)?;
        if let Some(source) = &self.source {
            validate_path("source", source)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopySettings {
    /// Starting value of the immutable field.
    pub initial: i64,
    /// Starting contents of the nested sequence.
    pub items: Vec<i64>,
    /// Value appended through the original after copying.
    pub append: i64,
}

impl Default for CopySettings {
    fn default() -> Self {
        Self {
            initial: 1,
            items: vec![1, 2],
            append: 3,
        }
    }
}

impl Validate for CopySettings {
    fn validate(&self) -> Result<()> {
        // The demo rebinds the field to initial + 1 and initial + 2.
        validate_range("initial", self.initial, i64::MIN, i64::MAX - 2)
    }
}
