//! Configuration schema types for `pbook.toml`

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

/// `[run]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Per-demo time budget in milliseconds; a slower demo is reported as
    /// an overrun
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_ms: Option<u64>,
    /// Run demos on the rayon pool
    #[serde(default)]
    pub parallel: bool,
}

impl RunConfig {
    pub fn budget(&self) -> Option<Duration> {
        self.budget_ms.map(Duration::from_millis)
    }
}

/// `[verify]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Directory holding `<name>.txt` golden fixtures
    #[serde(default = "default_golden_dir")]
    pub golden_dir: PathBuf,
}

fn default_golden_dir() -> PathBuf {
    PathBuf::from("tests/golden")
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self { golden_dir: default_golden_dir() }
    }
}

/// `[catalog]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Demo names left out of the catalog
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Complete pbook.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PbookConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub verify: VerifyConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Dotted path to the invalid field (e.g. "run.budget_ms")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pbook.toml: '{}' {}", self.field, self.message)
    }
}

impl PbookConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.run.budget_ms == Some(0) {
            errors.push(ConfigValidationError {
                field: "run.budget_ms".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.verify.golden_dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "verify.golden_dir".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for name in &self.catalog.exclude {
            if !seen.insert(name.as_str()) {
                errors.push(ConfigValidationError {
                    field: "catalog.exclude".to_string(),
                    message: format!("lists '{}' more than once", name),
                });
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
