//! Configuration loading and discovery for `pbook.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::PbookConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name looked up in every directory
pub const CONFIG_FILE: &str = "pbook.toml";

/// Directory under the XDG config home
const XDG_APP_DIR: &str = "patternbook";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pbook.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the per-demo budget
    pub budget_ms: Option<u64>,
    /// Force parallel execution
    pub parallel: Option<bool>,
    /// Override the golden fixture directory
    pub golden_dir: Option<PathBuf>,
}

/// Find pbook.toml, walking up from the current directory first and then
/// falling back to `$XDG_CONFIG_HOME/patternbook/pbook.toml`
/// (`~/.config/patternbook/pbook.toml`).
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }
    find_xdg_config()
}

/// Find pbook.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join(XDG_APP_DIR).join(CONFIG_FILE);
    config_path.is_file().then_some(config_path)
}

/// Find pbook.toml by walking up from `start`.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.is_file() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the discovered file is used,
/// and if none is found the defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<PbookConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            tracing::debug!(path = %p.display(), "loading config");
            load_config_file(&p)
        }
        None => Ok(default_config()),
    }
}

fn load_config_file(path: &Path) -> Result<PbookConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PbookConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(config)
}

/// Configuration used when no pbook.toml is found.
pub fn default_config() -> PbookConfig {
    PbookConfig::default()
}

/// Apply CLI overrides. CLI values win over file values.
pub fn merge_cli_overrides(config: &mut PbookConfig, overrides: &CliOverrides) {
    if let Some(budget_ms) = overrides.budget_ms {
        config.run.budget_ms = Some(budget_ms);
    }
    if let Some(parallel) = overrides.parallel {
        config.run.parallel = parallel;
    }
    if let Some(ref golden_dir) = overrides.golden_dir {
        config.verify.golden_dir = golden_dir.clone();
    }
}

/// Resolve `path` against the directory holding the config file. Absolute
/// paths are returned unchanged.
pub fn resolve_path(config_path: Option<&Path>, path: &Path) -> PathBuf {
    match config_path.and_then(Path::parent) {
        Some(root) if !path.is_absolute() => root.join(path),
        _ => path.to_path_buf(),
    }
}
