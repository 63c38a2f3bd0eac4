//! Configuration for the text operations client
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (applied by `main`)
//! 2. Environment variables
//! 3. Config file (~/.config/textops/config.toml)
//! 4. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080/api";
const DEFAULT_TOAST_SECS: u64 = 4;
const DEFAULT_DEMO_LATENCY_MS: u64 = 400;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the text storage backend
    pub backend_url: String,

    /// Per-request transport timeout (None = wait for the backend)
    pub request_timeout: Option<Duration>,

    /// Demo mode: use an in-memory backend instead of HTTP
    pub demo_mode: bool,

    /// Artificial delay for demo backend calls
    pub demo_latency: Duration,

    /// How long success/warning/error toasts stay on screen
    pub toast_duration: Duration,

    /// Theme name: "dark", "light", "terminal"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: None,
            demo_mode: false,
            demo_latency: Duration::from_millis(DEFAULT_DEMO_LATENCY_MS),
            toast_duration: Duration::from_secs(DEFAULT_TOAST_SECS),
            theme: "dark".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub backend_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub demo_mode: Option<bool>,
    pub demo_latency_ms: Option<u64>,
    pub toast_secs: Option<u64>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl Config {
    /// Get the config file path: ~/.config/textops/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("textops").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Config is optional, failures here are not worth surfacing
        let _ = Self::write_defaults(&path);
    }

    /// Write the default template to `path`, replacing anything there
    pub fn write_defaults(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Read and parse the config file if it exists
    ///
    /// A file that exists but cannot be read or parsed is an error: a broken
    /// config should fail fast rather than silently fall back to defaults.
    pub(crate) fn load_file_config(path: Option<&Path>) -> Result<FileConfig> {
        let Some(path) = path else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read config file {}", path.display()))
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn load() -> Result<Self> {
        let file = Self::load_file_config(Self::config_path().as_deref())?;
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file config with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Backend URL: env > file > default
        let backend_url = env("TEXTOPS_BACKEND_URL")
            .or(file.backend_url)
            .unwrap_or(defaults.backend_url);

        // Timeout: env > file > none (0 also means none)
        let request_timeout = env("TEXTOPS_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .or(file.request_timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        // Demo mode: env > file > default
        let demo_mode = env("TEXTOPS_DEMO")
            .map(|v| parse_flag(&v))
            .or(file.demo_mode)
            .unwrap_or(defaults.demo_mode);

        let demo_latency = file
            .demo_latency_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.demo_latency);

        let toast_duration = file
            .toast_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.toast_duration);

        // Theme: env > file > default
        let theme = env("TEXTOPS_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            backend_url,
            request_timeout,
            demo_mode,
            demo_latency,
            toast_duration,
            theme,
            logging,
        }
    }
}
