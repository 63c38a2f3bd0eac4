//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// TOML string literal with quotes and backslashes escaped
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let timeout_line = match self.request_timeout {
            Some(timeout) => format!("request_timeout_secs = {}", timeout.as_secs()),
            None => "# request_timeout_secs = 30".to_string(),
        };

        format!(
            r#"# textops configuration

# Base URL of the text storage backend
# Texts are posted to {{backend_url}}/texts and fetched from {{backend_url}}/texts/{{id}}
backend_url = {backend_url}

# Per-request timeout in seconds (unset or 0 = wait for the backend)
{timeout_line}

# Use an in-memory backend instead of HTTP (TEXTOPS_DEMO=1 also works)
demo_mode = {demo_mode}
demo_latency_ms = {demo_latency_ms}

# How long notifications stay on screen, in seconds
toast_secs = {toast_secs}

# Theme: dark, light, terminal
theme = {theme}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            backend_url = quoted(&self.backend_url),
            timeout_line = timeout_line,
            demo_mode = self.demo_mode,
            demo_latency_ms = self.demo_latency.as_millis(),
            toast_secs = self.toast_duration.as_secs(),
            theme = quoted(&self.theme),
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.display().to_string()),
            log_file_rotation = quoted(self.logging.file_rotation.as_str()),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}
