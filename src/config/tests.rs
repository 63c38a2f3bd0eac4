//! Configuration tests
//!
//! The TOML template written on first run must parse back into the same
//! settings, and precedence must hold: env > file > defaults.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the serialized default config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let config = Config::resolve(parsed.unwrap(), no_env);
    let defaults = Config::default();
    assert_eq!(config.backend_url, defaults.backend_url);
    assert_eq!(config.request_timeout, None);
    assert_eq!(config.toast_duration, defaults.toast_duration);
    assert_eq!(config.demo_latency, defaults.demo_latency);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.backend_url = "https://texts.example.com/v1".to_string();
    config.request_timeout = Some(Duration::from_secs(15));
    config.demo_mode = true;
    config.theme = "light".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let back = Config::resolve(parsed, no_env);

    assert_eq!(back.backend_url, "https://texts.example.com/v1");
    assert_eq!(back.request_timeout, Some(Duration::from_secs(15)));
    assert!(back.demo_mode);
    assert_eq!(back.theme, "light");
    assert!(back.logging.file_enabled);
    assert_eq!(back.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_config_roundtrip_escapes_strings() {
    let mut config = Config::default();
    config.backend_url = r#"http://host/api?q="a\b""#.to_string();
    config.theme = "dark\"".to_string();
    config.logging.file_dir = PathBuf::from(r"C:\logs\textops");
    config.logging.file_prefix = "text\"ops".to_string();

    let toml_str = config.to_toml();
    let parsed: FileConfig = toml::from_str(&toml_str)
        .unwrap_or_else(|e| panic!("invalid TOML:\n{}\nError: {}", toml_str, e));
    let back = Config::resolve(parsed, no_env);

    assert_eq!(back.backend_url, config.backend_url);
    assert_eq!(back.theme, config.theme);
    assert_eq!(back.logging.file_dir, config.logging.file_dir);
    assert_eq!(back.logging.file_prefix, config.logging.file_prefix);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
backend_url = "http://from-file/api"
demo_mode = false
theme = "light"
"#,
    )
    .unwrap();

    let config = Config::resolve(
        file,
        env_from(&[
            ("TEXTOPS_BACKEND_URL", "http://from-env/api"),
            ("TEXTOPS_DEMO", "TRUE"),
            ("TEXTOPS_TIMEOUT_SECS", "7"),
        ]),
    );

    assert_eq!(config.backend_url, "http://from-env/api");
    assert!(config.demo_mode);
    assert_eq!(config.request_timeout, Some(Duration::from_secs(7)));
    // Not overridden by env
    assert_eq!(config.theme, "light");
}

#[test]
fn test_empty_file_uses_defaults() {
    let file: FileConfig = toml::from_str("").unwrap();
    let config = Config::resolve(file, no_env);

    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    assert!(!config.demo_mode);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_prefix, "textops");
}

#[test]
fn test_zero_timeout_and_toast_mean_default() {
    let file: FileConfig = toml::from_str("request_timeout_secs = 0\ntoast_secs = 0").unwrap();
    let config = Config::resolve(file, no_env);

    assert_eq!(config.request_timeout, None);
    assert_eq!(config.toast_duration, Duration::from_secs(DEFAULT_TOAST_SECS));
}

#[test]
fn test_unknown_keys_are_rejected() {
    let parsed: Result<FileConfig, _> = toml::from_str("backend = \"typo\"");
    assert!(parsed.is_err());
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
}

// ─────────────────────────────────────────────────────────────────────────────
// File loading tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_file_is_not_an_error() {
    let path = std::env::temp_dir().join("textops-config-test-missing.toml");
    let _ = std::fs::remove_file(&path);

    assert!(Config::load_file_config(Some(&path)).is_ok());
}

#[test]
fn test_broken_file_is_an_error() {
    let path = std::env::temp_dir().join(format!(
        "textops-config-test-broken-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "backend_url = [unclosed").unwrap();

    let result = Config::load_file_config(Some(&path));
    let _ = std::fs::remove_file(&path);

    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_write_defaults_creates_parseable_file() {
    let dir = std::env::temp_dir().join(format!("textops-config-test-{}", std::process::id()));
    let path = dir.join("nested").join("config.toml");

    Config::write_defaults(&path).unwrap();
    let loaded = Config::load_file_config(Some(&path));
    let _ = std::fs::remove_dir_all(&dir);

    assert!(loaded.is_ok());
}
