//! # Configuration Loader
//!
//! Builds [`AppConfig`] from three layers, later ones winning:
//!
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. the process environment (`NOTEHUB_TOKEN`, `NOTEHUB_API_URL`)
//!
//! Pure data loading only; the values are not validated here.

use anyhow::Context;
use nh_core::config::AppConfig;
use std::path::Path;

pub const TOKEN_ENV: &str = "NOTEHUB_TOKEN";
pub const API_URL_ENV: &str = "NOTEHUB_API_URL";

/// Load configuration from the optional file and the process environment.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML for
/// [`AppConfig`]. A missing path argument is not an error.
pub fn load_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let config = match config_path {
        Some(path) => load_config_file(path)?,
        None => AppConfig::default(),
    };
    Ok(apply_env(config, |key| std::env::var(key).ok()))
}

/// Load configuration from a TOML file. Missing keys keep their defaults.
pub fn load_config_file(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: AppConfig = toml::from_str(&content).context("Failed to parse config as TOML")?;
    let token = config.token.clone();
    Ok(config.with_token(token))
}

fn apply_env(mut config: AppConfig, lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
    if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
        config.api_base_url = url;
    }
    match lookup(TOKEN_ENV) {
        Some(token) => config.with_token(Some(token)),
        None => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn write_toml(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_file_overlays_defaults() {
        let file = write_toml(
            r#"
            per_page = 6
            debounce_ms = 250
            token = "from-file"
        "#,
        );

        let config = load_config_file(file.path()).unwrap();

        assert_eq!(config.per_page, 6);
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.token.as_deref(), Some("from-file"));
        assert_eq!(config.api_base_url, AppConfig::default().api_base_url);
    }

    #[test]
    fn test_load_config_file_treats_empty_token_as_absent() {
        let file = write_toml(r#"token = """#);
        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let file = write_toml(r#"token = "from-file""#);
        let config = load_config_file(file.path()).unwrap();

        let config = apply_env(
            config,
            env(&[(TOKEN_ENV, "from-env"), (API_URL_ENV, "http://localhost:3000/notes")]),
        );

        assert_eq!(config.token.as_deref(), Some("from-env"));
        assert_eq!(config.api_base_url, "http://localhost:3000/notes");
    }

    #[test]
    fn test_missing_env_leaves_token_unset() {
        let config = apply_env(AppConfig::default(), env(&[]));
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_load_config_returns_io_error_on_file_not_found() {
        let result = load_config(Some(Path::new("/this/path/does/not/exist/notehub.toml")));

        let err = result.unwrap_err().to_string().to_lowercase();
        assert!(err.contains("failed to read"), "Expected IO error message, got: {}", err);
    }

    #[test]
    fn test_load_config_rejects_malformed_toml() {
        let file = write_toml("per_page = \"twelve\"");
        assert!(load_config_file(file.path()).is_err());
    }
}
