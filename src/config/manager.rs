use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;

/// Public endpoint of the Google Translate web API.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Source language used when none is configured (detected by the service).
pub const DEFAULT_SOURCE_LANGUAGE: &str = "auto";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default settings in the `[translate]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Base URL of the translation service.
    pub endpoint: Option<String>,
    /// Source language code, or `auto`.
    pub from: Option<String>,
    /// Request timeout in seconds. `0` disables the timeout.
    pub timeout_secs: Option<u64>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/translate/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub translate: TranslateConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base URL of the translation service.
    pub endpoint: String,
    /// Lowercased source language code, or `auto`.
    pub from: String,
    /// Request timeout, `None` when disabled.
    pub timeout: Option<Duration>,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Endpoint override.
    pub endpoint: Option<String>,
    /// Source language override.
    pub from: Option<String>,
    /// Timeout override in seconds.
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults.
///
/// # Errors
///
/// Returns an error if the resolved endpoint is not an http(s) URL.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.translate.endpoint.as_ref())
        .map_or(DEFAULT_ENDPOINT, String::as_str)
        .trim_end_matches('/')
        .to_string();

    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        bail!(
            "Invalid endpoint: '{endpoint}'\n\n\
             The endpoint must start with http:// or https://"
        );
    }

    let from = options
        .from
        .as_ref()
        .or(config_file.translate.from.as_ref())
        .map_or(DEFAULT_SOURCE_LANGUAGE, String::as_str)
        .to_lowercase();

    let timeout_secs = options
        .timeout_secs
        .or(config_file.translate.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

    Ok(ResolvedConfig {
        endpoint,
        from,
        timeout,
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/translate/config.toml`
    /// or `~/.config/translate/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    #[cfg(test)]
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    #[cfg(test)]
    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, falling back to defaults when it does not exist.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(ConfigFile::default());
        }
        tracing::debug!(path = %self.config_path.display(), "loading config file");
        self.load()
    }

    #[cfg(test)]
    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            translate: TranslateConfig {
                endpoint: Some("http://localhost:8080".to_string()),
                from: Some("en".to_string()),
                timeout_secs: Some(5),
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_or_default_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[translate]\ntimeout_secs = \"soon\"\n").unwrap();

        let err = manager.load_or_default().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "").unwrap();

        assert_eq!(manager.load().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_resolve_config_defaults() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.from, "auto");
        assert_eq!(
            resolved.timeout,
            Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        );
    }

    #[test]
    fn test_resolve_config_zero_timeout_disables() {
        let options = ResolveOptions {
            timeout_secs: Some(0),
            ..ResolveOptions::default()
        };

        let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();
        assert_eq!(resolved.timeout, None);
    }

    #[test]
    fn test_resolve_config_trims_trailing_slash() {
        let options = ResolveOptions {
            endpoint: Some("http://localhost:8080/".to_string()),
            ..ResolveOptions::default()
        };

        let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();
        assert_eq!(resolved.endpoint, "http://localhost:8080");
    }

    #[test]
    fn test_resolve_config_rejects_non_http_endpoint() {
        let options = ResolveOptions {
            endpoint: Some("ftp://example.com".to_string()),
            ..ResolveOptions::default()
        };

        let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid endpoint"));
    }

    #[test]
    fn test_resolve_config_lowercases_source_language() {
        let options = ResolveOptions {
            from: Some("EN".to_string()),
            ..ResolveOptions::default()
        };

        let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();
        assert_eq!(resolved.from, "en");
    }
}
