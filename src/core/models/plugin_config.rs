use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::global_constants::{self, LOG_TAG_CONFIG};

fn default_imgbb_api_url() -> String {
    global_constants::IMGBB_API_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginConfig {
    #[serde(default)]
    pub imgbb_api_key: Option<String>,
    #[serde(default = "default_imgbb_api_url")]
    pub imgbb_api_url: String,
    #[serde(default)]
    pub imgbb_expiration_seconds: Option<u64>,
    #[serde(default)]
    pub pending_image_timeout_seconds: Option<u64>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            imgbb_api_key: None,
            imgbb_api_url: default_imgbb_api_url(),
            imgbb_expiration_seconds: None,
            pending_image_timeout_seconds: None,
        }
    }
}

impl PluginConfig {
    /// Loads the config, falling back to defaults when the file is missing or broken.
    ///
    /// Both fallbacks are logged as errors since no upload can succeed
    /// without an API key.
    pub fn load(explicit_path: Option<&Path>) -> Self {
        let config_path = Self::resolve_config_path(explicit_path);

        let config = match config_path {
            Some(path) => Self::load_from_path(&path).unwrap_or_else(|error| {
                log::error!(
                    "{} failed to load config file {:?}: {:#}",
                    LOG_TAG_CONFIG,
                    path,
                    error
                );
                Self::default()
            }),
            None => {
                log::error!("{} no config file found, using defaults", LOG_TAG_CONFIG);
                Self::default()
            }
        };

        if config.api_key().is_none() {
            log::error!(
                "{} imgbb_api_key is not configured in {}",
                LOG_TAG_CONFIG,
                global_constants::CONFIG_FILE_NAME
            );
        }

        if config.pending_image_timeout_seconds == Some(0) {
            log::warn!(
                "{} pending_image_timeout_seconds is 0, pending images will not expire",
                LOG_TAG_CONFIG
            );
        }

        config
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {:?}", path))?;
        let config: PluginConfig =
            serde_json::from_str(&contents).context("config file is not valid JSON")?;

        log::info!("{} loaded config from {:?}", LOG_TAG_CONFIG, path);
        log::debug!("{} imgbb endpoint: {}", LOG_TAG_CONFIG, config.imgbb_api_url);

        Ok(config)
    }

    /// The API key, with blank values treated as missing.
    pub fn api_key(&self) -> Option<&str> {
        self.imgbb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Zero would expire every session on its first lookup, so it means no timeout.
    pub fn pending_image_timeout(&self) -> Option<Duration> {
        self.pending_image_timeout_seconds
            .filter(|seconds| *seconds > 0)
            .map(Duration::from_secs)
    }

    fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit_path {
            return Some(path.to_path_buf());
        }

        if let Ok(path) = std::env::var(global_constants::CONFIG_PATH_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        let local_path = PathBuf::from(global_constants::CONFIG_FILE_NAME);
        if local_path.exists() {
            return Some(local_path);
        }

        let user_path = dirs::config_dir()?
            .join(global_constants::CONFIG_DIRECTORY_NAME)
            .join(global_constants::CONFIG_FILE_NAME);

        if user_path.exists() {
            Some(user_path)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_key_and_official_endpoint() {
        let config = PluginConfig::default();

        assert_eq!(config.api_key(), None);
        assert_eq!(config.imgbb_api_url, global_constants::IMGBB_API_URL);
        assert_eq!(config.pending_image_timeout(), None);
    }

    #[test]
    fn test_deserialization_with_only_api_key() {
        let json = r#"{ "imgbb_api_key": "abc123" }"#;

        let config: PluginConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.api_key(), Some("abc123"));
        assert_eq!(config.imgbb_api_url, global_constants::IMGBB_API_URL);
        assert_eq!(config.imgbb_expiration_seconds, None);
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let config = PluginConfig {
            imgbb_api_key: Some("   ".to_string()),
            ..PluginConfig::default()
        };

        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_pending_image_timeout_converts_seconds() {
        let config = PluginConfig {
            pending_image_timeout_seconds: Some(90),
            ..PluginConfig::default()
        };

        assert_eq!(config.pending_image_timeout(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_zero_pending_image_timeout_means_no_timeout() {
        let config = PluginConfig {
            pending_image_timeout_seconds: Some(0),
            ..PluginConfig::default()
        };

        assert_eq!(config.pending_image_timeout(), None);
    }

    #[test]
    fn test_load_keeps_zero_timeout_but_disables_expiry() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(
            &config_path,
            r#"{ "imgbb_api_key": "k", "pending_image_timeout_seconds": 0 }"#,
        )
        .unwrap();

        let config = PluginConfig::load(Some(&config_path));

        assert_eq!(config.pending_image_timeout_seconds, Some(0));
        assert_eq!(config.pending_image_timeout(), None);
    }

    #[test]
    fn test_load_from_path_reads_all_fields() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(
            &config_path,
            r#"{
                "imgbb_api_key": "key-from-file",
                "imgbb_api_url": "http://127.0.0.1:9/upload",
                "imgbb_expiration_seconds": 600,
                "pending_image_timeout_seconds": 120
            }"#,
        )
        .unwrap();

        let config = PluginConfig::load_from_path(&config_path).unwrap();

        assert_eq!(config.api_key(), Some("key-from-file"));
        assert_eq!(config.imgbb_api_url, "http://127.0.0.1:9/upload");
        assert_eq!(config.imgbb_expiration_seconds, Some(600));
        assert_eq!(config.pending_image_timeout_seconds, Some(120));
    }

    #[test]
    fn test_load_from_path_fails_for_invalid_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, "{ not json").unwrap();

        assert!(PluginConfig::load_from_path(&config_path).is_err());
    }

    #[test]
    fn test_load_with_missing_explicit_file_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing_path = temp_dir.path().join("missing.json");

        let config = PluginConfig::load(Some(&missing_path));

        assert_eq!(config, PluginConfig::default());
    }

    #[test]
    fn test_load_with_explicit_file_uses_its_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, r#"{ "imgbb_api_key": "explicit" }"#).unwrap();

        let config = PluginConfig::load(Some(&config_path));

        assert_eq!(config.api_key(), Some("explicit"));
    }
}
