use crate::core::photos::DEFAULT_IMAGE_EXTENSIONS;
use crate::utils::error::{ArchiveError, Result};
use crate::utils::validation::{validate_extensions, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_ARCHIVE_PATH: &str = "./data/saveFile.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchiveConfig {
    #[serde(default)]
    pub archive: StorageSection,
    #[serde(default)]
    pub photos: PhotosSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(default = "default_archive_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotosSection {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

fn default_archive_path() -> String {
    DEFAULT_ARCHIVE_PATH.to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_IMAGE_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            path: default_archive_path(),
        }
    }
}

impl Default for PhotosSection {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl ArchiveConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ArchiveError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when it exists, otherwise falls back to defaults.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().is_file() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "No config file at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| ArchiveError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn archive_path(&self) -> &str {
        &self.archive.path
    }

    pub fn image_extensions(&self) -> &[String] {
        &self.photos.extensions
    }
}

impl Validate for ArchiveConfig {
    fn validate(&self) -> Result<()> {
        validate_path("archive.path", &self.archive.path)?;
        validate_extensions("photos.extensions", &self.photos.extensions)?;

        if let Some(level) = &self.logging.level {
            let valid = ["trace", "debug", "info", "warn", "error"];
            if !valid.contains(&level.as_str()) {
                return Err(ArchiveError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", valid.join(", ")),
                });
            }
        }

        Ok(())
    }
}
