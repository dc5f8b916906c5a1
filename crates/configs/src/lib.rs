use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_STORAGE_KEY: &str = "jobPortalData";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Memory,
    #[default]
    File,
}

impl BackendKind {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => Err(anyhow!("unknown storage backend `{other}` (expected memory or file)")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: BackendKind::File, data_dir: default_data_dir(), key: default_key() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_data_dir() -> String { "data".into() }
fn default_key() -> String { DEFAULT_STORAGE_KEY.into() }
fn default_log_format() -> String { "compact".into() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Like [`AppConfig::load_and_validate`], but a missing config file falls back to defaults.
    pub fn load_or_default() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = %e, "config file unavailable; using defaults");
                AppConfig::default()
            }
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.storage.normalize_from_env()?;
        self.storage.validate()?;
        self.logging.normalize_from_env();
        self.logging.validate()?;
        Ok(())
    }
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) -> Result<()> {
        if let Ok(raw) = std::env::var("PORTAL_STORAGE_BACKEND") {
            self.backend = BackendKind::parse(&raw)?;
        }
        if let Ok(dir) = std::env::var("PORTAL_DATA_DIR") {
            self.data_dir = dir;
        }
        if let Ok(key) = std::env::var("PORTAL_STORAGE_KEY") {
            self.key = key;
        }
        self.normalize();
        Ok(())
    }

    fn normalize(&mut self) {
        if self.data_dir.trim().is_empty() {
            self.data_dir = default_data_dir();
        }
        self.key = self.key.trim().to_string();
    }

    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(anyhow!("storage.key must not be empty"));
        }
        // The key becomes a file name for the file backend.
        if self.key.contains(['/', '\\']) || self.key == "." || self.key == ".." {
            return Err(anyhow!("storage.key must be a plain name, got `{}`", self.key));
        }
        Ok(())
    }
}

impl LoggingConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(format) = std::env::var("PORTAL_LOG_FORMAT") {
            self.format = format;
        }
        self.format = self.format.trim().to_ascii_lowercase();
    }

    pub fn validate(&self) -> Result<()> {
        match self.format.as_str() {
            "compact" | "json" => Ok(()),
            other => Err(anyhow!("logging.format must be compact or json, got `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() -> Result<()> {
        let cfg = load_from_str("")?;
        assert_eq!(cfg.storage.backend, BackendKind::File);
        assert_eq!(cfg.storage.data_dir, "data");
        assert_eq!(cfg.storage.key, DEFAULT_STORAGE_KEY);
        assert_eq!(cfg.logging.format, "compact");
        Ok(())
    }

    #[test]
    fn parses_storage_section() -> Result<()> {
        let cfg = load_from_str(
            r#"
            [storage]
            backend = "memory"
            data_dir = "/tmp/portal"
            key = "demo"

            [logging]
            format = "json"
            "#,
        )?;
        assert_eq!(cfg.storage.backend, BackendKind::Memory);
        assert_eq!(cfg.storage.data_dir, "/tmp/portal");
        assert_eq!(cfg.storage.key, "demo");
        assert_eq!(cfg.logging.format, "json");
        Ok(())
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(load_from_str("[storage]\nbackend = \"redis\"\n").is_err());
        assert!(BackendKind::parse("Redis").is_err());
        assert_eq!(BackendKind::parse(" MEMORY ").ok(), Some(BackendKind::Memory));
    }

    #[test]
    fn storage_key_must_be_plain_name() {
        let mut storage = StorageConfig::default();
        storage.key = "../escape".into();
        assert!(storage.validate().is_err());
        storage.key = "   ".into();
        storage.normalize();
        assert!(storage.validate().is_err());
        storage.key = "jobPortalData".into();
        assert!(storage.validate().is_ok());
    }

    #[test]
    fn logging_format_is_checked() {
        let mut logging = LoggingConfig { format: " JSON ".into() };
        logging.format = logging.format.trim().to_ascii_lowercase();
        assert!(logging.validate().is_ok());
        logging.format = "pretty".into();
        assert!(logging.validate().is_err());
    }
}
