//! Application configuration, read from a RON file.
//!
//! Every field has a default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use engine_logging::{engine_info, LogDestination};
use genform_engine::{ClientSettings, EngineConfig, DEFAULT_BASE_URL, DOWNLOAD_FILENAME};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILENAME: &str = "genform.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Where downloaded PDFs are saved.
    pub output_dir: PathBuf,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_download_bytes: u64,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub target: LogTarget,
    pub level: LogLevel,
    pub file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("downloads"),
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.as_secs(),
            max_download_bytes: client.max_download_bytes,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        // The terminal carries the form itself, so logs go to a file.
        Self {
            target: LogTarget::File,
            level: LogLevel::Info,
            file: PathBuf::from("genform.log"),
        }
    }
}

impl AppConfig {
    /// Loads `path`, or `./genform.ron` when no path is given.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILENAME));
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: AppConfig = ron::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        engine_info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            client: ClientSettings {
                base_url: self.base_url.clone(),
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                max_download_bytes: self.max_download_bytes,
            },
            output_dir: self.output_dir.clone(),
            download_filename: DOWNLOAD_FILENAME.to_string(),
        }
    }
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(Some(&temp.path().join("absent.ron"))).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("genform.ron");
        fs::write(
            &path,
            r#"(base_url: "http://content.internal:9000", log: (target: Both))"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(config.base_url, "http://content.internal:9000");
        assert_eq!(config.log.target, LogTarget::Both);
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.output_dir, PathBuf::from("downloads"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("genform.ron");
        fs::write(&path, "(base_url: ").unwrap();

        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn engine_config_carries_settings() {
        let config = AppConfig {
            base_url: "http://example.com".to_string(),
            request_timeout_secs: 5,
            ..AppConfig::default()
        };

        let engine = config.engine_config();
        assert_eq!(engine.client.base_url, "http://example.com");
        assert_eq!(engine.client.request_timeout, Duration::from_secs(5));
        assert_eq!(engine.download_filename, "generated-content.pdf");
    }
}
