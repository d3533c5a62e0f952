//! Configuration file support for errata-sync.
//!
//! Provides the YAML deployment file (`config.yaml` by default): data
//! structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::errata::domain::OsRelease;
use crate::shared::error::ErrataError;
use crate::shared::Result;

pub const DEFAULT_CONFIG_FILENAME: &str = "config.yaml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub redis: RedisConfig,
    pub katello: KatelloConfig,
    pub data_files: DataFilesConfig,
    /// Repository label → deployment settings
    pub repositories: BTreeMap<String, RepositoryConfig>,
    #[serde(default)]
    pub publisher: PublisherConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Connection to the advisory cache.
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    #[serde(default = "default_redis_server")]
    pub server: String,
    #[serde(default = "default_redis_port")]
    pub port: u16,
    #[serde(default)]
    pub db: i64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            server: default_redis_server(),
            port: default_redis_port(),
            db: 0,
        }
    }
}

/// Katello/Satellite API access.
#[derive(Debug, Clone, Deserialize)]
pub struct KatelloConfig {
    pub server: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_true")]
    pub ssl_verify: bool,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataFilesConfig {
    pub errata_files: PathBuf,
    pub oval_files: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryConfig {
    pub os_release: OsRelease,
    pub pulp_id: String,
}

/// External publishing tool settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PublisherConfig {
    #[serde(default = "default_publisher_command")]
    pub command: String,
    /// Directory the CSV staging files are created in
    #[serde(default = "std::env::temp_dir")]
    pub work_dir: PathBuf,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            command: default_publisher_command(),
            work_dir: std::env::temp_dir(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_redis_server() -> String {
    "localhost".to_string()
}

fn default_redis_port() -> u16 {
    6379
}

fn default_api_url() -> String {
    "/katello/api/".to_string()
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> u32 {
    1000
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_publisher_command() -> String {
    "pulp-admin".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable, or pass --config.",
            path.display()
        )
    })?;

    let config: AppConfig = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML with the redis, katello, data_files and repositories sections.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
    ErrataError::InvalidConfig {
        message: message.into(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &AppConfig) -> Result<()> {
    if config.repositories.is_empty() {
        return Err(invalid("at least one entry is required under 'repositories'"));
    }
    for (label, repository) in &config.repositories {
        if repository.os_release == 0 {
            return Err(invalid(format!(
                "repositories.{}.os_release must be a positive release number",
                label
            )));
        }
        if repository.pulp_id.trim().is_empty() {
            return Err(invalid(format!(
                "repositories.{}.pulp_id must not be empty",
                label
            )));
        }
    }
    if config.katello.server.trim().is_empty() {
        return Err(invalid("katello.server must not be empty"));
    }
    if config.katello.page_size == 0 {
        return Err(invalid("katello.page_size must be greater than zero"));
    }
    if config.publisher.command.trim().is_empty() {
        return Err(invalid("publisher.command must not be empty"));
    }
    Ok(())
}

impl AppConfig {
    /// Warn about unknown fields in the config file.
    ///
    /// Called once logging is up, since the logging section is part of the
    /// same file.
    pub fn warn_unknown_fields(&self) {
        for key in self.unknown_fields.keys() {
            tracing::warn!(field = %key, "unknown config field will be ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VALID: &str = r#"
redis:
  server: cache.example.com
  port: 6380
  db: 2
katello:
  server: https://satellite.example.com
  api_url: /katello/api/
  username: admin
  password: secret
  ssl_verify: false
  page_size: 250
data_files:
  errata_files: errata.latest.xml
  oval_files: com.redhat.rhsa-all.xml
repositories:
  centos7-updates:
    os_release: 7
    pulp_id: org-centos7-updates
  centos6-updates:
    os_release: 6
    pulp_id: org-centos6-updates
publisher:
  command: /usr/bin/pulp-admin
  work_dir: /var/tmp
logging:
  level: debug
  format: json
"#;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let config_path = dir.path().join("config.yaml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    fn minimal_with(repositories: &str, katello_extra: &str) -> String {
        format!(
            r#"
katello:
  server: https://sat.example.com
  username: u
  password: p
{}
data_files:
  errata_files: e.xml
  oval_files: o.xml
repositories:
{}
"#,
            katello_extra, repositories
        )
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from_path(&write_config(&dir, VALID)).unwrap();

        assert_eq!(config.redis.server, "cache.example.com");
        assert_eq!(config.redis.port, 6380);
        assert_eq!(config.redis.db, 2);
        assert!(!config.katello.ssl_verify);
        assert_eq!(config.katello.page_size, 250);
        assert_eq!(config.data_files.oval_files, PathBuf::from("com.redhat.rhsa-all.xml"));
        assert_eq!(config.repositories.len(), 2);
        assert_eq!(config.repositories["centos6-updates"].os_release, 6);
        assert_eq!(config.repositories["centos7-updates"].pulp_id, "org-centos7-updates");
        assert_eq!(config.publisher.command, "/usr/bin/pulp-admin");
        assert_eq!(config.publisher.work_dir, PathBuf::from("/var/tmp"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_defaults_applied() {
        let dir = TempDir::new().unwrap();
        let content = minimal_with("  c7:\n    os_release: 7\n    pulp_id: c7", "");
        let config = load_config_from_path(&write_config(&dir, &content)).unwrap();

        assert_eq!(config.redis.server, "localhost");
        assert_eq!(config.redis.port, 6379);
        assert_eq!(config.redis.db, 0);
        assert_eq!(config.katello.api_url, "/katello/api/");
        assert!(config.katello.ssl_verify);
        assert_eq!(config.katello.page_size, 1000);
        assert_eq!(config.publisher.command, "pulp-admin");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yaml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "invalid: yaml: [[[broken");
        let err = format!("{}", load_config_from_path(&path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "redis:\n  server: localhost\n");
        let err = format!("{}", load_config_from_path(&path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_repositories_rejected() {
        let dir = TempDir::new().unwrap();
        let content = minimal_with("  {}", "");
        let err = format!("{}", load_config_from_path(&write_config(&dir, &content)).unwrap_err());
        assert!(err.contains("at least one entry is required"));
    }

    #[test]
    fn test_zero_os_release_rejected() {
        let dir = TempDir::new().unwrap();
        let content = minimal_with("  c0:\n    os_release: 0\n    pulp_id: c0", "");
        let err = format!("{}", load_config_from_path(&write_config(&dir, &content)).unwrap_err());
        assert!(err.contains("repositories.c0.os_release"));
    }

    #[test]
    fn test_blank_pulp_id_rejected() {
        let dir = TempDir::new().unwrap();
        let content = minimal_with("  c7:\n    os_release: 7\n    pulp_id: \"  \"", "");
        let err = format!("{}", load_config_from_path(&write_config(&dir, &content)).unwrap_err());
        assert!(err.contains("pulp_id must not be empty"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = TempDir::new().unwrap();
        let content = minimal_with("  c7:\n    os_release: 7\n    pulp_id: c7", "  page_size: 0");
        let err = format!("{}", load_config_from_path(&write_config(&dir, &content)).unwrap_err());
        assert!(err.contains("page_size must be greater than zero"));
    }

    #[test]
    fn test_unknown_log_format_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let mut content = minimal_with("  c7:\n    os_release: 7\n    pulp_id: c7", "");
        content.push_str("logging:\n  format: xml\n");
        assert!(load_config_from_path(&write_config(&dir, &content)).is_err());
    }

    #[test]
    fn test_unknown_fields_captured() {
        let dir = TempDir::new().unwrap();
        let mut content = minimal_with("  c7:\n    os_release: 7\n    pulp_id: c7", "");
        content.push_str("unknown_field: true\nanother_unknown: value\n");

        let config = load_config_from_path(&write_config(&dir, &content)).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
        config.warn_unknown_fields();
    }
}
