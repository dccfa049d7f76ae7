// src/config.rs
use crate::cli::Cli;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_HOST_PORT: &str = "localhost:27017";
pub const DEFAULT_DB_NAME: &str = "test";
pub const DEFAULT_COLLECTION: &str = "grapes";
pub const DEFAULT_FILE_DB: &str = "./data/grapes.db";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Settings read from the optional `--config` YAML file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub host_port: Option<String>,
    pub db_name: Option<String>,
    pub collection: Option<String>,
    pub file_db: Option<PathBuf>,
    pub connect_timeout: Option<u64>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty YAML document deserializes to unit, not a map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Where and how to reach the target collection.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub host_port: String,
    pub db_name: String,
    pub collection: String,
    pub connect_timeout: Duration,
}

/// Fully resolved program configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db: DbConfig,
    pub file_db: PathBuf,
    pub dry_run: bool,
}

impl Config {
    /// Resolves the configuration from the command line and, if given, the
    /// YAML file it points to.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    /// Command-line values win over file values, which win over defaults.
    pub fn merge(cli: &Cli, file: FileConfig) -> Self {
        let timeout_secs = cli
            .connect_timeout
            .or(file.connect_timeout)
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);

        Config {
            db: DbConfig {
                host_port: cli
                    .host_port
                    .clone()
                    .or(file.host_port)
                    .unwrap_or_else(|| DEFAULT_HOST_PORT.to_string()),
                db_name: cli
                    .db_name
                    .clone()
                    .or(file.db_name)
                    .unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
                collection: cli
                    .collection
                    .clone()
                    .or(file.collection)
                    .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
                connect_timeout: Duration::from_secs(timeout_secs),
            },
            file_db: cli
                .file_db
                .clone()
                .or(file.file_db)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_DB)),
            dry_run: cli.dry_run,
        }
    }
}
