//! Application configuration loading from config.toml
//!
//! This module loads the application configuration: the database location,
//! the fixed export file paths, and the category names used to seed the
//! database on first run. `DATABASE_URL` in the environment overrides the
//! configured database path, and a missing config file falls back to defaults
//! so the application can start from an empty checkout.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Default SQLite location when neither config.toml nor `DATABASE_URL` say otherwise.
const DEFAULT_DATABASE_URL: &str = "sqlite://data/paytrack.sqlite?mode=rwc";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// SQLite connection string
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Export file paths
    #[serde(default)]
    pub export: ExportConfig,
    /// Category names to seed on startup (missing ones are created by name)
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Fixed output paths for the export sinks
#[derive(Debug, Deserialize)]
pub struct ExportConfig {
    /// Where the spreadsheet XML report is written
    #[serde(default = "default_spreadsheet_path")]
    pub spreadsheet_path: String,
    /// Where the HTML document report is written
    #[serde(default = "default_document_path")]
    pub document_path: String,
    /// Where the plain-text document report is written
    #[serde(default = "default_document_text_path")]
    pub document_text_path: String,
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

fn default_spreadsheet_path() -> String {
    "exports/payments.xml".to_string()
}

fn default_document_path() -> String {
    "exports/payments.html".to_string()
}

fn default_document_text_path() -> String {
    "exports/payments.txt".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            spreadsheet_path: default_spreadsheet_path(),
            document_path: default_document_path(),
            document_text_path: default_document_text_path(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            export: ExportConfig::default(),
            categories: Vec::new(),
        }
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the application configuration from ./config.toml, falling back to
/// defaults when the file does not exist. `DATABASE_URL` from the environment
/// takes precedence over the configured database path.
pub fn load_app_configuration() -> Result<AppConfig> {
    let mut config = if Path::new("config.toml").exists() {
        load_config("config.toml")?
    } else {
        warn!("config.toml not found, using default configuration");
        AppConfig::default()
    };

    if let Ok(url) = std::env::var("DATABASE_URL") {
        info!("DATABASE_URL set, overriding configured database path");
        config.database_url = url;
    }

    Ok(config)
}
