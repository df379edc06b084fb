//! Configuration loader and validator for the flashcard exporter.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Root configuration struct mirroring the YAML schema exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub notion: Notion,
    pub export: Export,
}

/// Notion API settings and the lesson database to drain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notion {
    pub base_url: String,
    pub token: String,
    pub version: String,
    pub database_id: String,
}

/// Export pass settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Export {
    pub page_size: u32,
}

/// Load configuration from a YAML file and validate it.
/// - If `path` is None, uses `config.yaml` in the current working directory.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new("config.yaml"));
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Validate a configuration instance.
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.notion.base_url.trim().is_empty() {
        return Err(ConfigError::Invalid("notion.base_url must be non-empty"));
    }
    if cfg.notion.token.trim().is_empty() {
        return Err(ConfigError::Invalid("notion.token must be non-empty"));
    }
    if cfg.notion.version.trim().is_empty() {
        return Err(ConfigError::Invalid("notion.version must be non-empty"));
    }
    if cfg.notion.database_id.trim().is_empty() {
        return Err(ConfigError::Invalid("notion.database_id must be non-empty"));
    }

    if cfg.export.page_size == 0 || cfg.export.page_size > 100 {
        return Err(ConfigError::Invalid(
            "export.page_size must be between 1 and 100",
        ));
    }

    Ok(())
}

/// Returns example YAML configuration content.
pub fn example() -> &'static str {
    r#"notion:
  base_url: "https://api.notion.com/v1"
  # Sent verbatim as the Authorization header.
  token: "Bearer YOUR_NOTION_INTEGRATION_TOKEN"
  version: "2022-06-28"
  database_id: "NOTION_DATABASE_ID"

export:
  # Rows fetched per run, newest lesson first. Notion caps this at 100.
  page_size: 2
"#
}
