use crate::constants::DEFAULT_TIMEOUT_SECONDS;
use crate::error::{PortalError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub sheet: SheetConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    /// Published CSV export URL of the spreadsheet
    /// (`.../pub?gid=<tab>&single=true&output=csv`).
    pub csv_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub header: HeaderRule,
    #[serde(default)]
    pub columns: ColumnStrategy,
}

/// How to locate the header row among the sheet's leading rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum HeaderRule {
    /// The header sits at a fixed row index (0-based, counting every raw row).
    Offset { row: usize },
    /// Scan for the first row containing the marker cell.
    Scan,
}

/// How header cells map onto canonical record fields. The two strategies
/// are never mixed: a sheet is read one way or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnStrategy {
    /// Trust header text, resolved through the fixed alias table.
    ByHeaderName,
    /// Trust column position: the first eight columns in fixed order,
    /// regardless of what the header says.
    ByPosition,
}

impl Default for HeaderRule {
    fn default() -> Self {
        HeaderRule::Scan
    }
}

impl Default for ColumnStrategy {
    fn default() -> Self {
        ColumnStrategy::ByHeaderName
    }
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            PortalError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}
