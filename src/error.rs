use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sheet schema error: {0}")]
    Schema(String),

    #[error("No shop found with id '{0}'")]
    NotFound(String),

    #[error("Rating {0} is out of range (must be 1-5)")]
    Rating(u8),
}

pub type Result<T> = std::result::Result<T, PortalError>;
