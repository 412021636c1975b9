use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to read configuration at '{path}': {source}")]
    ConfigIo {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration file at '{path}': {source}")]
    ConfigParse {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("An enumerated field needs at least one allowed value")]
    EmptyAllowedValues,
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
