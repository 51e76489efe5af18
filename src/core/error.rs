use thiserror::Error;

use crate::core::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum PisteError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Event file already exists: {0}")]
    AlreadyExists(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PisteError {
    /// Individual messages, one per accumulated validation failure
    pub fn messages(&self) -> Vec<String> {
        match self {
            PisteError::Validation(errors) => errors.messages().map(str::to_owned).collect(),
            other => vec![other.to_string()],
        }
    }
}

pub type Result<T> = std::result::Result<T, PisteError>;
