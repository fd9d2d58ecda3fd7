use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkycastError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Forecast must hold exactly {expected} days, got {actual}")]
    InvalidForecast { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkycastError>;
