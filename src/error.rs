use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenecodecError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid bits: {0}")]
    InvalidBits(String),

    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl GenecodecError {
    pub(crate) fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    pub(crate) fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenecodecError>;
