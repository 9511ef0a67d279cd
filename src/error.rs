use crate::ConfigError;
use std::fmt;

/// Failure of any stage of the rendering pipeline
#[derive(Debug)]
pub enum Error {
    /// Configuration file could not be opened or read
    ConfigOpen(std::io::Error),
    /// Configuration is not valid JSON or misses required fields
    ConfigParse(serde_json::Error),
    /// Configuration parsed but describes an unusable image
    InvalidConfig(ConfigError),
    /// Output image file could not be created
    OutputCreate(std::io::Error),
    /// PNG encoder failed while writing the image
    Encode(png::EncodingError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigOpen(error) => write!(f, "failed to open config: {}", error),
            Error::ConfigParse(error) => write!(f, "failed to parse config: {}", error),
            Error::InvalidConfig(error) => write!(f, "invalid config: {}", error),
            Error::OutputCreate(error) => write!(f, "failed to create output file: {}", error),
            Error::Encode(error) => write!(f, "failed to encode PNG: {}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ConfigOpen(error) | Error::OutputCreate(error) => Some(error),
            Error::ConfigParse(error) => Some(error),
            Error::InvalidConfig(error) => Some(error),
            Error::Encode(error) => Some(error),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Self::InvalidConfig(error)
    }
}

impl From<png::EncodingError> for Error {
    fn from(error: png::EncodingError) -> Self {
        Self::Encode(error)
    }
}
