//! Error types for the extraction engine

use std::fmt;

/// Errors that can occur during frequency extraction
#[derive(Debug, Clone)]
pub enum ExtractionError {
    /// Configuration is missing, unreadable, or holds invalid values
    InvalidConfig(String),

    /// Invalid input parameters
    InvalidInput(String),

    /// Audio decoding error
    DecodingError(String),
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            ExtractionError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ExtractionError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
        }
    }
}

impl std::error::Error for ExtractionError {}
