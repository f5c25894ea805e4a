// SPDX-License-Identifier: MIT

//! Error types for lenscoach

use thiserror::Error;

/// Result type alias for lenscoach operations
pub type Result<T> = std::result::Result<T, CoachError>;

/// lenscoach error types
///
/// The coaching pipeline itself is infallible by contract; these variants
/// cover the surrounding layers (config, CLI output, Ollama transport).
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Ollama not available: {0}")]
    OllamaUnavailable(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
