//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Failure reported by the grading-criteria API client
    #[error("{0}")]
    Api(#[from] gc_http_client::ApiError),

    /// Client could not be constructed
    #[error("Client initialization failed: {0}")]
    ClientInit(#[from] gc_http_client::ClientInitError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output could not be rendered
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
