//! Error types for wirecall-client

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The server reported an application-level error. The payload is the
    /// server's error object, verbatim, so callers can inspect code/data.
    #[error("{message}")]
    Rpc { message: String, payload: Value },
}

pub type Result<T> = std::result::Result<T, ClientError>;
