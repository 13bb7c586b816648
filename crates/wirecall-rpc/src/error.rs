//! Error types for wirecall-rpc

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Unknown protocol version: {0}")]
    UnknownVersion(String),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Standard JSON-RPC 2.0 error codes.
///
/// Pre-2.0 dialects define no error-object shape, but servers in the wild
/// (bitcoind among them) tend to follow these anyway.
pub mod code {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
}
