//! Wirecall RPC - JSON-RPC protocol definitions
//!
//! This crate defines:
//! - The protocol dialects (1.0, 1.1, 2.0) and their rules
//! - Request/response wire types
//! - Standard error codes

pub mod error;
pub mod types;
pub mod version;

pub use error::*;
pub use types::*;
pub use version::*;
