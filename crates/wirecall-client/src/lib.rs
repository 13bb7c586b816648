//! Wirecall Client - JSON-RPC over HTTP
//!
//! This crate provides:
//! - A method-agnostic client: any method name is forwarded verbatim
//! - Dialect handling for JSON-RPC 1.0, 1.1 and 2.0
//! - Structured errors that keep the server's raw error payload inspectable

pub mod client;
pub mod error;

pub use client::*;
pub use error::*;
