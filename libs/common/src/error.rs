//! Custom error types for the common library
//!
//! This module defines the error type shared by the contract crates. The
//! catalog shapes themselves cannot fail; errors only come from decoding
//! payloads, reading timestamps, reading configuration and building endpoint
//! URLs.

use thiserror::Error;

/// Custom error type for contract operations
#[derive(Error, Debug)]
pub enum ContractError {
    /// A payload did not match the shape it was decoded into
    #[error("Failed to decode {shape}: {source}")]
    Decode {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized into its wire form
    #[error("Failed to encode {shape}: {source}")]
    Encode {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A wire timestamp is not RFC 3339
    #[error("Invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A base URL or joined endpoint URL was not valid
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An `:id` substitution was requested on a route that has none
    #[error("Route {path} has no :id parameter")]
    MissingPathParameter { path: &'static str },

    /// The global tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

/// Type alias for Result with ContractError
pub type ContractResult<T> = Result<T, ContractError>;
