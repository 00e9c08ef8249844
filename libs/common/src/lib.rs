//! Common library for the media catalog contracts
//!
//! This crate provides the ambient pieces shared by the contract crates:
//! the error type, backend configuration and tracing setup.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::ApiConfig;
pub use error::{ContractError, ContractResult};
