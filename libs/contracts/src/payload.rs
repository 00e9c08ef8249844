//! JSON helpers for catalog payloads
//!
//! Thin wrappers over `serde_json` that report which shape failed.

use common::{ContractError, ContractResult};
use serde::{Serialize, de::DeserializeOwned};
use std::any::type_name;
use tracing::{debug, warn};

/// Decode a JSON payload into a catalog shape
pub fn decode<T: DeserializeOwned>(body: &str) -> ContractResult<T> {
    serde_json::from_str(body).map_err(|source| {
        let shape = short_name::<T>();
        warn!("Rejected {} payload: {}", shape, source);
        ContractError::Decode { shape, source }
    })
}

/// Decode an already-parsed JSON value into a catalog shape
pub fn decode_value<T: DeserializeOwned>(value: serde_json::Value) -> ContractResult<T> {
    serde_json::from_value(value).map_err(|source| {
        let shape = short_name::<T>();
        warn!("Rejected {} payload: {}", shape, source);
        ContractError::Decode { shape, source }
    })
}

/// Encode a catalog shape as a JSON string
pub fn encode<T: Serialize>(value: &T) -> ContractResult<String> {
    let body = serde_json::to_string(value).map_err(|source| ContractError::Encode {
        shape: short_name::<T>(),
        source,
    })?;
    debug!("Encoded {} ({} bytes)", short_name::<T>(), body.len());
    Ok(body)
}

// `contracts::auth::session::LoginRequest` -> `LoginRequest`. Generic
// arguments keep their full paths.
fn short_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
