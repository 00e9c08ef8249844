//! Tracing setup shared by binaries and tests that consume the catalog

use crate::error::{ContractError, ContractResult};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a global `fmt` subscriber.
///
/// The filter is taken from `RUST_LOG` and defaults to `info` when the
/// variable is unset or unparsable.
pub fn init_tracing() -> ContractResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ContractError::Telemetry(e.to_string()))
}
