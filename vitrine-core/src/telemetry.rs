//! Tracing subscriber bootstrap for hosts that do not install their own

use tracing_subscriber::{
    EnvFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "info,vitrine_core=debug";

/// Install a formatted subscriber filtered by `RUST_LOG`.
///
/// Returns an error instead of panicking when a global subscriber is
/// already set, so embedding hosts and tests may call it repeatedly.
pub fn init() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
