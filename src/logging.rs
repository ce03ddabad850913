// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Verbosity is read from the `FLEET_PRO_LOG` environment variable using the
//! usual `EnvFilter` directives (`debug`, `fleet_pro=trace`, ...). Without it,
//! only `info` and above are printed.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
pub const ENV_LOG_FILTER: &str = "FLEET_PRO_LOG";

const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `FLEET_PRO_LOG`, falling back to `info`.
#[must_use]
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(ENV_LOG_FILTER).ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}
