//! Tracing initialization.
//!
//! Library code only emits `tracing` events. Binaries, benches, and tests
//! that want to see them call [`init_tracing`] once.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive (e.g. `quill_engine=debug`).
pub const LOG_ENV_VAR: &str = "QUILL_LOG";

static INIT: OnceLock<()> = OnceLock::new();

/// Install a global fmt subscriber filtered by `QUILL_LOG` (default `info`).
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("info"));
        // A subscriber installed by the host application wins.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    });
}
