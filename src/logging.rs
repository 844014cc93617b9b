//! Diagnostics setup for the `sheet-rules` binary.
//!
//! The library only emits `tracing` events; embedders install their own
//! subscriber. [`initialize`] installs a stderr formatter filtered by
//! `SHEET_RULES_LOG` (default `warn`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SHEET_RULES_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

pub fn initialize() {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
