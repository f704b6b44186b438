//! Diagnostic logging for the `partfind` binary.
//!
//! Logs go to stderr so stdout carries only search results.

use tracing_subscriber::EnvFilter;

/// Map the number of `-v` flags to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		_ => "debug",
	}
}

/// Install the global subscriber. `RUST_LOG` wins over `verbosity` when set.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.with_thread_names(true)
		.try_init();
}
