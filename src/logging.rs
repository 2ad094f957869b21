use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr subscriber for the CLI.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output when `verbose` is set. Stdout stays reserved for rendered HTML.
pub fn init_logging(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	let stderr_layer = fmt::layer()
		.with_writer(std::io::stderr)
		.with_target(false);

	// A second init (e.g. from tests) keeps the first subscriber
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(stderr_layer)
		.try_init();
}
