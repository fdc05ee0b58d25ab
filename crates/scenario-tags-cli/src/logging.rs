//! Structured logging to stderr.
//!
//! Records emitted through the `log` facade by the expression library are
//! forwarded into `tracing`, so one filter governs both.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Output goes to stderr so the match report on stdout stays machine
/// readable. If a global subscriber is already set the call is a no-op.
pub fn init_logging(config: &CliConfig) {
    let filter = filter_from_config(config);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    // The first subscriber wins; later calls (e.g. from tests) are ignored.
    let _ = subscriber.try_init();
}
