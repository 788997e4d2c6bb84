//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout stays clean for text and NDJSON output.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use rentvix::config::Verbosity;

/// Level for a `-v` count, after the configured verbosity
pub fn level_for(verbose: u8, configured: Verbosity) -> LevelFilter {
    if verbose == 0 && configured == Verbosity::Quiet {
        return LevelFilter::ERROR;
    }
    match verbose.max(configured.as_count()) {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr subscriber. `RUST_LOG`, when set, wins over flags.
pub fn setup_logging(verbose: u8, configured: Verbosity) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::default().add_directive(level_for(verbose, configured).into()),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_filter(filter);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
