use colored::Colorize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::Error;

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence over the `verbose` flag.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Print a fatal error to stderr
pub fn print_error(err: &Error) {
    eprintln!("{} {}", "x".bright_red(), err);
}
