//! Internals of the `tinge` command-line driver.
//!
//! The driver is a plain consumer of the two core entry points
//! (`tinge_lexer::tokenize`, `tinge_check::validate`); all analysis
//! lives in those crates.

pub mod commands;

use tracing_subscriber::EnvFilter;

/// Initialize tracing from the `TINGE_LOG` environment variable.
///
/// Defaults to `warn` when the variable is unset or unparsable. Output
/// goes to stderr so it never interleaves with command output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TINGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
