//! Logging configuration using tracing

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "TESTGEN_LOG";

/// Initialize logging to stderr.
///
/// The filter comes from `TESTGEN_LOG` when set, otherwise from the `-v`
/// count. Calling this twice is harmless; the second call does nothing.
///
/// ```bash
/// TESTGEN_LOG=debug test-automation-generator generate --url https://example.com
/// ```
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Filter directive for a given `-v` count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "test_automation_generator=info,warn",
        2 => "test_automation_generator=debug,info",
        _ => "trace",
    }
}
