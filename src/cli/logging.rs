use std::io::IsTerminal;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
///
/// `RUST_LOG` is not consulted, so a caller's own log settings never leak
/// onto this program's standard error.
pub const LOG_ENV: &str = "CARPRICE_LOG";

/// Filter used when `CARPRICE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// The filter read from [`LOG_ENV`], or [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, writing to standard error.
///
/// Standard output is reserved for the prediction itself. Colour codes are
/// only emitted when standard error is a terminal. Calling this more than
/// once is harmless.
pub fn init() {
    let ansi = std::io::stderr().is_terminal();

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(ansi),
        )
        .with(env_filter())
        .try_init();
}
