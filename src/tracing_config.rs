use std::{
    env,
    io::{self, IsTerminal},
};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log output format (`json` or `compact`).
pub const LOG_FORMAT_VAR: &str = "LINTCFG_LOG_FORMAT";

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing for command-line use
///
/// Logs go to stderr so stdout only carries command output.
/// Uses RUST_LOG environment variable if set, otherwise defaults to "warn".
/// Emits JSON lines when LINTCFG_LOG_FORMAT is "json", compact text otherwise.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init_cli_mode() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let format = env::var(LOG_FORMAT_VAR).unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(true)
                        .with_level(true)
                        .with_ansi(io::stderr().is_terminal())
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}
