//! lintcfg entry point.
//!
//! Dispatches the process arguments and maps any command error to exit
//! status 2, printing the message to stdout.

use std::{
    env,
    io::{self, IsTerminal, Write},
    process::ExitCode,
};

use lintcfg::{
    BuildInfo,
    cli::{CliService, formatting::format_error},
    tracing_config,
};
use tracing::debug;

const FAILURE_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    if let Err(e) = tracing_config::init_cli_mode() {
        eprintln!("failed to initialise logging: {e}");
    }

    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut out = stdout.lock();

    let cli_service = CliService::new(BuildInfo::from_build_env());
    let result = cli_service.execute(&args, &mut out, color);

    let code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Command failed");
            let message = e.to_string();
            let message = if color { format_error(&message) } else { message };
            if let Err(write_err) = writeln!(out, "{message}") {
                eprintln!("failed to print error: {write_err}; {e}");
            }
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    };

    if let Err(e) = out.flush() {
        eprintln!("failed to flush output: {e}");
    }
    code
}
