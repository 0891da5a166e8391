use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::{
    build_info::BuildInfo,
    cli::{CommandResult, registry::Command, types::Invocation},
};

/// Builds the `version` command.
pub fn command() -> Command {
    Command::new("version", "Prints the version of the program.")
        .with_example("lintcfg version")
        .with_handler(run)
}

fn run(invocation: &mut Invocation<'_>, _args: &[String]) -> CommandResult {
    let build_info = invocation.build_info;
    write_version(&mut *invocation.out, build_info, Utc::now())?;
    Ok(())
}

/// Writes the build metadata report.
///
/// The toolchain line is left out when the binary carries no toolchain
/// metadata.
///
/// # Errors
/// Returns the sink's error if writing fails.
pub fn write_version(
    out: &mut dyn Write,
    build_info: &BuildInfo,
    now: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(out, "Built from: {} [{}]", build_info.branch, build_info.commit)?;
    writeln!(out, "Built on: {}", build_info.build_time)?;
    writeln!(
        out,
        "Built time: {}",
        now.format("%Y-%m-%d %H:%M:%S%.f +0000 UTC")
    )?;

    let Some(toolchain) = &build_info.toolchain else {
        return Ok(());
    };

    writeln!(out, "Rust version: {toolchain}")
}
