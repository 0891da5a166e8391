//! Built-in commands.
pub mod generate;
pub mod version;

use crate::cli::{CommandRegistry, registry::Command};

/// Name of the program-level command.
pub const PROGRAM_NAME: &str = "lintcfg";

/// Builds the root command that every subcommand hangs off.
pub fn root() -> Command {
    Command::new(PROGRAM_NAME, "Strict opinionated golangci-lint config")
}

/// Registers every built-in command under the registry root.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
pub fn register_commands(registry: &mut CommandRegistry) {
    registry.register_command(generate::command());
    registry.register_command(version::command());
}
