use std::io::Write;

use crate::build_info::BuildInfo;

use super::{CommandResult, CommandRegistry, commands};

/// High-level service for executing CLI commands.
///
/// Owns the fully populated command tree and the build metadata that
/// commands report.
pub struct CliService {
    registry: CommandRegistry,
    build_info: BuildInfo,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `build_info` - Metadata handed to commands that report it
    pub fn new(build_info: BuildInfo) -> Self {
        let mut registry = CommandRegistry::new(commands::root());
        registry.register_all_commands();

        CliService {
            registry,
            build_info,
        }
    }

    /// Executes the command selected by `args` (without the program name).
    ///
    /// Command output and usage text go to `out`. `color` enables ANSI styling.
    ///
    /// # Errors
    /// Returns whatever `CliError` the dispatcher or the command produced.
    pub fn execute(&self, args: &[String], out: &mut dyn Write, color: bool) -> CommandResult {
        self.registry.execute(args, &self.build_info, out, color)
    }
}
