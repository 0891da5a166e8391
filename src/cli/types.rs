use std::{
    io::{self, Write},
    path::PathBuf,
};

use thiserror::Error;

use crate::build_info::BuildInfo;

use super::{formatting, registry::Command};

/// Errors that can occur during CLI command execution.
///
/// Every variant is terminal for the current invocation. The binary prints
/// the message on a single line and exits with status 2.
#[derive(Error, Debug)]
pub enum CliError {
    /// The arguments named a subcommand that doesn't exist.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// A required positional argument was not supplied.
    #[error("not enough arguments: {0}")]
    MissingArgument(String),

    /// The target path could not be made absolute.
    #[error("failed to resolve absolute path '{path}': {source}")]
    PathResolution {
        /// Path as given on the command line.
        path: String,
        /// Underlying resolution failure.
        source: io::Error,
    },

    /// A bundled asset is missing from the binary.
    ///
    /// Only a broken build can produce this.
    #[error("failed to read embedded config file: {0}")]
    AssetRead(String),

    /// Writing the output file failed.
    #[error("failed to write config file '{}': {source}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying filesystem error.
        source: io::Error,
    },

    /// Writing command output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Type alias for command execution results.
///
/// Commands write their output through the [`Invocation`] sink, so success
/// carries no value.
pub type CommandResult = Result<(), CliError>;

/// Function run when a command is selected.
///
/// Receives the invocation context and the positional arguments left over
/// after subcommand resolution.
pub type Handler = fn(&mut Invocation<'_>, &[String]) -> CommandResult;

/// Specification for a single positional argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "directory").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,
}

/// Complete metadata for a CLI command.
///
/// Used for usage text, argument count checks and subcommand lookup.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "generate", "version").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Positional arguments the command accepts, in order.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,
}

/// Context for one command execution.
pub struct Invocation<'a> {
    /// The command that was selected.
    pub command: &'a Command,

    /// Names from the root down to `command`.
    pub path: Vec<&'a str>,

    /// Metadata recorded for this build.
    pub build_info: &'a BuildInfo,

    /// Destination for command output.
    pub out: &'a mut dyn Write,

    /// Whether output may contain ANSI styling.
    pub color: bool,
}

impl Invocation<'_> {
    /// Writes usage text for the selected command to the output sink.
    ///
    /// # Errors
    /// Returns `CliError::Io` if the sink rejects the write.
    pub fn print_usage(&mut self) -> CommandResult {
        let usage = formatting::render_usage(self.command, &self.path, self.color);
        self.out.write_all(usage.as_bytes())?;
        Ok(())
    }
}
