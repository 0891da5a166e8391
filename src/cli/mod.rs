//! Command-line interface.
//!
//! Commands form a tree rooted at the program command. The dispatcher walks
//! the tree with the process arguments and runs the selected command's
//! handler. Usage text is generated from command metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use commands::{PROGRAM_NAME, generate::write_asset, version::write_version};
pub use registry::{Command, CommandRegistry, Resolved};
pub use service::CliService;
pub use types::{CliError, CommandArg, CommandMetadata, CommandResult, Handler, Invocation};
