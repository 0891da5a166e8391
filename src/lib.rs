//! lintcfg - writes a strict, opinionated golangci-lint config.
//!
//! The binary bundles a `.golangci.yml` and drops it into a project directory
//! on request. It can also report the metadata recorded when it was built.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lintcfg::{BuildInfo, cli::CliService};
//!
//! let service = CliService::new(BuildInfo::from_build_env());
//! let args = vec!["generate".to_string(), ".".to_string()];
//!
//! service.execute(&args, &mut std::io::stdout(), false)?;
//! # Ok::<(), lintcfg::CliError>(())
//! ```

/// Files compiled into the binary.
pub mod assets;

/// Compile-time build metadata.
pub mod build_info;

/// Command tree, dispatcher and built-in commands.
pub mod cli;

/// Logging setup.
pub mod tracing_config;

pub use build_info::BuildInfo;
pub use cli::CliError;
