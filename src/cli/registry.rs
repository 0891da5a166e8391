use std::io::Write;

use tracing::{debug, instrument};

use crate::build_info::BuildInfo;

use super::{
    CliError, CommandResult,
    commands,
    types::{CommandArg, CommandMetadata, Handler, Invocation},
};

/// Flags that print usage for the selected command instead of running it.
const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

/// A node in the command tree.
///
/// Each command carries its own metadata, an optional handler and an ordered
/// list of subcommands. Nodes without a handler only group subcommands and
/// print usage when selected.
///
/// # Example Structure
///
/// ```text
/// lintcfg
/// ├── generate <directory>
/// └── version
/// ```
#[derive(Debug, Clone)]
pub struct Command {
    metadata: CommandMetadata,
    handler: Option<Handler>,
    subcommands: Vec<Command>,
}

impl Command {
    /// Creates a command with no handler, arguments or subcommands.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            metadata: CommandMetadata {
                name: name.to_string(),
                description: description.to_string(),
                args: Vec::new(),
                examples: Vec::new(),
            },
            handler: None,
            subcommands: Vec::new(),
        }
    }

    /// Sets the function run when this command is selected.
    pub fn with_handler(mut self, handler: Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Appends a positional argument specification.
    pub fn with_arg(mut self, name: &str, description: &str, required: bool) -> Self {
        self.metadata.args.push(CommandArg {
            name: name.to_string(),
            description: description.to_string(),
            required,
        });
        self
    }

    /// Appends a usage example.
    pub fn with_example(mut self, example: &str) -> Self {
        self.metadata.examples.push(example.to_string());
        self
    }

    /// Builder form of [`Command::add_subcommand`].
    pub fn with_subcommand(mut self, child: Command) -> Self {
        self.add_subcommand(child);
        self
    }

    /// Attaches `child` under this command.
    ///
    /// Sibling names are unique: a child with the same name as an existing one
    /// takes its place, keeping the original position.
    pub fn add_subcommand(&mut self, child: Command) {
        match self
            .subcommands
            .iter_mut()
            .find(|existing| existing.name() == child.name())
        {
            Some(existing) => *existing = child,
            None => self.subcommands.push(child),
        }
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Full metadata for this command.
    pub fn metadata(&self) -> &CommandMetadata {
        &self.metadata
    }

    /// The handler, if this command runs anything itself.
    pub fn handler(&self) -> Option<Handler> {
        self.handler
    }

    /// Direct children in registration order.
    pub fn subcommands(&self) -> &[Command] {
        &self.subcommands
    }

    /// Looks up a direct child by name.
    pub fn find_subcommand(&self, name: &str) -> Option<&Command> {
        self.subcommands.iter().find(|child| child.name() == name)
    }
}

/// Outcome of walking the command tree with a list of arguments.
#[derive(Debug)]
pub struct Resolved<'a, 'b> {
    /// Deepest command matched by the leading arguments.
    pub command: &'a Command,

    /// Names from the root down to `command`.
    pub path: Vec<&'a str>,

    /// Arguments left once subcommand matching stopped.
    pub args: &'b [String],
}

/// Registry holding the command tree rooted at the program command.
///
/// Dispatch walks successive arguments down the tree. The first argument that
/// doesn't name a child ends the walk and every remaining argument is handed
/// to the matched command's handler.
pub struct CommandRegistry {
    root: Command,
}

impl CommandRegistry {
    /// Creates a registry around `root`.
    pub fn new(root: Command) -> Self {
        Self { root }
    }

    /// The program-level command.
    pub fn root(&self) -> &Command {
        &self.root
    }

    /// Registers a top-level subcommand.
    pub fn register_command(&mut self, command: Command) {
        self.root.add_subcommand(command);
    }

    /// Registers all available CLI commands under the root.
    pub fn register_all_commands(&mut self) {
        commands::register_commands(self);
    }

    /// Finds the deepest command named by the leading arguments.
    pub fn resolve<'a, 'b>(&'a self, args: &'b [String]) -> Resolved<'a, 'b> {
        let mut command = &self.root;
        let mut path = vec![self.root.name()];
        let mut consumed = 0;

        for token in args {
            let Some(child) = command.find_subcommand(token) else {
                break;
            };
            command = child;
            path.push(child.name());
            consumed += 1;
        }

        Resolved {
            command,
            path,
            args: &args[consumed..],
        }
    }

    /// Resolves and runs the command selected by `args`.
    ///
    /// `args` excludes the program name. A help flag prints usage for the
    /// selected command. A command without a handler prints its usage and
    /// succeeds when nothing follows it, otherwise the leftover argument is
    /// reported as an unknown command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` for an unknown subcommand and
    /// `CliError::MissingArgument` when required arguments are absent; both
    /// print usage first. Any handler error is returned unchanged.
    #[instrument(skip_all, fields(argc = args.len()))]
    pub fn execute(
        &self,
        args: &[String],
        build_info: &BuildInfo,
        out: &mut dyn Write,
        color: bool,
    ) -> CommandResult {
        let Resolved {
            command,
            path,
            args,
        } = self.resolve(args);

        let command_path = path.join(" ");
        debug!(command = %command_path, remaining = args.len(), "Resolved command");

        let mut invocation = Invocation {
            command,
            path,
            build_info,
            out,
            color,
        };

        if args
            .first()
            .is_some_and(|first| HELP_FLAGS.contains(&first.as_str()))
        {
            return invocation.print_usage();
        }

        let Some(handler) = command.handler() else {
            invocation.print_usage()?;
            return match args.first() {
                None => Ok(()),
                Some(unknown) => Err(CliError::CommandNotFound(format!(
                    "unknown command '{unknown}' for '{command_path}'"
                ))),
            };
        };

        if let Err(e) = Self::validate_args(command.metadata(), args) {
            invocation.print_usage()?;
            return Err(e);
        }

        let accepted = command.metadata().args.len();
        if args.len() > accepted {
            debug!(
                command = %command_path,
                ignored = ?&args[accepted..],
                "Ignoring surplus arguments"
            );
        }

        handler(&mut invocation, args)
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> CommandResult {
        let missing = metadata
            .args
            .iter()
            .filter(|arg| arg.required)
            .nth(args.len());

        match missing {
            Some(arg) => Err(CliError::MissingArgument(format!(
                "{} should be specified",
                arg.description
            ))),
            None => Ok(()),
        }
    }
}
