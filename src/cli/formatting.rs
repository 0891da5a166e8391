//! Formatting utilities for CLI output.
//!
//! Provides styled headers, command names and errors, and renders usage
//! text for any node of the command tree.

use std::fmt::Write as _;

use super::registry::Command;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

fn style(color: bool, text: &str, format: fn(&str) -> String) -> String {
    if color {
        format(text)
    } else {
        text.to_string()
    }
}

/// Renders usage text for `command`.
///
/// `path` holds the command names from the program down to `command` and
/// prefixes every usage line. Padding is applied before styling so columns
/// stay aligned when `color` is on.
pub fn render_usage(command: &Command, path: &[&str], color: bool) -> String {
    let metadata = command.metadata();
    let invocation = path.join(" ");
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} - {}",
        style(color, &invocation, format_header),
        metadata.description
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style(color, "Usage:", format_subheader));

    if command.handler().is_some() {
        let args: String = metadata
            .args
            .iter()
            .map(|arg| {
                if arg.required {
                    format!(" <{}>", arg.name)
                } else {
                    format!(" [{}]", arg.name)
                }
            })
            .collect();
        let _ = writeln!(out, "  {invocation}{args}");
    }
    if !command.subcommands().is_empty() {
        let _ = writeln!(out, "  {invocation} <command>");
    }

    if !command.subcommands().is_empty() {
        let width = command
            .subcommands()
            .iter()
            .map(|child| child.name().len())
            .max()
            .unwrap_or(0);

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style(color, "Commands:", format_subheader));
        for child in command.subcommands() {
            let name = format!("{:<width$}", child.name());
            let _ = writeln!(
                out,
                "  {}  {}",
                style(color, &name, format_command),
                style(color, &child.metadata().description, format_description)
            );
        }
    }

    if !metadata.args.is_empty() {
        let labels: Vec<String> = metadata
            .args
            .iter()
            .map(|arg| format!("<{}>", arg.name))
            .collect();
        let width = labels.iter().map(String::len).max().unwrap_or(0);

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style(color, "Arguments:", format_subheader));
        for (label, arg) in labels.iter().zip(&metadata.args) {
            let requirement = if arg.required { "required" } else { "optional" };
            let _ = writeln!(
                out,
                "  {:<width$}  {} ({requirement})",
                label, arg.description
            );
        }
    }

    if !metadata.examples.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style(color, "Examples:", format_subheader));
        for example in &metadata.examples {
            let _ = writeln!(out, "  {}", style(color, example, format_description));
        }
    }

    out
}
