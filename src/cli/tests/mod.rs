//! Unit tests for CLI module
//!
//! Tests command tree resolution, dispatch policy and usage rendering.
//! Handlers are stubs writing to in-memory sinks.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::io::Write;

use crate::build_info::BuildInfo;
use crate::cli::{
    CliError, CliService, Command, CommandRegistry, CommandResult, Invocation,
    formatting::{Colors, render_usage},
};

fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn build_info() -> BuildInfo {
    BuildInfo {
        branch: "main".to_string(),
        commit: "abc123".to_string(),
        build_time: "01 Jan 70 00:00 UTC".to_string(),
        toolchain: None,
    }
}

fn echo(invocation: &mut Invocation<'_>, args: &[String]) -> CommandResult {
    writeln!(invocation.out, "{}: {}", invocation.path.join(" "), args.join(","))?;
    Ok(())
}

fn fail(_invocation: &mut Invocation<'_>, _args: &[String]) -> CommandResult {
    Err(CliError::AssetRead("stub".to_string()))
}

fn test_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new(Command::new("tool", "A test tool"));
    registry.register_command(
        Command::new("remote", "Manage remotes")
            .with_subcommand(
                Command::new("add", "Add a remote")
                    .with_arg("name", "remote name", true)
                    .with_arg("url", "remote URL", true)
                    .with_handler(echo),
            )
            .with_subcommand(Command::new("list", "List remotes").with_handler(echo)),
    );
    registry.register_command(Command::new("broken", "Always fails").with_handler(fail));
    registry
}

fn run(registry: &CommandRegistry, tokens: &[&str]) -> (CommandResult, String) {
    let mut out = Vec::new();
    let result = registry.execute(&args(tokens), &build_info(), &mut out, false);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn resolve_walks_nested_subcommands() {
    let registry = test_registry();
    let input = args(&["remote", "add", "origin", "git@host:repo"]);

    let resolved = registry.resolve(&input);

    assert_eq!(resolved.command.name(), "add");
    assert_eq!(resolved.path, vec!["tool", "remote", "add"]);
    assert_eq!(resolved.args, &input[2..]);
}

#[test]
fn resolve_stops_at_first_unmatched_token() {
    let registry = test_registry();
    let input = args(&["remote", "list", "add"]);

    let resolved = registry.resolve(&input);

    assert_eq!(resolved.command.name(), "list");
    assert_eq!(resolved.args, &input[2..]);
}

#[test]
fn resolve_empty_selects_root() {
    let registry = test_registry();

    let resolved = registry.resolve(&[]);

    assert_eq!(resolved.command.name(), "tool");
    assert!(resolved.args.is_empty());
}

#[test]
fn execute_passes_remaining_arguments() {
    let (result, output) = run(&test_registry(), &["remote", "add", "origin", "url"]);

    assert!(result.is_ok());
    assert_eq!(output, "tool remote add: origin,url\n");
}

#[test]
fn surplus_arguments_reach_the_handler() {
    let (result, output) = run(&test_registry(), &["remote", "list", "extra"]);

    assert!(result.is_ok());
    assert_eq!(output, "tool remote list: extra\n");
}

#[test]
fn empty_arguments_print_root_usage() {
    let (result, output) = run(&test_registry(), &[]);

    assert!(result.is_ok());
    assert!(output.starts_with("tool - A test tool"));
    assert!(output.contains("remote"));
    assert!(output.contains("broken"));
}

#[test]
fn group_without_handler_prints_usage() {
    let (result, output) = run(&test_registry(), &["remote"]);

    assert!(result.is_ok());
    assert!(output.contains("tool remote <command>"));
    assert!(output.contains("add"));
    assert!(output.contains("list"));
}

#[test]
fn unknown_subcommand_prints_usage_and_fails() {
    let (result, output) = run(&test_registry(), &["frobnicate"]);

    let err = result.unwrap_err();
    assert!(matches!(err, CliError::CommandNotFound(_)));
    assert!(err.to_string().contains("frobnicate"));
    assert!(output.contains("Usage:"));
}

#[test]
fn missing_required_argument_prints_usage_and_fails() {
    let (result, output) = run(&test_registry(), &["remote", "add", "origin"]);

    let err = result.unwrap_err();
    assert!(matches!(err, CliError::MissingArgument(_)));
    assert_eq!(err.to_string(), "not enough arguments: remote URL should be specified");
    assert!(output.contains("tool remote add <name> <url>"));

    let (result, _) = run(&test_registry(), &["remote", "add"]);
    assert_eq!(
        result.unwrap_err().to_string(),
        "not enough arguments: remote name should be specified"
    );
}

#[test]
fn help_flag_prints_usage_without_running() {
    let (result, output) = run(&test_registry(), &["broken", "--help"]);

    assert!(result.is_ok());
    assert!(output.starts_with("tool broken - Always fails"));

    let (result, output) = run(&test_registry(), &["-h"]);
    assert!(result.is_ok());
    assert!(output.starts_with("tool - A test tool"));
}

#[test]
fn handler_errors_propagate_unchanged() {
    let (result, output) = run(&test_registry(), &["broken"]);

    assert!(matches!(result, Err(CliError::AssetRead(ref m)) if m == "stub"));
    assert!(output.is_empty());
}

#[test]
fn duplicate_names_replace_in_place() {
    let mut registry = test_registry();
    registry.register_command(Command::new("remote", "Replaced").with_handler(echo));

    let names: Vec<&str> = registry.root().subcommands().iter().map(Command::name).collect();
    assert_eq!(names, vec!["remote", "broken"]);
    assert_eq!(
        registry.root().find_subcommand("remote").unwrap().metadata().description,
        "Replaced"
    );
    assert!(registry.root().find_subcommand("remote").unwrap().subcommands().is_empty());
}

#[test]
fn usage_lists_arguments_and_examples() {
    let command = Command::new("generate", "Writes things")
        .with_arg("directory", "Where to write", true)
        .with_arg("name", "Optional name", false)
        .with_example("tool generate .")
        .with_handler(echo);

    let usage = render_usage(&command, &["tool", "generate"], false);

    assert!(usage.contains("tool generate <directory> [name]"));
    assert!(usage.contains("<directory>  Where to write (required)"));
    assert!(usage.contains("<name>       Optional name (optional)"));
    assert!(usage.contains("Examples:\n  tool generate ."));
    assert!(!usage.contains("\x1b["));
}

#[test]
fn usage_is_styled_only_when_colored() {
    let registry = test_registry();

    let plain = render_usage(registry.root(), &["tool"], false);
    let colored = render_usage(registry.root(), &["tool"], true);

    assert!(!plain.contains(Colors::RESET));
    assert!(colored.contains(Colors::RESET));
    assert!(colored.contains("remote"));
}

#[test]
fn service_registers_builtin_commands() {
    let service = CliService::new(build_info());
    let mut out = Vec::new();

    service.execute(&[], &mut out, false).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("lintcfg - "));
    assert!(output.contains("generate  Creates the .golangci.yml in specified path."));
    assert!(output.contains("version   Prints the version of the program."));
}

#[test]
fn service_generate_without_directory_fails() {
    let service = CliService::new(build_info());
    let mut out = Vec::new();

    let err = service
        .execute(&args(&["generate"]), &mut out, false)
        .unwrap_err();

    let output = String::from_utf8(out).unwrap();
    assert!(matches!(err, CliError::MissingArgument(_)));
    assert_eq!(
        err.to_string(),
        "not enough arguments: path to the directory should be specified"
    );
    assert!(output.contains("lintcfg generate <directory>"));
}

#[test]
fn service_version_prints_build_metadata() {
    let service = CliService::new(build_info());
    let mut out = Vec::new();

    service.execute(&args(&["version"]), &mut out, false).unwrap();

    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Built from: main [abc123]");
    assert_eq!(lines[1], "Built on: 01 Jan 70 00:00 UTC");
    assert!(lines[2].starts_with("Built time: "));
    assert!(lines[2].ends_with(" +0000 UTC"));
}
