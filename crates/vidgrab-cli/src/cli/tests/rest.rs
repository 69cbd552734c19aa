//! Tests for options, check, config and completions subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;
use vidgrab_core::OutputFormat;

#[test]
fn cli_parse_options() {
    match parse(&["vidgrab-cli", "options", "--format", "webm"]) {
        CliCommand::Options { selection } => {
            assert_eq!(selection.format, Some(OutputFormat::Webm));
            assert!(selection.quality.is_none());
        }
        _ => panic!("expected Options"),
    }
}

#[test]
fn cli_parse_check() {
    match parse(&["vidgrab-cli", "check"]) {
        CliCommand::Check => {}
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["vidgrab-cli", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["vidgrab-cli", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}
