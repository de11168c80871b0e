//! CLI argument parsing tests.

use clap::error::ErrorKind;
use clap::Parser;
use repartee::cli::{Cli, Command};

#[test]
fn test_cli_parses_diff_subcommand() {
    let cli = Cli::parse_from(["repartee", "diff", "--district", "5327a245c56e2a010000001a"]);

    match cli.command {
        Some(Command::Diff(args)) => {
            assert_eq!(args.district, "5327a245c56e2a010000001a");
            assert!(!args.json);
        }
        _ => panic!("Expected Diff command"),
    }
}

#[test]
fn test_diff_json_flag() {
    let cli = Cli::parse_from(["repartee", "diff", "--json", "--district", "d1"]);

    match cli.command {
        Some(Command::Diff(args)) => {
            assert_eq!(args.district, "d1");
            assert!(args.json);
        }
        _ => panic!("Expected Diff command"),
    }
}

#[test]
fn test_diff_requires_district() {
    let err = Cli::try_parse_from(["repartee", "diff"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    let err = Cli::try_parse_from(["repartee", "frobnicate"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
}

#[test]
fn test_version_subcommand() {
    let cli = Cli::parse_from(["repartee", "version"]);
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_bare_invocation_has_no_command() {
    let cli = Cli::parse_from(["repartee"]);
    assert!(cli.command.is_none());
}

#[test]
fn test_help_lists_subcommands() {
    let err = Cli::try_parse_from(["repartee", "help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);

    let help = err.to_string();
    assert!(help.contains("diff"));
    assert!(help.contains("version"));
}
