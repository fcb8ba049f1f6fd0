//! Tests for the get subcommand.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_get_defaults() {
    match parse(&["glfetch", "get", "123456", "path/to/file.txt"]) {
        CliCommand::Get {
            project_id,
            file_path,
            git_ref,
            output,
        } => {
            assert_eq!(project_id, "123456");
            assert_eq!(file_path, "path/to/file.txt");
            assert_eq!(git_ref, "main");
            assert!(output.is_none());
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_ref_and_output() {
    match parse(&[
        "glfetch",
        "get",
        "group/project",
        "schema.json",
        "--ref",
        "v1.4.0",
        "-o",
        "build/schema.json",
    ]) {
        CliCommand::Get {
            project_id,
            git_ref,
            output,
            ..
        } => {
            assert_eq!(project_id, "group/project");
            assert_eq!(git_ref, "v1.4.0");
            assert_eq!(output.as_deref(), Some(Path::new("build/schema.json")));
        }
        _ => panic!("expected Get with --ref and -o"),
    }
}

#[test]
fn cli_parse_get_long_output() {
    match parse(&["glfetch", "get", "1", "a.txt", "--output", "b.txt"]) {
        CliCommand::Get { output, .. } => {
            assert_eq!(output.as_deref(), Some(Path::new("b.txt")));
        }
        _ => panic!("expected Get with --output"),
    }
}

#[test]
fn cli_parse_get_requires_file_path() {
    assert!(crate::cli::Cli::try_parse_from(["glfetch", "get", "123456"]).is_err());
}
