//! Tests for the download subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;
use vidgrab_core::{OutputFormat, Quality};

#[test]
fn cli_parse_download_defaults() {
    match parse(&["vidgrab-cli", "download", "https://youtu.be/abc"]) {
        CliCommand::Download { url, selection } => {
            assert_eq!(url, "https://youtu.be/abc");
            assert!(selection.dir.is_none());
            assert!(selection.name.is_none());
            assert!(selection.format.is_none());
            assert!(selection.quality.is_none());
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_download_all_flags() {
    match parse(&[
        "vidgrab-cli",
        "download",
        "https://youtu.be/abc",
        "--dir",
        "/tmp",
        "--name",
        "talk",
        "--format",
        "mkv",
        "--quality",
        "480p",
    ]) {
        CliCommand::Download { url, selection } => {
            assert_eq!(url, "https://youtu.be/abc");
            assert_eq!(selection.dir.as_deref(), Some(Path::new("/tmp")));
            assert_eq!(selection.name.as_deref(), Some("talk"));
            assert_eq!(selection.format, Some(OutputFormat::Mkv));
            assert_eq!(selection.quality, Some(Quality::P480));
        }
        _ => panic!("expected Download with flags"),
    }
}

#[test]
fn cli_parse_download_short_flags_and_labels() {
    match parse(&[
        "vidgrab-cli",
        "download",
        "u",
        "-f",
        "mp3 (audio only)",
        "-q",
        "Audio only",
    ]) {
        CliCommand::Download { selection, .. } => {
            assert_eq!(selection.format, Some(OutputFormat::Mp3));
            assert_eq!(selection.quality, Some(Quality::AudioOnly));
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_download_rejects_unknown_quality() {
    let res = Cli::try_parse_from(["vidgrab-cli", "download", "u", "--quality", "4k"]);
    assert!(res.is_err());
}

#[test]
fn cli_parse_download_requires_url() {
    assert!(Cli::try_parse_from(["vidgrab-cli", "download"]).is_err());
}
