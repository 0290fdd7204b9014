//! CLI help output specs

use crate::prelude::*;

#[test]
fn pbw_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn pbw_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("encode")
        .stdout_has("decode")
        .stdout_has("inspect");
}

#[test]
fn pbw_encode_help_shows_messages() {
    cli().args(&["encode", "--help"]).passes().stdout_has("params").stdout_has("edge");
}

#[test]
fn pbw_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn pbw_unknown_command_is_usage_error() {
    cli().args(&["transcode"]).fails_with(1).stderr_has("Usage:");
}
