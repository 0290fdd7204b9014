//! `--config` and logging specs

use crate::prelude::*;

#[test]
fn group_depth_limit_comes_from_config() {
    let scratch = Scratch::new();
    let config = scratch.file("pbw.toml", "[decode]\nmax_group_depth = 1\n");
    // unknown field 9 holding a nested group two levels deep
    let input = "4b 4b 4c 4c";
    cli().args(&["decode", "params"]).stdin(input).passes();
    cli()
        .args(&["decode", "params", "--config", &config])
        .stdin(input)
        .fails_with(2)
        .stderr_has("group nesting exceeds limit of 1");
}

#[test]
fn unknown_config_keys_are_rejected() {
    let scratch = Scratch::new();
    let config = scratch.file("pbw.toml", "[decode]\nmax_depth = 3\n");
    cli()
        .args(&["inspect", "--config", &config])
        .stdin("")
        .fails_with(1)
        .stderr_has("invalid config");
}

#[test]
fn verbose_logs_to_stderr() {
    cli()
        .args(&["-v", "decode", "params"])
        .stdin("0a0161")
        .passes()
        .stdout_eq("&Params{ProjectId:a,}\n")
        .stderr_has("DEBUG");
}

#[test]
fn rust_log_overrides_verbose() {
    let out = cli()
        .env("RUST_LOG", "error")
        .args(&["-v", "decode", "params"])
        .stdin("0a0161")
        .passes();
    assert!(!out.stderr.contains("DEBUG"), "{}", out.stderr);
}
