//! `pbw encode` specs

use crate::prelude::*;

#[test]
fn encodes_params_as_hex() {
    cli().args(&["encode", "params", "--project-id", "hello"]).passes().stdout_eq("0a0568656c6c6f\n");
}

#[test]
fn empty_params_encode_to_nothing() {
    cli().args(&["encode", "params"]).passes().stdout_eq("\n");
}

#[test]
fn encodes_edge_in_field_order() {
    cli()
        .args(&["encode", "edge", "--name", "e", "--source", "a", "--destination", "b"])
        .passes()
        .stdout_eq("0a0165120161 1a0162\n".replace(' ', "").as_str());
}

#[test]
fn raw_writes_bytes() {
    let out = cli().args(&["encode", "--raw", "params", "--project-id", "x"]).passes();
    assert_eq!(out.stdout_bytes, [0x0a, 0x01, b'x']);
}

#[test]
fn long_project_id_uses_multi_byte_length() {
    let id = "p".repeat(200);
    let out = cli().args(&["encode", "params", "--project-id", &id]).passes();
    assert!(out.stdout.starts_with("0ac801"), "{}", out.stdout);
}
