//! `pbw decode` specs

use crate::prelude::*;

#[test]
fn decodes_params_from_stdin() {
    cli()
        .args(&["decode", "params"])
        .stdin("0a03666f6f\n")
        .passes()
        .stdout_eq("&Params{ProjectId:foo,}\n");
}

#[test]
fn empty_input_decodes_to_defaults() {
    cli().args(&["decode", "params"]).stdin("").passes().stdout_eq("&Params{ProjectId:,}\n");
}

#[test]
fn skips_unknown_fields() {
    // field 2 varint 300, then field 1 "foo"
    cli()
        .args(&["decode", "params"])
        .stdin("10ac02 0a03666f6f")
        .passes()
        .stdout_eq("&Params{ProjectId:foo,}\n");
}

#[test]
fn later_occurrence_wins() {
    cli()
        .args(&["decode", "params"])
        .stdin("0a0161 0a0162")
        .passes()
        .stdout_has("ProjectId:b,");
}

#[test]
fn decodes_edge_as_json() {
    let out = cli()
        .args(&["decode", "edge", "-o", "json"])
        .stdin("0a0165 120161 1a0162")
        .passes();
    let json = out.stdout_json();
    assert_eq!(json["name"], "e");
    assert_eq!(json["source"], "a");
    assert_eq!(json["destination"], "b");
}

#[test]
fn decodes_raw_file() {
    let scratch = Scratch::new();
    let path = scratch.file("params.bin", [0x0a, 0x02, b'h', b'i']);
    cli().args(&["decode", "params", &path, "--raw"]).passes().stdout_has("ProjectId:hi,");
}

#[test]
fn truncated_input_exits_with_decode_failure() {
    cli()
        .args(&["decode", "params"])
        .stdin("0a0561")
        .fails_with(2)
        .stderr_has("unexpected end of input");
}

#[test]
fn wrong_wire_type_exits_with_decode_failure() {
    cli().args(&["decode", "params"]).stdin("0801").fails_with(2).stderr_has("wrong wire type");
}

#[test]
fn field_zero_is_illegal() {
    cli().args(&["decode", "params"]).stdin("0001").fails_with(2).stderr_has("illegal tag");
}

#[test]
fn overlong_varint_overflows() {
    cli()
        .args(&["decode", "params"])
        .stdin("10ffffffffffffffffffff01")
        .fails_with(2)
        .stderr_has("integer overflow");
}

#[test]
fn invalid_hex_is_a_general_error() {
    cli().args(&["decode", "params"]).stdin("zz").fails_with(1).stderr_has("error:");
}

#[test]
fn missing_file_is_a_general_error() {
    cli().args(&["decode", "params", "/nonexistent/pbw/input.hex"]).fails_with(1);
}

#[test]
fn unknown_message_is_a_usage_error_not_a_decode_failure() {
    cli().args(&["decode", "widget"]).stdin("").fails_with(1).stderr_has("Usage:");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    cli().args(&["decode", "params", "--bogus"]).stdin("").fails_with(1).stderr_has("--bogus");
}

#[test]
fn field_number_wider_than_u32_is_reported_in_full() {
    // key 1 << 40: field 2^37, wire type 0
    cli()
        .args(&["decode", "params"])
        .stdin("80808080808001")
        .fails_with(2)
        .stderr_has("illegal tag: field 137438953472");
}
