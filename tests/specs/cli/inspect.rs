//! `pbw inspect` specs

use crate::prelude::*;

#[test]
fn lists_fields_in_order() {
    cli()
        .args(&["inspect"])
        .stdin("10ac02 0a03666f6f")
        .passes()
        .stdout_has("OFFSET")
        .stdout_has("     0      2  varint       300\n")
        .stdout_has("     3      1  bytes        \"foo\"\n");
}

#[test]
fn shows_groups_whole() {
    // field 3 group holding field 1 varint 1
    cli().args(&["inspect"]).stdin("1b 0801 1c").passes().stdout_has("group[08011c]");
}

#[test]
fn empty_input_prints_nothing() {
    cli().args(&["inspect"]).stdin("").passes().stdout_eq("");
}

#[test]
fn json_output() {
    let out = cli().args(&["inspect", "-o", "json"]).stdin("0d01000000").passes();
    let json = out.stdout_json();
    assert_eq!(json[0]["field"], 1);
    assert_eq!(json[0]["wire_type"], "fixed32");
    assert_eq!(json[0]["value"], "1");
}

#[test]
fn unmatched_end_group_fails() {
    cli().args(&["inspect"]).stdin("1b 24").fails_with(2).stderr_has("does not close group 3");
}
