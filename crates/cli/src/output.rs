// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt::Display;

use clap::ValueEnum;
use pbw_wire::{RawField, RawValue};
use serde::Serialize;

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a decoded message as its debug rendering or as JSON.
pub fn print_message<M: Display + Serialize>(msg: &M, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", msg),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(msg)?),
    }
    Ok(())
}

/// One raw field in JSON output.
#[derive(Debug, Serialize, PartialEq)]
pub struct FieldEntry {
    pub offset: usize,
    pub field: u32,
    pub wire_type: String,
    pub value: String,
}

impl From<&RawField<'_>> for FieldEntry {
    fn from(f: &RawField<'_>) -> Self {
        let wire_type = f.tag.kind().map_or_else(|_| f.tag.wire_type.to_string(), |k| k.to_string());
        Self {
            offset: f.offset,
            field: f.tag.field_number,
            wire_type,
            value: format_value(&f.value),
        }
    }
}

/// Render a payload: numbers in decimal, printable text quoted, other
/// bytes as hex.
pub fn format_value(value: &RawValue<'_>) -> String {
    match value {
        RawValue::Varint(v) | RawValue::Fixed64(v) => v.to_string(),
        RawValue::Fixed32(v) => v.to_string(),
        RawValue::LengthDelimited(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) if !s.chars().any(char::is_control) => format!("{:?}", s),
            _ => hex::encode(bytes),
        },
        RawValue::Group(body) => format!("group[{}]", hex::encode(body)),
    }
}

/// Text line for one field: offset, field number, wire type, value.
pub fn format_field_line(entry: &FieldEntry) -> String {
    format!("{:>6}  {:>5}  {:<11}  {}", entry.offset, entry.field, entry.wire_type, entry.value)
}

/// Column titles matching [`format_field_line`].
pub fn format_header() -> String {
    format!("{:>6}  {:>5}  {:<11}  {}", "OFFSET", "FIELD", "WIRE TYPE", "VALUE")
}

pub fn print_fields(entries: &[FieldEntry], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if !entries.is_empty() {
                println!("{}", color::context(&format_header()));
            }
            for entry in entries {
                println!("{}", format_field_line(entry));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entries)?),
    }
    Ok(())
}
