// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pbw inspect`: list the raw fields of a buffer without a schema.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pbw_wire::{DecodeOptions, RawFields};

use crate::exit_error::ExitError;
use crate::input::read_buffer;
use crate::output::{print_fields, FieldEntry, OutputFormat};

#[derive(Args)]
pub struct InspectArgs {
    /// Input file (hex unless --raw); reads stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Input is raw bytes instead of hex
    #[arg(long)]
    pub raw: bool,

    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Collect every field, failing on the first malformed one.
pub fn inspect(buf: &[u8], options: &DecodeOptions) -> Result<Vec<FieldEntry>> {
    let mut entries = Vec::new();
    for field in RawFields::with_options(buf, *options) {
        let field = field.map_err(ExitError::decode)?;
        entries.push(FieldEntry::from(&field));
    }
    Ok(entries)
}

pub fn handle(args: InspectArgs, options: &DecodeOptions) -> Result<()> {
    let buf = read_buffer(args.file.as_deref(), args.raw)?;
    let entries = inspect(&buf, options)?;
    print_fields(&entries, args.output)
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
