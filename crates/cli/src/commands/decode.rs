// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pbw decode`: decode a buffer as a known message shape.

use std::fmt::Display;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pbw_wire::{DecodeOptions, Edge, Message, Params};
use serde::Serialize;

use super::MessageKind;
use crate::exit_error::ExitError;
use crate::input::read_buffer;
use crate::output::{print_message, OutputFormat};

#[derive(Args)]
pub struct DecodeArgs {
    /// Message shape to decode as
    #[arg(value_enum)]
    pub message: MessageKind,

    /// Input file (hex unless --raw); reads stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Input is raw bytes instead of hex
    #[arg(long)]
    pub raw: bool,

    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Decode `buf` as `M`, turning codec failures into a decode exit code.
pub fn decode<M: Message>(buf: &[u8], options: &DecodeOptions) -> Result<M> {
    tracing::debug!(kind = M::NAME, len = buf.len(), "decoding");
    Ok(M::unmarshal_with(buf, options).map_err(ExitError::decode)?)
}

fn decode_and_print<M: Message + Display + Serialize>(
    buf: &[u8],
    options: &DecodeOptions,
    format: OutputFormat,
) -> Result<()> {
    let msg = decode::<M>(buf, options)?;
    print_message(&msg, format)
}

pub fn handle(args: DecodeArgs, options: &DecodeOptions) -> Result<()> {
    let buf = read_buffer(args.file.as_deref(), args.raw)?;
    match args.message {
        MessageKind::Params => decode_and_print::<Params>(&buf, options, args.output),
        MessageKind::Edge => decode_and_print::<Edge>(&buf, options, args.output),
    }
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
