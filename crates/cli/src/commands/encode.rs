// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pbw encode`: build a message from flags and print its encoding.

use anyhow::Result;
use clap::{Args, Subcommand};
use pbw_wire::{Edge, Message, Params};

use crate::input::write_buffer;

#[derive(Args)]
pub struct EncodeArgs {
    /// Write raw bytes instead of hex
    #[arg(long, global = true)]
    pub raw: bool,

    #[command(subcommand)]
    pub command: EncodeCommand,
}

#[derive(Subcommand)]
pub enum EncodeCommand {
    /// Encode context graph adapter parameters
    Params {
        /// Cloud project the context graph is written to
        #[arg(long, default_value = "")]
        project_id: String,
    },
    /// Encode a mesh graph edge
    Edge {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        source: String,
        #[arg(long, default_value = "")]
        destination: String,
    },
}

pub fn encode(command: EncodeCommand) -> Result<Vec<u8>> {
    let bytes = match command {
        EncodeCommand::Params { project_id } => Params::new(project_id).marshal()?,
        EncodeCommand::Edge { name, source, destination } => {
            Edge { name, source, destination }.marshal()?
        }
    };
    tracing::debug!(len = bytes.len(), "encoded message");
    Ok(bytes)
}

pub fn handle(args: EncodeArgs) -> Result<()> {
    let bytes = encode(args.command)?;
    write_buffer(&bytes, args.raw)
}

#[cfg(test)]
#[path = "encode_tests.rs"]
mod tests;
