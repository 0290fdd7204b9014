// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading encoded buffers from files or stdin, and writing them back out.
//!
//! Buffers travel as hex text by default so they survive a terminal;
//! `--raw` switches to the bytes themselves.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Read a buffer from `path`, or stdin when `path` is absent or `-`.
pub fn read_buffer(path: Option<&Path>, raw: bool) -> Result<Vec<u8>> {
    let bytes = match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read(p).with_context(|| format!("failed to read {}", p.display()))?
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).context("failed to read stdin")?;
            buf
        }
    };
    if raw {
        return Ok(bytes);
    }
    let text = String::from_utf8(bytes).context("hex input is not text")?;
    parse_hex(&text)
}

/// Decode hex text, ignoring whitespace and an optional `0x` prefix.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.split_whitespace().collect();
    let digits = compact.strip_prefix("0x").unwrap_or(&compact);
    hex::decode(digits).context("invalid hex input")
}

/// Write `bytes` to stdout as hex (with a trailing newline) or raw.
pub fn write_buffer(bytes: &[u8], raw: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if raw {
        out.write_all(bytes)?;
    } else {
        writeln!(out, "{}", hex::encode(bytes))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
