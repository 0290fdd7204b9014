// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

/// Exit code for every failure other than a decode failure, including
/// command-line usage errors.
pub const FAILED: i32 = 1;

/// Exit code for input that fails to decode.
pub const DECODE_FAILED: i32 = 2;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn decode(err: pbw_wire::DecodeError) -> Self {
        Self::new(DECODE_FAILED, format!("decode failed: {}", err))
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Exit code for an error returned from a command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ExitError>().map_or(FAILED, |e| e.code)
}

/// Exit code for a command line clap could not turn into a command.
///
/// `--help` and `--version` surface as clap errors that print to stdout and
/// succeed; every real usage error maps to [`FAILED`] so that
/// [`DECODE_FAILED`] stays unambiguous.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        FAILED
    } else {
        0
    }
}
