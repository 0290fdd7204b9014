// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod decode;
pub mod encode;
pub mod inspect;

use clap::ValueEnum;

/// Message shapes the CLI knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MessageKind {
    /// Context graph adapter parameters
    Params,
    /// Mesh graph edge instance
    Edge,
}
