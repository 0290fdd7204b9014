// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Codec error types.

use thiserror::Error;

/// Errors produced while decoding a buffer.
///
/// Every variant is a deterministic property of the input bytes; none of
/// them are worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A varint ran past 64 bits without terminating.
    #[error("integer overflow: varint exceeds 64 bits")]
    IntegerOverflow,

    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A declared length does not fit in a signed 64-bit quantity.
    #[error("invalid length: negative length found during unmarshaling")]
    InvalidLength,

    #[error("illegal tag: field {field_number} (wire type {wire_type})")]
    MalformedTag { field_number: u64, wire_type: u8 },

    #[error("wrong wire type {found} for field {field} (expected {expected})")]
    WireTypeMismatch { field: &'static str, expected: u8, found: u8 },

    #[error("illegal wire type {0}")]
    UnknownWireType(u8),

    /// An end-group tag closed a different group than the one open.
    #[error("end group for field {found} does not close group {expected}")]
    UnmatchedEndGroup { expected: u32, found: u32 },

    #[error("group nesting exceeds limit of {limit}")]
    GroupTooDeep { limit: usize },

    #[error("field {field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },
}

/// Errors produced while encoding into a caller-owned sink.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// The message wrote a different number of bytes than it reported
    /// from `encoded_len`.
    #[error("size mismatch: encoded_len reported {expected}, wrote {written}")]
    SizeMismatch { expected: usize, written: usize },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
