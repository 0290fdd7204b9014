// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tag/varint wire codec for flat messages.
//!
//! Wire format: concatenated `(tag, payload)` units with no framing, where a
//! tag is the varint `field_number << 3 | wire_type`. Bit-compatible with
//! protocol buffers for scalar and string fields.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod macros;

mod decoder;
mod edge;
mod encoder;
mod error;
mod field;
mod message;
mod params;
mod raw;
mod skip;
mod tag;
pub mod varint;

pub use decoder::{DecodeOptions, Decoder, DEFAULT_MAX_GROUP_DEPTH};
pub use edge::Edge;
pub use encoder::{
    bool_field_size, fixed32_field_size, fixed64_field_size, int64_field_size, len_delimited_size,
    sint64_field_size, varint_field_size, Encoder,
};
pub use error::{DecodeError, EncodeError};
pub use field::{lookup, FieldDescriptor, FieldKind, FieldValue};
pub use message::{Maybe, Message};
pub use params::Params;
pub use raw::{RawField, RawFields, RawValue};
pub use skip::skip_field;
pub use tag::{Tag, WireType, MAX_FIELD_NUMBER};

#[cfg(test)]
mod test_support;
