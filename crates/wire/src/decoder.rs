// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cursor-driven decoding of a message buffer.
//!
//! The buffer carries no framing of its own: decoding runs until the cursor
//! lands exactly on the end. No read ever looks past the unit being decoded.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::field::{self, FieldValue};
use crate::message::Message;
use crate::skip::{advance, length_delimited, skip_field};
use crate::tag::{Tag, WireType};
use crate::varint::decode_varint;

/// Default cap on nested groups inside an unknown field.
pub const DEFAULT_MAX_GROUP_DEPTH: usize = 100;

/// Tunables for decoding untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeOptions {
    /// Deepest group nesting accepted while skipping unknown fields.
    pub max_group_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { max_group_depth: DEFAULT_MAX_GROUP_DEPTH }
    }
}

pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
    options: DecodeOptions,
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_options(buf, DecodeOptions::default())
    }

    pub fn with_options(buf: &'a [u8], options: DecodeOptions) -> Self {
        Self { buf, pos: 0, options }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Read the next field tag, rejecting field number zero and stray
    /// end-group markers.
    pub fn read_tag(&mut self) -> Result<Tag, DecodeError> {
        let (tag, next) = Tag::decode(self.buf, self.pos)?;
        self.pos = next;
        tag.validate()
    }

    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let (value, next) = decode_varint(self.buf, self.pos)?;
        self.pos = next;
        Ok(value)
    }

    /// Read a length prefix and return the payload it covers.
    pub fn read_length_delimited(&mut self) -> Result<&'a [u8], DecodeError> {
        let (start, end) = length_delimited(self.buf, self.pos)?;
        self.pos = end;
        Ok(&self.buf[start..end])
    }

    pub fn read_fixed32(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.take::<4>()?;
        Ok(u32::from_le_bytes(bytes))
    }

    pub fn read_fixed64(&mut self) -> Result<u64, DecodeError> {
        let bytes = self.take::<8>()?;
        Ok(u64::from_le_bytes(bytes))
    }

    /// Read the payload of a field with a non-group wire type.
    pub fn read_value(&mut self, wire_type: WireType) -> Result<FieldValue<'a>, DecodeError> {
        match wire_type {
            WireType::Varint => self.read_varint().map(FieldValue::Varint),
            WireType::Fixed64 => self.read_fixed64().map(FieldValue::Fixed64),
            WireType::Fixed32 => self.read_fixed32().map(FieldValue::Fixed32),
            WireType::LengthDelimited => self.read_length_delimited().map(FieldValue::LengthDelimited),
            WireType::StartGroup | WireType::EndGroup => {
                Err(DecodeError::UnknownWireType(wire_type.as_u8()))
            }
        }
    }

    /// Step over the payload of `tag`, returning the bytes skipped.
    pub fn skip(&mut self, tag: Tag) -> Result<usize, DecodeError> {
        let skipped = skip_field(self.buf, self.pos, tag, self.options.max_group_depth)?;
        self.pos += skipped;
        Ok(skipped)
    }

    /// Decode every remaining field into `msg`.
    ///
    /// Known fields must arrive with their declared wire type; unknown ones
    /// are skipped and dropped. On error `msg` may hold fields assigned
    /// before the failure.
    pub fn decode_into<M: Message>(&mut self, msg: &mut M) -> Result<(), DecodeError> {
        while !self.is_eof() {
            let tag = self.read_tag()?;
            let Some(field) = field::lookup(M::FIELDS, tag.field_number) else {
                let skipped = self.skip(tag)?;
                tracing::trace!(
                    kind = M::NAME,
                    field_number = tag.field_number,
                    wire_type = tag.wire_type,
                    skipped,
                    "skipping unknown field"
                );
                continue;
            };

            let expected = field.wire_type();
            if tag.wire_type != expected.as_u8() {
                return Err(DecodeError::WireTypeMismatch {
                    field: field.name,
                    expected: expected.as_u8(),
                    found: tag.wire_type,
                });
            }
            let value = self.read_value(expected)?;
            msg.merge_field(field, value)?;
        }

        if self.pos > self.buf.len() {
            return Err(DecodeError::UnexpectedEof);
        }
        Ok(())
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let end = advance(self.buf, self.pos, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[self.pos..end]);
        self.pos = end;
        Ok(out)
    }
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
