// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schema-less view of a buffer, one (tag, payload) unit at a time.

use crate::decoder::{DecodeOptions, Decoder};
use crate::error::DecodeError;
use crate::tag::{Tag, WireType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValue<'a> {
    Varint(u64),
    Fixed64(u64),
    LengthDelimited(&'a [u8]),
    /// Body of a group, up to and including its end-group tag.
    Group(&'a [u8]),
    Fixed32(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawField<'a> {
    pub tag: Tag,
    /// Offset of the tag within the buffer.
    pub offset: usize,
    pub value: RawValue<'a>,
}

/// Iterator over the fields of a buffer. Stops after the first error.
pub struct RawFields<'a> {
    buf: &'a [u8],
    dec: Decoder<'a>,
    failed: bool,
}

impl<'a> RawFields<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_options(buf, DecodeOptions::default())
    }

    pub fn with_options(buf: &'a [u8], options: DecodeOptions) -> Self {
        Self { buf, dec: Decoder::with_options(buf, options), failed: false }
    }

    fn read_field(&mut self) -> Result<RawField<'a>, DecodeError> {
        let offset = self.dec.position();
        let tag = self.dec.read_tag()?;
        let value = match tag.kind()? {
            WireType::Varint => RawValue::Varint(self.dec.read_varint()?),
            WireType::Fixed64 => RawValue::Fixed64(self.dec.read_fixed64()?),
            WireType::Fixed32 => RawValue::Fixed32(self.dec.read_fixed32()?),
            WireType::LengthDelimited => RawValue::LengthDelimited(self.dec.read_length_delimited()?),
            WireType::StartGroup | WireType::EndGroup => {
                let start = self.dec.position();
                let len = self.dec.skip(tag)?;
                RawValue::Group(&self.buf[start..start + len])
            }
        };
        Ok(RawField { tag, offset, value })
    }
}

impl<'a> Iterator for RawFields<'a> {
    type Item = Result<RawField<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.dec.is_eof() {
            return None;
        }
        let field = self.read_field();
        self.failed = field.is_err();
        Some(field)
    }
}

#[cfg(test)]
#[path = "raw_tests.rs"]
mod tests;
