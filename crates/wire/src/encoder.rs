// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Writing fields into a pre-sized buffer.
//!
//! Every `put_*` method omits the field when it holds its default value, and
//! every `*_size` helper returns 0 in the same case, so a message's
//! `encoded_len` and `encode_fields` stay in lockstep when built from the
//! matching pair.

use crate::error::EncodeError;
use crate::tag::{Tag, WireType};
use crate::varint::{encode_varint, varint_size, zigzag_encode, zigzag_size};

/// Cursor over a caller-owned output buffer.
pub struct Encoder<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Encoder<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn put_tag(&mut self, field_number: u32, wire_type: WireType) -> Result<(), EncodeError> {
        self.put_varint(Tag::new(field_number, wire_type).key())
    }

    pub fn put_varint(&mut self, value: u64) -> Result<(), EncodeError> {
        self.pos += encode_varint(&mut self.buf[self.pos..], value)?;
        Ok(())
    }

    pub fn put_raw(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        let available = self.remaining();
        if bytes.len() > available {
            return Err(EncodeError::BufferTooSmall { needed: bytes.len(), available });
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    pub fn put_bytes(&mut self, field_number: u32, value: &[u8]) -> Result<(), EncodeError> {
        if value.is_empty() {
            return Ok(());
        }
        self.put_tag(field_number, WireType::LengthDelimited)?;
        self.put_varint(value.len() as u64)?;
        self.put_raw(value)
    }

    pub fn put_string(&mut self, field_number: u32, value: &str) -> Result<(), EncodeError> {
        self.put_bytes(field_number, value.as_bytes())
    }

    pub fn put_uint64(&mut self, field_number: u32, value: u64) -> Result<(), EncodeError> {
        if value == 0 {
            return Ok(());
        }
        self.put_tag(field_number, WireType::Varint)?;
        self.put_varint(value)
    }

    /// Negative values take the full ten bytes, as with any standard encoder.
    pub fn put_int64(&mut self, field_number: u32, value: i64) -> Result<(), EncodeError> {
        self.put_uint64(field_number, value as u64)
    }

    pub fn put_sint64(&mut self, field_number: u32, value: i64) -> Result<(), EncodeError> {
        self.put_uint64(field_number, zigzag_encode(value))
    }

    pub fn put_bool(&mut self, field_number: u32, value: bool) -> Result<(), EncodeError> {
        self.put_uint64(field_number, u64::from(value))
    }

    pub fn put_fixed32(&mut self, field_number: u32, value: u32) -> Result<(), EncodeError> {
        if value == 0 {
            return Ok(());
        }
        self.put_tag(field_number, WireType::Fixed32)?;
        self.put_raw(&value.to_le_bytes())
    }

    pub fn put_fixed64(&mut self, field_number: u32, value: u64) -> Result<(), EncodeError> {
        if value == 0 {
            return Ok(());
        }
        self.put_tag(field_number, WireType::Fixed64)?;
        self.put_raw(&value.to_le_bytes())
    }
}

fn tag_size(field_number: u32, wire_type: WireType) -> usize {
    Tag::new(field_number, wire_type).encoded_len()
}

/// Size of a string or bytes field holding `len` bytes.
pub fn len_delimited_size(field_number: u32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    tag_size(field_number, WireType::LengthDelimited) + varint_size(len as u64) + len
}

pub fn varint_field_size(field_number: u32, value: u64) -> usize {
    if value == 0 {
        return 0;
    }
    tag_size(field_number, WireType::Varint) + varint_size(value)
}

pub fn int64_field_size(field_number: u32, value: i64) -> usize {
    varint_field_size(field_number, value as u64)
}

pub fn sint64_field_size(field_number: u32, value: i64) -> usize {
    if value == 0 {
        return 0;
    }
    tag_size(field_number, WireType::Varint) + zigzag_size(value)
}

pub fn bool_field_size(field_number: u32, value: bool) -> usize {
    varint_field_size(field_number, u64::from(value))
}

pub fn fixed32_field_size(field_number: u32, value: u32) -> usize {
    if value == 0 {
        return 0;
    }
    tag_size(field_number, WireType::Fixed32) + 4
}

pub fn fixed64_field_size(field_number: u32, value: u64) -> usize {
    if value == 0 {
        return 0;
    }
    tag_size(field_number, WireType::Fixed64) + 8
}

#[cfg(test)]
#[path = "encoder_tests.rs"]
mod tests;
