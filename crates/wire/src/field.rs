// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Static field descriptors and decoded field payloads.

use crate::error::DecodeError;
use crate::tag::{Tag, WireType};
use crate::varint::zigzag_decode;

/// Semantic type of a field. Each kind has exactly one wire type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Bytes,
    Uint64,
    Int64,
    /// Signed integer, zig-zag mapped before varint encoding.
    Sint64,
    Bool,
    Fixed32,
    Fixed64,
}

impl FieldKind {
    pub const fn wire_type(self) -> WireType {
        match self {
            FieldKind::String | FieldKind::Bytes => WireType::LengthDelimited,
            FieldKind::Uint64 | FieldKind::Int64 | FieldKind::Sint64 | FieldKind::Bool => {
                WireType::Varint
            }
            FieldKind::Fixed32 => WireType::Fixed32,
            FieldKind::Fixed64 => WireType::Fixed64,
        }
    }
}

crate::simple_display! {
    FieldKind {
        String => "string",
        Bytes => "bytes",
        Uint64 => "uint64",
        Int64 => "int64",
        Sint64 => "sint64",
        Bool => "bool",
        Fixed32 => "fixed32",
        Fixed64 => "fixed64",
    }
}

/// Compile-time description of one field of a message shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub number: u32,
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn new(number: u32, name: &'static str, kind: FieldKind) -> Self {
        Self { number, name, kind }
    }

    pub const fn wire_type(&self) -> WireType {
        self.kind.wire_type()
    }

    pub const fn tag(&self) -> Tag {
        Tag::new(self.number, self.kind.wire_type())
    }
}

/// Find the descriptor for `number` in a table sorted by field number.
pub fn lookup(fields: &'static [FieldDescriptor], number: u32) -> Option<&'static FieldDescriptor> {
    fields
        .binary_search_by_key(&number, |f| f.number)
        .ok()
        .map(|i| &fields[i])
}

/// A field payload as read off the wire, before conversion to its Rust type.
///
/// Length-delimited payloads borrow from the buffer being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Varint(u64),
    Fixed64(u64),
    Fixed32(u32),
    LengthDelimited(&'a [u8]),
}

impl<'a> FieldValue<'a> {
    pub fn into_string(self, field: &FieldDescriptor) -> Result<String, DecodeError> {
        let bytes = self.into_bytes(field)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8 { field: field.name })
    }

    pub fn into_bytes(self, field: &FieldDescriptor) -> Result<&'a [u8], DecodeError> {
        match self {
            FieldValue::LengthDelimited(bytes) => Ok(bytes),
            other => Err(other.mismatch(field)),
        }
    }

    pub fn into_u64(self, field: &FieldDescriptor) -> Result<u64, DecodeError> {
        match self {
            FieldValue::Varint(v) | FieldValue::Fixed64(v) => Ok(v),
            FieldValue::Fixed32(v) => Ok(u64::from(v)),
            other => Err(other.mismatch(field)),
        }
    }

    pub fn into_i64(self, field: &FieldDescriptor) -> Result<i64, DecodeError> {
        let raw = self.into_u64(field)?;
        Ok(match field.kind {
            FieldKind::Sint64 => zigzag_decode(raw),
            _ => raw as i64,
        })
    }

    pub fn into_u32(self, field: &FieldDescriptor) -> Result<u32, DecodeError> {
        match self {
            FieldValue::Fixed32(v) => Ok(v),
            other => Err(other.mismatch(field)),
        }
    }

    pub fn into_bool(self, field: &FieldDescriptor) -> Result<bool, DecodeError> {
        Ok(self.into_u64(field)? != 0)
    }

    pub fn wire_type(&self) -> WireType {
        match self {
            FieldValue::Varint(_) => WireType::Varint,
            FieldValue::Fixed64(_) => WireType::Fixed64,
            FieldValue::Fixed32(_) => WireType::Fixed32,
            FieldValue::LengthDelimited(_) => WireType::LengthDelimited,
        }
    }

    fn mismatch(&self, field: &FieldDescriptor) -> DecodeError {
        DecodeError::WireTypeMismatch {
            field: field.name,
            expected: field.wire_type().as_u8(),
            found: self.wire_type().as_u8(),
        }
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
