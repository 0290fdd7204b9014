// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field tags: `field_number << 3 | wire_type`, varint encoded.

use crate::error::{DecodeError, EncodeError};
use crate::varint::{decode_varint, encode_varint, varint_size};

/// Largest field number the wire format allows.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// How the payload following a tag is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl WireType {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for WireType {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            3 => Ok(WireType::StartGroup),
            4 => Ok(WireType::EndGroup),
            5 => Ok(WireType::Fixed32),
            other => Err(DecodeError::UnknownWireType(other)),
        }
    }
}

crate::simple_display! {
    WireType {
        Varint => "varint",
        Fixed64 => "fixed64",
        LengthDelimited => "bytes",
        StartGroup => "start_group",
        EndGroup => "end_group",
        Fixed32 => "fixed32",
    }
}

/// A decoded tag.
///
/// The wire type is kept raw: values 6 and 7 are representable on the wire
/// and only become errors once something tries to interpret the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub field_number: u32,
    pub wire_type: u8,
}

impl Tag {
    pub const fn new(field_number: u32, wire_type: WireType) -> Self {
        Self { field_number, wire_type: wire_type as u8 }
    }

    /// The packed integer written to the wire.
    pub const fn key(self) -> u64 {
        ((self.field_number as u64) << 3) | (self.wire_type as u64 & 0x7)
    }

    pub fn kind(self) -> Result<WireType, DecodeError> {
        WireType::try_from(self.wire_type)
    }

    pub fn encoded_len(self) -> usize {
        varint_size(self.key())
    }

    pub fn encode(self, buf: &mut [u8]) -> Result<usize, EncodeError> {
        encode_varint(buf, self.key())
    }

    /// Read a tag at `pos` without validating it.
    ///
    /// Only a field number too wide for `u32` is rejected here; every other
    /// check waits for [`Tag::validate`].
    pub fn decode(buf: &[u8], pos: usize) -> Result<(Tag, usize), DecodeError> {
        let (key, next) = decode_varint(buf, pos)?;
        let wire_type = (key & 0x7) as u8;
        let field_number = u32::try_from(key >> 3)
            .map_err(|_| DecodeError::MalformedTag { field_number: key >> 3, wire_type })?;
        Ok((Tag { field_number, wire_type }, next))
    }

    /// Reject tags that cannot start a field: field number zero or out of
    /// range, and end-group markers outside a group.
    pub fn validate(self) -> Result<Tag, DecodeError> {
        if self.wire_type == WireType::EndGroup as u8 {
            return Err(self.malformed());
        }
        self.check_field_number()
    }

    /// Reject field number zero and numbers above [`MAX_FIELD_NUMBER`].
    /// Unlike [`Tag::validate`] this admits end-group markers.
    pub(crate) fn check_field_number(self) -> Result<Tag, DecodeError> {
        if self.field_number == 0 || self.field_number > MAX_FIELD_NUMBER {
            return Err(self.malformed());
        }
        Ok(self)
    }

    fn malformed(self) -> DecodeError {
        DecodeError::MalformedTag { field_number: u64::from(self.field_number), wire_type: self.wire_type }
    }
}

#[cfg(test)]
#[path = "tag_tests.rs"]
mod tests;
