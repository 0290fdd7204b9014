// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Skipping fields without interpreting them.
//!
//! Only the wire type is consulted, which is what lets an older schema step
//! over fields added by a newer one. Groups are walked with an explicit stack
//! of open field numbers capped at a caller-supplied depth, so crafted input
//! cannot exhaust the native stack.

use crate::error::DecodeError;
use crate::tag::{Tag, WireType};
use crate::varint::{decode_varint, skip_varint};

/// Number of bytes after `tag` (already consumed, `pos` points just past it)
/// that belong to the field.
pub fn skip_field(buf: &[u8], pos: usize, tag: Tag, max_depth: usize) -> Result<usize, DecodeError> {
    let end = match tag.kind()? {
        WireType::StartGroup => skip_group(buf, pos, tag.field_number, max_depth)?,
        // Closes an enclosing group; nothing follows it.
        WireType::EndGroup => pos,
        other => skip_payload(buf, pos, other)?,
    };
    Ok(end - pos)
}

/// Bounds-checked cursor advance.
pub(crate) fn advance(buf: &[u8], pos: usize, n: usize) -> Result<usize, DecodeError> {
    pos.checked_add(n)
        .filter(|&end| end <= buf.len())
        .ok_or(DecodeError::UnexpectedEof)
}

/// Convert a decoded length prefix into a byte count.
pub(crate) fn checked_length(len: u64) -> Result<usize, DecodeError> {
    if i64::try_from(len).is_err() {
        return Err(DecodeError::InvalidLength);
    }
    // Larger than the address space, so certainly larger than the buffer.
    usize::try_from(len).map_err(|_| DecodeError::UnexpectedEof)
}

/// Read a length prefix at `pos` and return the payload range.
pub(crate) fn length_delimited(buf: &[u8], pos: usize) -> Result<(usize, usize), DecodeError> {
    let (len, start) = decode_varint(buf, pos)?;
    let end = advance(buf, start, checked_length(len)?)?;
    Ok((start, end))
}

/// End of a non-group payload starting at `pos`.
fn skip_payload(buf: &[u8], pos: usize, wire_type: WireType) -> Result<usize, DecodeError> {
    match wire_type {
        WireType::Varint => skip_varint(buf, pos),
        WireType::Fixed64 => advance(buf, pos, 8),
        WireType::Fixed32 => advance(buf, pos, 4),
        WireType::LengthDelimited => length_delimited(buf, pos).map(|(_, end)| end),
        WireType::StartGroup | WireType::EndGroup => Err(DecodeError::UnknownWireType(wire_type.as_u8())),
    }
}

/// End of the group opened by `field_number`, including its end-group tag.
fn skip_group(buf: &[u8], pos: usize, field_number: u32, max_depth: usize) -> Result<usize, DecodeError> {
    if max_depth == 0 {
        return Err(DecodeError::GroupTooDeep { limit: max_depth });
    }
    let mut open = vec![field_number];
    let mut cursor = pos;

    while let Some(&current) = open.last() {
        let (tag, next) = Tag::decode(buf, cursor)?;
        let tag = tag.check_field_number()?;
        cursor = next;
        match tag.kind()? {
            WireType::EndGroup => {
                if tag.field_number != current {
                    return Err(DecodeError::UnmatchedEndGroup {
                        expected: current,
                        found: tag.field_number,
                    });
                }
                open.pop();
            }
            WireType::StartGroup => {
                if open.len() >= max_depth {
                    return Err(DecodeError::GroupTooDeep { limit: max_depth });
                }
                open.push(tag.field_number);
            }
            other => cursor = skip_payload(buf, cursor, other)?,
        }
    }
    Ok(cursor)
}

#[cfg(test)]
#[path = "skip_tests.rs"]
mod tests;
