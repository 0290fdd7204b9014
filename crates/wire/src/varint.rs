// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Base-128 varints.
//!
//! Values are written 7 bits at a time, least-significant group first. Every
//! byte except the last has its high bit set. A `u64` needs at most
//! [`MAX_VARINT_LEN`] bytes.

use crate::error::{DecodeError, EncodeError};

/// Longest encoding of a 64-bit value.
pub const MAX_VARINT_LEN: usize = 10;

/// Write `value` at the start of `buf`, returning the number of bytes written.
pub fn encode_varint(buf: &mut [u8], value: u64) -> Result<usize, EncodeError> {
    let needed = varint_size(value);
    if buf.len() < needed {
        return Err(EncodeError::BufferTooSmall { needed, available: buf.len() });
    }

    let mut v = value;
    let mut i = 0;
    while v >= 0x80 {
        buf[i] = (v as u8 & 0x7f) | 0x80;
        v >>= 7;
        i += 1;
    }
    buf[i] = v as u8;
    Ok(i + 1)
}

/// Append `value` to a growable buffer.
pub fn put_varint(buf: &mut Vec<u8>, value: u64) {
    let mut v = value;
    while v >= 0x80 {
        buf.push((v as u8 & 0x7f) | 0x80);
        v >>= 7;
    }
    buf.push(v as u8);
}

/// Number of bytes `encode_varint` produces for `value`.
pub fn varint_size(value: u64) -> usize {
    // One group per started 7 bits; zero still takes a byte.
    let bits = 64 - (value | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Read a varint starting at `pos`, returning the value and the cursor just
/// past it.
///
/// A tenth byte may only carry bit 63; anything larger is
/// [`DecodeError::IntegerOverflow`].
pub fn decode_varint(buf: &[u8], pos: usize) -> Result<(u64, usize), DecodeError> {
    let mut value = 0u64;
    let mut cursor = pos;
    let mut shift = 0u32;
    loop {
        if shift >= 64 {
            return Err(DecodeError::IntegerOverflow);
        }
        let byte = *buf.get(cursor).ok_or(DecodeError::UnexpectedEof)?;
        cursor += 1;
        if shift == 63 && byte > 1 {
            return Err(DecodeError::IntegerOverflow);
        }
        value |= u64::from(byte & 0x7f) << shift;
        if byte < 0x80 {
            return Ok((value, cursor));
        }
        shift += 7;
    }
}

/// Advance past a varint starting at `pos` without accumulating its value.
///
/// Applies the same termination rules as [`decode_varint`].
pub fn skip_varint(buf: &[u8], pos: usize) -> Result<usize, DecodeError> {
    let mut cursor = pos;
    for i in 0..MAX_VARINT_LEN {
        let byte = *buf.get(cursor).ok_or(DecodeError::UnexpectedEof)?;
        cursor += 1;
        if i == MAX_VARINT_LEN - 1 && byte > 1 {
            break;
        }
        if byte < 0x80 {
            return Ok(cursor);
        }
    }
    Err(DecodeError::IntegerOverflow)
}

/// Map a signed value onto the unsigned range so small magnitudes stay short.
pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode`].
pub fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Encoded size of a zig-zag mapped value.
pub fn zigzag_size(value: i64) -> usize {
    varint_size(zigzag_encode(value))
}

#[cfg(test)]
#[path = "varint_tests.rs"]
mod tests;
