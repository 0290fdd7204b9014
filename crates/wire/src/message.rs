// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The message contract: a flat record of typed, numbered fields.

use std::fmt;

use crate::decoder::{DecodeOptions, Decoder};
use crate::encoder::Encoder;
use crate::error::{DecodeError, EncodeError};
use crate::field::{FieldDescriptor, FieldValue};

/// A record with a fixed set of scalar and string fields.
///
/// Implementors supply the descriptor table, the exact encoded size, the
/// field writer, and the per-field setter. Marshal and unmarshal come for
/// free. Decoded strings and bytes are copied out of the input buffer, so a
/// decoded message never borrows from it.
pub trait Message: Default {
    /// Name used in logs and debug output.
    const NAME: &'static str;

    /// Field table, sorted by field number.
    const FIELDS: &'static [FieldDescriptor];

    /// Exact number of bytes [`Message::marshal_to`] writes.
    fn encoded_len(&self) -> usize;

    /// Write every non-default field in ascending field-number order.
    fn encode_fields(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError>;

    /// Assign one decoded field. `field` always comes from [`Message::FIELDS`]
    /// and `value` always carries its declared wire type.
    fn merge_field(&mut self, field: &'static FieldDescriptor, value: FieldValue<'_>) -> Result<(), DecodeError>;

    /// Encode into `buf`, which must hold at least `encoded_len()` bytes.
    fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, EncodeError> {
        let expected = self.encoded_len();
        if buf.len() < expected {
            return Err(EncodeError::BufferTooSmall { needed: expected, available: buf.len() });
        }

        let mut enc = Encoder::new(buf);
        self.encode_fields(&mut enc)?;
        let written = enc.position();
        if written != expected {
            return Err(EncodeError::SizeMismatch { expected, written });
        }
        Ok(written)
    }

    fn marshal(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = vec![0u8; self.encoded_len()];
        let n = self.marshal_to(&mut buf)?;
        buf.truncate(n);
        Ok(buf)
    }

    fn unmarshal(buf: &[u8]) -> Result<Self, DecodeError> {
        Self::unmarshal_with(buf, &DecodeOptions::default())
    }

    /// Decode a whole buffer. Nothing is returned unless every byte decodes.
    fn unmarshal_with(buf: &[u8], options: &DecodeOptions) -> Result<Self, DecodeError> {
        let mut msg = Self::default();
        let mut dec = Decoder::with_options(buf, *options);
        if let Err(e) = dec.decode_into(&mut msg) {
            tracing::debug!(kind = Self::NAME, offset = dec.position(), error = %e, "decode failed");
            return Err(e);
        }
        Ok(msg)
    }

    /// Decode `buf` on top of the current values; later fields win.
    ///
    /// On error `self` keeps whatever fields were assigned before the failure.
    fn merge_from(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
        Decoder::new(buf).decode_into(self)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Renders an optional message, printing `nil` when absent.
pub struct Maybe<'a, M>(pub Option<&'a M>);

impl<M: fmt::Display> fmt::Display for Maybe<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(msg) => msg.fmt(f),
            None => f.write_str("nil"),
        }
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
