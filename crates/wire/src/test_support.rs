// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A message covering every field kind, plus proptest strategies.

use std::fmt;

use proptest::prelude::*;

use crate::encoder::*;
use crate::error::{DecodeError, EncodeError};
use crate::field::{FieldDescriptor, FieldKind, FieldValue};
use crate::message::Message;
use crate::{Edge, Params};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Probe {
    pub label: String,
    pub payload: Vec<u8>,
    pub count: u64,
    pub offset: i64,
    pub delta: i64,
    pub enabled: bool,
    pub crc: u32,
    pub stamp: u64,
    pub tail: String,
}

impl Message for Probe {
    const NAME: &'static str = "test.Probe";

    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new(1, "label", FieldKind::String),
        FieldDescriptor::new(2, "payload", FieldKind::Bytes),
        FieldDescriptor::new(3, "count", FieldKind::Uint64),
        FieldDescriptor::new(4, "offset", FieldKind::Int64),
        FieldDescriptor::new(5, "delta", FieldKind::Sint64),
        FieldDescriptor::new(6, "enabled", FieldKind::Bool),
        FieldDescriptor::new(7, "crc", FieldKind::Fixed32),
        FieldDescriptor::new(8, "stamp", FieldKind::Fixed64),
        FieldDescriptor::new(16, "tail", FieldKind::String),
    ];

    fn encoded_len(&self) -> usize {
        len_delimited_size(1, self.label.len())
            + len_delimited_size(2, self.payload.len())
            + varint_field_size(3, self.count)
            + int64_field_size(4, self.offset)
            + sint64_field_size(5, self.delta)
            + bool_field_size(6, self.enabled)
            + fixed32_field_size(7, self.crc)
            + fixed64_field_size(8, self.stamp)
            + len_delimited_size(16, self.tail.len())
    }

    fn encode_fields(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        enc.put_string(1, &self.label)?;
        enc.put_bytes(2, &self.payload)?;
        enc.put_uint64(3, self.count)?;
        enc.put_int64(4, self.offset)?;
        enc.put_sint64(5, self.delta)?;
        enc.put_bool(6, self.enabled)?;
        enc.put_fixed32(7, self.crc)?;
        enc.put_fixed64(8, self.stamp)?;
        enc.put_string(16, &self.tail)
    }

    fn merge_field(&mut self, field: &'static FieldDescriptor, value: FieldValue<'_>) -> Result<(), DecodeError> {
        match field.number {
            1 => self.label = value.into_string(field)?,
            2 => self.payload = value.into_bytes(field)?.to_vec(),
            3 => self.count = value.into_u64(field)?,
            4 => self.offset = value.into_i64(field)?,
            5 => self.delta = value.into_i64(field)?,
            6 => self.enabled = value.into_bool(field)?,
            7 => self.crc = value.into_u32(field)?,
            8 => self.stamp = value.into_u64(field)?,
            16 => self.tail = value.into_string(field)?,
            _ => {}
        }
        Ok(())
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&Probe{{Label:{},Count:{},}}", self.label, self.count)
    }
}

pub fn arb_params() -> impl Strategy<Value = Params> {
    ".{0,40}".prop_map(Params::new)
}

pub fn arb_edge() -> impl Strategy<Value = Edge> {
    (".{0,20}", ".{0,20}", ".{0,20}").prop_map(|(name, source, destination)| Edge {
        name,
        source,
        destination,
    })
}

pub fn arb_probe() -> impl Strategy<Value = Probe> {
    (
        (".{0,20}", prop::collection::vec(any::<u8>(), 0..200), any::<u64>(), any::<i64>()),
        (any::<i64>(), any::<bool>(), any::<u32>(), any::<u64>(), ".{0,200}"),
    )
        .prop_map(|((label, payload, count, offset), (delta, enabled, crc, stamp, tail))| Probe {
            label,
            payload,
            count,
            offset,
            delta,
            enabled,
            crc,
            stamp,
            tail,
        })
}
