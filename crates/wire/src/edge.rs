// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A directed edge in the mesh graph.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::encoder::{len_delimited_size, Encoder};
use crate::error::{DecodeError, EncodeError};
use crate::field::{FieldDescriptor, FieldKind, FieldValue};
use crate::message::Message;

const NAME_FIELD: u32 = 1;
const SOURCE_FIELD: u32 = 2;
const DESTINATION_FIELD: u32 = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Instance name from configuration.
    pub name: String,
    pub source: String,
    pub destination: String,
}

impl Message for Edge {
    const NAME: &'static str = "template.edge.Instance";

    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new(NAME_FIELD, "name", FieldKind::String),
        FieldDescriptor::new(SOURCE_FIELD, "source", FieldKind::String),
        FieldDescriptor::new(DESTINATION_FIELD, "destination", FieldKind::String),
    ];

    fn encoded_len(&self) -> usize {
        len_delimited_size(NAME_FIELD, self.name.len())
            + len_delimited_size(SOURCE_FIELD, self.source.len())
            + len_delimited_size(DESTINATION_FIELD, self.destination.len())
    }

    fn encode_fields(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        enc.put_string(NAME_FIELD, &self.name)?;
        enc.put_string(SOURCE_FIELD, &self.source)?;
        enc.put_string(DESTINATION_FIELD, &self.destination)
    }

    fn merge_field(&mut self, field: &'static FieldDescriptor, value: FieldValue<'_>) -> Result<(), DecodeError> {
        let slot = match field.number {
            NAME_FIELD => &mut self.name,
            SOURCE_FIELD => &mut self.source,
            DESTINATION_FIELD => &mut self.destination,
            _ => return Ok(()),
        };
        *slot = value.into_string(field)?;
        Ok(())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "&Edge{{Name:{},Source:{},Destination:{},}}",
            self.name, self.source, self.destination
        )
    }
}

#[cfg(test)]
#[path = "edge_tests.rs"]
mod tests;
