// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Context graph adapter configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::encoder::{len_delimited_size, Encoder};
use crate::error::{DecodeError, EncodeError};
use crate::field::{FieldDescriptor, FieldKind, FieldValue};
use crate::message::Message;

const PROJECT_ID: u32 = 1;

/// Adapter parameters: the cloud project the context graph is written to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub project_id: String,
}

impl Params {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self { project_id: project_id.into() }
    }
}

impl Message for Params {
    const NAME: &'static str = "adapter.contextgraph.config.Params";

    const FIELDS: &'static [FieldDescriptor] =
        &[FieldDescriptor::new(PROJECT_ID, "project_id", FieldKind::String)];

    fn encoded_len(&self) -> usize {
        len_delimited_size(PROJECT_ID, self.project_id.len())
    }

    fn encode_fields(&self, enc: &mut Encoder<'_>) -> Result<(), EncodeError> {
        enc.put_string(PROJECT_ID, &self.project_id)
    }

    fn merge_field(&mut self, field: &'static FieldDescriptor, value: FieldValue<'_>) -> Result<(), DecodeError> {
        if field.number == PROJECT_ID {
            self.project_id = value.into_string(field)?;
        }
        Ok(())
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&Params{{ProjectId:{},}}", self.project_id)
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
