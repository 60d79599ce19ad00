// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON event lines

use super::WriteFormatter;
use crate::event::Event;
use crate::json::{
    JsonObj, FIELD_ANNOTATIONS, FIELD_FLAG, FIELD_HEADINGS, FIELD_LABELS, FIELD_TIMESTAMP,
};
use chrono::SecondsFormat;
use serde_json::Value;
use std::io::Write;

/// Renders the event's own fields plus the shared envelope fields
#[derive(Debug, Clone, Default)]
pub struct JsonOutputFormatter;

impl JsonOutputFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Build the full object for an event
    pub fn to_object(&self, event: &dyn Event) -> JsonObj {
        let mut obj = event
            .as_json_writable()
            .map(|w| w.write_json())
            .unwrap_or_default();

        obj.insert(FIELD_FLAG.into(), Value::String(event.flag().to_string()));
        obj.insert(
            FIELD_TIMESTAMP.into(),
            Value::String(
                event
                    .timestamp()
                    .to_rfc3339_opts(SecondsFormat::Nanos, true),
            ),
        );

        if let Some(headings) = event.as_headings() {
            if !headings.headings().is_empty() {
                obj.insert(
                    FIELD_HEADINGS.into(),
                    Value::from(headings.headings().to_vec()),
                );
            }
        }
        if let Some(labels) = event.as_labels() {
            if !labels.labels().is_empty() {
                obj.insert(FIELD_LABELS.into(), fields_value(labels.labels()));
            }
        }
        if let Some(annotations) = event.as_annotations() {
            if !annotations.annotations().is_empty() {
                obj.insert(
                    FIELD_ANNOTATIONS.into(),
                    fields_value(annotations.annotations()),
                );
            }
        }

        obj
    }
}

impl WriteFormatter for JsonOutputFormatter {
    fn write_formatted(&self, out: &mut dyn Write, event: &dyn Event) -> std::io::Result<()> {
        let obj = Value::Object(self.to_object(event));
        let rendered = serde_json::to_string(&obj)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(out, "{}", rendered)
    }
}

fn fields_value(fields: &crate::event::Fields) -> Value {
    Value::Object(
        fields
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect(),
    )
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
