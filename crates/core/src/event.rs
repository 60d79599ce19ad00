// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event contract and optional capabilities
//!
//! Every event exposes a flag and a timestamp. The rest is opt-in: a variant
//! answers the `as_*` probes for the capabilities it supports and inherits
//! `None` for the ones it doesn't. Formatters and listeners probe, they never
//! assume.

use crate::format::TextFormatter;
use crate::json::JsonObj;
use chrono::{DateTime, Utc};
use std::any::Any;
use std::collections::BTreeMap;

use crate::flag::Flag;

/// Key/value pairs attached to an event
pub type Fields = BTreeMap<String, String>;

/// Something that happened
pub trait Event: Any + Send + Sync {
    fn flag(&self) -> &Flag;

    fn timestamp(&self) -> DateTime<Utc>;

    /// Concrete value, for narrowing to a variant
    fn as_any(&self) -> &dyn Any;

    fn as_headings(&self) -> Option<&dyn EventHeadings> {
        None
    }

    fn as_labels(&self) -> Option<&dyn EventLabels> {
        None
    }

    fn as_annotations(&self) -> Option<&dyn EventAnnotations> {
        None
    }

    fn as_text_writable(&self) -> Option<&dyn TextWritable> {
        None
    }

    fn as_json_writable(&self) -> Option<&dyn JsonWritable> {
        None
    }
}

impl dyn Event {
    /// Narrow to a concrete variant, `None` on mismatch
    pub fn downcast_ref<E: Event>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }

    pub fn is<E: Event>(&self) -> bool {
        self.as_any().is::<E>()
    }
}

/// Ordered headings rendered before the event text
pub trait EventHeadings {
    fn headings(&self) -> &[String];
    fn set_headings(&mut self, headings: Vec<String>);
}

/// Filterable key/value labels
pub trait EventLabels {
    fn labels(&self) -> &Fields;
    fn add_label(&mut self, key: String, value: String);
}

/// Free-form key/value metadata
pub trait EventAnnotations {
    fn annotations(&self) -> &Fields;
    fn add_annotation(&mut self, key: String, value: String);
}

/// Human readable rendering
pub trait TextWritable {
    /// Append the event text to `buf`; `tf` is an optional styling hook
    fn write_text(&self, tf: Option<&dyn TextFormatter>, buf: &mut String);
}

/// Structured rendering
pub trait JsonWritable {
    fn write_json(&self) -> JsonObj;
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
