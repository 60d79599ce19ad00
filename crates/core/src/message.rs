// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain text message events

use crate::event::{
    Event, EventAnnotations, EventHeadings, EventLabels, JsonWritable, TextWritable,
};
use crate::events::{typed_listener, Listener};
use crate::flag::Flag;
use crate::format::TextFormatter;
use crate::json::{JsonObj, FIELD_TEXT};
use crate::meta::EventMeta;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::any::Any;

/// A free-form message under some flag (`info`, `warning`, ...)
#[derive(Debug, Clone)]
pub struct MessageEvent {
    meta: EventMeta,
    text: String,
}

impl MessageEvent {
    pub fn new(flag: Flag, text: impl Into<String>) -> Self {
        Self {
            meta: EventMeta::new(flag),
            text: text.into(),
        }
    }

    pub fn listener<F>(listener: F) -> Listener
    where
        F: Fn(&MessageEvent) + Send + Sync + 'static,
    {
        typed_listener(listener)
    }

    pub fn with_headings<I, S>(mut self, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta = self.meta.with_headings(headings);
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.add_label(key.into(), value.into());
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.add_annotation(key.into(), value.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.meta.set_timestamp(timestamp);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn meta(&self) -> &EventMeta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut EventMeta {
        &mut self.meta
    }
}

impl Event for MessageEvent {
    fn flag(&self) -> &Flag {
        self.meta.flag()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.meta.timestamp()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_headings(&self) -> Option<&dyn EventHeadings> {
        Some(&self.meta)
    }

    fn as_labels(&self) -> Option<&dyn EventLabels> {
        Some(&self.meta)
    }

    fn as_annotations(&self) -> Option<&dyn EventAnnotations> {
        Some(&self.meta)
    }

    fn as_text_writable(&self) -> Option<&dyn TextWritable> {
        Some(self)
    }

    fn as_json_writable(&self) -> Option<&dyn JsonWritable> {
        Some(self)
    }
}

impl TextWritable for MessageEvent {
    fn write_text(&self, _tf: Option<&dyn TextFormatter>, buf: &mut String) {
        buf.push_str(&self.text);
    }
}

impl JsonWritable for MessageEvent {
    fn write_json(&self) -> JsonObj {
        let mut obj = JsonObj::new();
        obj.insert(FIELD_TEXT.into(), Value::String(self.text.clone()));
        obj
    }
}
