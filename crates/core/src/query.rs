// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Database query completion events

use crate::event::{
    Event, EventAnnotations, EventHeadings, EventLabels, JsonWritable, TextWritable,
};
use crate::events::{typed_listener, Listener};
use crate::flag::Flag;
use crate::format::{colorize, Color, TextFormatter};
use crate::json::{error_value, milliseconds, JsonObj, FIELD_ELAPSED, FIELD_ERR};
use crate::meta::EventMeta;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::any::Any;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

/// Shared, cloneable error carried as event data
pub type EventError = Arc<dyn Error + Send + Sync>;

/// A completed (or failed) database query
///
/// The error is data: a failed query renders and serializes like any other,
/// with a `failed` marker in text and a populated `err` field in JSON.
#[derive(Debug, Clone)]
pub struct QueryEvent {
    meta: EventMeta,
    engine: String,
    query_label: String,
    body: String,
    elapsed: Duration,
    err: Option<EventError>,
}

impl QueryEvent {
    pub fn new(body: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            meta: EventMeta::new(Flag::QUERY),
            engine: String::new(),
            query_label: String::new(),
            body: body.into(),
            elapsed,
            err: None,
        }
    }

    /// Listener that only sees query events
    pub fn listener<F>(listener: F) -> Listener
    where
        F: Fn(&QueryEvent) + Send + Sync + 'static,
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

    /// Set a label for later filtering
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.add_label(key.into(), value.into());
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.add_annotation(key.into(), value.into());
        self
    }

    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.meta.set_flag(flag);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.meta.set_timestamp(timestamp);
        self
    }

    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Set the database; stored in the meta entity
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.meta.set_entity(database);
        self
    }

    pub fn with_query_label(mut self, query_label: impl Into<String>) -> Self {
        self.query_label = query_label.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    pub fn with_err(mut self, err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        self.err = Some(Arc::from(err.into()));
        self
    }

    pub fn meta(&self) -> &EventMeta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut EventMeta {
        &mut self.meta
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn database(&self) -> &str {
        self.meta.entity()
    }

    pub fn query_label(&self) -> &str {
        &self.query_label
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn err(&self) -> Option<&(dyn Error + Send + Sync)> {
        self.err.as_deref()
    }
}

impl Event for QueryEvent {
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

impl EventHeadings for QueryEvent {
    fn headings(&self) -> &[String] {
        self.meta.headings()
    }

    fn set_headings(&mut self, headings: Vec<String>) {
        self.meta.set_headings(headings);
    }
}

impl EventLabels for QueryEvent {
    fn labels(&self) -> &crate::event::Fields {
        self.meta.labels()
    }

    fn add_label(&mut self, key: String, value: String) {
        self.meta.add_label(key, value);
    }
}

impl EventAnnotations for QueryEvent {
    fn annotations(&self) -> &crate::event::Fields {
        self.meta.annotations()
    }

    fn add_annotation(&mut self, key: String, value: String) {
        self.meta.add_annotation(key, value);
    }
}

impl TextWritable for QueryEvent {
    fn write_text(&self, tf: Option<&dyn TextFormatter>, buf: &mut String) {
        if !self.query_label.is_empty() {
            buf.push(' ');
            if self.engine.is_empty() {
                buf.push_str(&format!("[{}]", self.query_label));
            } else {
                buf.push_str(&format!("[{}:{}]", self.engine, self.query_label));
            }
        }
        match self.err {
            None => buf.push_str(&format!("({:?})", self.elapsed)),
            Some(_) => buf.push_str(&format!(
                "({:?}) {}",
                self.elapsed,
                colorize(tf, "failed", Color::Red)
            )),
        }
        if !self.body.is_empty() {
            buf.push(' ');
            buf.push_str(self.body.trim());
        }
    }
}

impl JsonWritable for QueryEvent {
    fn write_json(&self) -> JsonObj {
        let mut obj = JsonObj::new();
        obj.insert("engine".into(), Value::String(self.engine.clone()));
        obj.insert("database".into(), Value::String(self.database().to_string()));
        obj.insert("queryLabel".into(), Value::String(self.query_label.clone()));
        obj.insert("body".into(), Value::String(self.body.clone()));
        obj.insert(FIELD_ERR.into(), error_value(self.err()));
        obj.insert(FIELD_ELAPSED.into(), Value::from(milliseconds(self.elapsed)));
        obj
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
