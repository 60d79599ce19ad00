// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP response events

use chrono::{DateTime, Utc};
use evlog_core::event::{
    Event, EventAnnotations, EventHeadings, EventLabels, JsonWritable, TextWritable,
};
use evlog_core::format::{colorize, Color, TextFormatter};
use evlog_core::json::{milliseconds, JsonObj, FIELD_ELAPSED};
use evlog_core::{typed_listener, EventMeta, Flag, Listener};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::time::Duration;

/// Flag for completed HTTP calls
pub const RESPONSE: Flag = Flag::from_static("http.response");

/// The outgoing request, as far as logging cares
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInfo {
    pub method: String,
    pub url: String,
}

impl RequestInfo {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }
}

/// Response status line and entity headers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    pub status_code: u16,
    pub content_length: Option<u64>,
    pub content_type: Option<String>,
}

impl ResponseInfo {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }

    pub fn with_content_length(mut self, length: u64) -> Self {
        self.content_length = Some(length);
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// A completed HTTP call
#[derive(Debug, Clone)]
pub struct ResponseEvent {
    meta: EventMeta,
    request: RequestInfo,
    response: ResponseInfo,
    elapsed: Duration,
    body: Option<String>,
}

impl ResponseEvent {
    pub fn new(request: RequestInfo, response: ResponseInfo, elapsed: Duration) -> Self {
        Self {
            meta: EventMeta::new(RESPONSE),
            request,
            response,
            elapsed,
            body: None,
        }
    }

    pub fn listener<F>(listener: F) -> Listener
    where
        F: Fn(&ResponseEvent) + Send + Sync + 'static,
    {
        typed_listener(listener)
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
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

    pub fn request(&self) -> &RequestInfo {
        &self.request
    }

    pub fn response(&self) -> &ResponseInfo {
        &self.response
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn meta(&self) -> &EventMeta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut EventMeta {
        &mut self.meta
    }
}

fn status_color(status: u16) -> Color {
    match status {
        200..=299 => Color::Green,
        300..=399 => Color::Yellow,
        _ => Color::Red,
    }
}

impl Event for ResponseEvent {
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

impl TextWritable for ResponseEvent {
    fn write_text(&self, tf: Option<&dyn TextFormatter>, buf: &mut String) {
        let status = self.response.status_code.to_string();
        buf.push_str(&self.request.method);
        buf.push(' ');
        buf.push_str(&self.request.url);
        buf.push(' ');
        buf.push_str(&colorize(tf, &status, status_color(self.response.status_code)));
        buf.push_str(&format!(" ({:?})", self.elapsed));
        if let Some(body) = self.body.as_deref().filter(|b| !b.is_empty()) {
            buf.push(' ');
            buf.push_str(body);
        }
    }
}

impl JsonWritable for ResponseEvent {
    fn write_json(&self) -> JsonObj {
        let mut obj = JsonObj::new();
        obj.insert(
            "req".into(),
            serde_json::to_value(&self.request).unwrap_or(Value::Null),
        );
        obj.insert(
            "res".into(),
            serde_json::to_value(&self.response).unwrap_or(Value::Null),
        );
        obj.insert(FIELD_ELAPSED.into(), milliseconds(self.elapsed).into());
        obj.insert(
            "body".into(),
            self.body.clone().map(Value::String).unwrap_or(Value::Null),
        );
        obj
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
