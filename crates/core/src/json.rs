// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared JSON field names and helpers for event serialization

use std::time::Duration;

/// String-keyed JSON object produced by `JsonWritable` events
pub type JsonObj = serde_json::Map<String, serde_json::Value>;

pub const FIELD_ELAPSED: &str = "elapsed";
pub const FIELD_ERR: &str = "err";
pub const FIELD_FLAG: &str = "flag";
pub const FIELD_TIMESTAMP: &str = "_timestamp";
pub const FIELD_HEADINGS: &str = "headings";
pub const FIELD_LABELS: &str = "labels";
pub const FIELD_ANNOTATIONS: &str = "annotations";
pub const FIELD_TEXT: &str = "text";

/// Whole milliseconds in a duration, truncating any remainder
pub fn milliseconds(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// JSON value for an optional error: its display string, or null
pub fn error_value(err: Option<&(dyn std::error::Error + Send + Sync)>) -> serde_json::Value {
    match err {
        Some(e) => serde_json::Value::String(e.to_string()),
        None => serde_json::Value::Null,
    }
}
