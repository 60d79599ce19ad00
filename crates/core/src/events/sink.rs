// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-lines sink for dispatched events

use super::listener::Listener;
use super::subscription::FlagPattern;
use crate::event::{
    Event, EventAnnotations, EventHeadings, EventLabels, Fields, JsonWritable, TextWritable,
};
use crate::flag::Flag;
use crate::format::TextFormatter;
use crate::json::{JsonObj, FIELD_TEXT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors reading or writing a sink file
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sink record on line {line} is invalid: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),
}

/// A stored event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Monotonic sequence number, starting at 1
    pub sequence: u64,
    pub flag: Flag,
    pub timestamp: DateTime<Utc>,
    /// The event's JSON fields, or its text under `text`
    pub fields: JsonObj,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headings: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: Fields,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: Fields,
}

impl EventRecord {
    fn from_event(sequence: u64, event: &dyn Event) -> Self {
        let fields = match (event.as_json_writable(), event.as_text_writable()) {
            (Some(json), _) => json.write_json(),
            (None, Some(text)) => {
                let mut buf = String::new();
                text.write_text(None, &mut buf);
                let mut obj = JsonObj::new();
                obj.insert(FIELD_TEXT.into(), buf.trim().into());
                obj
            }
            (None, None) => JsonObj::new(),
        };

        Self {
            sequence,
            flag: event.flag().clone(),
            timestamp: event.timestamp(),
            fields,
            headings: event
                .as_headings()
                .map(|h| h.headings().to_vec())
                .unwrap_or_default(),
            labels: event
                .as_labels()
                .map(|l| l.labels().clone())
                .unwrap_or_default(),
            annotations: event
                .as_annotations()
                .map(|a| a.annotations().clone())
                .unwrap_or_default(),
        }
    }
}

// Records replay as events of their own: text is the stored `text` field, or
// the fields as `key=value` pairs.
impl Event for EventRecord {
    fn flag(&self) -> &Flag {
        &self.flag
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_headings(&self) -> Option<&dyn EventHeadings> {
        Some(self)
    }

    fn as_labels(&self) -> Option<&dyn EventLabels> {
        Some(self)
    }

    fn as_annotations(&self) -> Option<&dyn EventAnnotations> {
        Some(self)
    }

    fn as_text_writable(&self) -> Option<&dyn TextWritable> {
        Some(self)
    }

    fn as_json_writable(&self) -> Option<&dyn JsonWritable> {
        Some(self)
    }
}

impl EventHeadings for EventRecord {
    fn headings(&self) -> &[String] {
        &self.headings
    }

    fn set_headings(&mut self, headings: Vec<String>) {
        self.headings = headings;
    }
}

impl EventLabels for EventRecord {
    fn labels(&self) -> &Fields {
        &self.labels
    }

    fn add_label(&mut self, key: String, value: String) {
        self.labels.insert(key, value);
    }
}

impl EventAnnotations for EventRecord {
    fn annotations(&self) -> &Fields {
        &self.annotations
    }

    fn add_annotation(&mut self, key: String, value: String) {
        self.annotations.insert(key, value);
    }
}

impl TextWritable for EventRecord {
    fn write_text(&self, _tf: Option<&dyn TextFormatter>, buf: &mut String) {
        if let (1, Some(Value::String(text))) = (self.fields.len(), self.fields.get(FIELD_TEXT)) {
            buf.push_str(text);
            return;
        }
        let pairs: Vec<String> = self
            .fields
            .iter()
            .map(|(key, value)| match value {
                Value::String(s) => format!("{}={}", key, s),
                other => format!("{}={}", key, other),
            })
            .collect();
        buf.push_str(&pairs.join(" "));
    }
}

impl JsonWritable for EventRecord {
    fn write_json(&self) -> JsonObj {
        self.fields.clone()
    }
}

#[derive(Deserialize)]
struct StoredSequence {
    sequence: u64,
}

/// Append-only JSON-lines file of event records
pub struct JsonLinesSink {
    path: PathBuf,
    sequence: u64,
}

impl JsonLinesSink {
    /// Open or create a sink at the given path
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let path = path.into();
        // Continue after the highest stored sequence; unreadable lines are skipped
        let sequence = if path.exists() {
            let file = File::open(&path)?;
            BufReader::new(file)
                .lines()
                .map_while(Result::ok)
                .filter_map(|line| serde_json::from_str::<StoredSequence>(&line).ok())
                .map(|stored| stored.sequence)
                .max()
                .unwrap_or(0)
        } else {
            0
        };

        Ok(Self { path, sequence })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an event to the file
    pub fn append(&mut self, event: &dyn Event) -> Result<EventRecord, SinkError> {
        let record = EventRecord::from_event(self.sequence + 1, event);
        let json = serde_json::to_string(&record).map_err(SinkError::Encode)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", json)?;

        self.sequence = record.sequence;
        Ok(record)
    }

    /// Read all records
    pub fn read_all(&self) -> Result<Vec<EventRecord>, SinkError> {
        read_records(&self.path)
    }

    /// Records whose flag matches the pattern
    pub fn query(&self, pattern: &FlagPattern) -> Result<Vec<EventRecord>, SinkError> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|r| pattern.matches(&r.flag))
            .collect())
    }

    /// Records after a sequence number
    pub fn after(&self, sequence: u64) -> Result<Vec<EventRecord>, SinkError> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|r| r.sequence > sequence)
            .collect())
    }

    /// Get current sequence number
    pub fn current_sequence(&self) -> u64 {
        self.sequence
    }

    /// Turn the sink into a listener; write failures are logged and dropped
    pub fn into_listener(self) -> Listener {
        let sink = Arc::new(Mutex::new(self));
        Arc::new(move |event: &dyn Event| {
            let mut sink = sink.lock().unwrap_or_else(|e| e.into_inner());
            if let Err(e) = sink.append(event) {
                tracing::warn!(
                    path = %sink.path.display(),
                    flag = %event.flag(),
                    error = %e,
                    "failed to append event to sink"
                );
            }
        })
    }
}

/// Read records from a sink file; a missing file has no records
pub fn read_records(path: &Path) -> Result<Vec<EventRecord>, SinkError> {
    if !path.exists() {
        return Ok(vec![]);
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let record: EventRecord =
            serde_json::from_str(&line).map_err(|source| SinkError::InvalidRecord {
                line: idx + 1,
                source,
            })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
