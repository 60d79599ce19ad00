// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Attributes shared by every event variant

use crate::event::{EventAnnotations, EventHeadings, EventLabels, Fields};
use crate::flag::Flag;
use chrono::{DateTime, Utc};

static EMPTY_FIELDS: Fields = Fields::new();

/// Base metadata embedded in each event
///
/// Label and annotation maps are only allocated on first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMeta {
    timestamp: DateTime<Utc>,
    flag: Flag,
    entity: String,
    headings: Vec<String>,
    labels: Option<Fields>,
    annotations: Option<Fields>,
}

impl EventMeta {
    pub fn new(flag: Flag) -> Self {
        Self {
            timestamp: Utc::now(),
            flag,
            entity: String::new(),
            headings: Vec::new(),
            labels: None,
            annotations: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flag = flag;
        self
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = entity.into();
        self
    }

    pub fn with_headings<I, S>(mut self, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headings = headings.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_label(key.into(), value.into());
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_annotation(key.into(), value.into());
        self
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn flag(&self) -> &Flag {
        &self.flag
    }

    /// Scope identifier, empty when unscoped
    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.timestamp = timestamp;
    }

    pub fn set_flag(&mut self, flag: Flag) {
        self.flag = flag;
    }

    pub fn set_entity(&mut self, entity: impl Into<String>) {
        self.entity = entity.into();
    }

    pub fn has_labels(&self) -> bool {
        self.labels.is_some()
    }

    pub fn has_annotations(&self) -> bool {
        self.annotations.is_some()
    }
}

impl EventHeadings for EventMeta {
    fn headings(&self) -> &[String] {
        &self.headings
    }

    fn set_headings(&mut self, headings: Vec<String>) {
        self.headings = headings;
    }
}

impl EventLabels for EventMeta {
    fn labels(&self) -> &Fields {
        self.labels.as_ref().unwrap_or(&EMPTY_FIELDS)
    }

    fn add_label(&mut self, key: String, value: String) {
        self.labels.get_or_insert_with(Fields::new).insert(key, value);
    }
}

impl EventAnnotations for EventMeta {
    fn annotations(&self) -> &Fields {
        self.annotations.as_ref().unwrap_or(&EMPTY_FIELDS)
    }

    fn add_annotation(&mut self, key: String, value: String) {
        self.annotations
            .get_or_insert_with(Fields::new)
            .insert(key, value);
    }
}

#[cfg(test)]
#[path = "meta_tests.rs"]
mod tests;
