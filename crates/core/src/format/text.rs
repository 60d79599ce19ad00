// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human readable event lines

use super::{Color, TextFormatter, WriteFormatter};
use crate::event::Event;
use crate::flag::Flag;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use std::io::Write;
use thiserror::Error;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// A chrono format string that cannot render timestamps
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp format: {0:?}")]
pub struct TimestampFormatError(pub String);

/// Reject format strings chrono would fail to render
pub fn check_timestamp_format(format: &str) -> Result<(), TimestampFormatError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(TimestampFormatError(format.to_string()));
    }
    Ok(())
}

/// Renders `<timestamp> [<flag>] [<heading>]... <text> key=value...`
#[derive(Debug, Clone)]
pub struct TextOutputFormatter {
    no_color: bool,
    hide_timestamp: bool,
    timestamp_format: String,
}

impl TextOutputFormatter {
    pub fn new() -> Self {
        Self {
            no_color: false,
            hide_timestamp: false,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    pub fn with_hide_timestamp(mut self, hide: bool) -> Self {
        self.hide_timestamp = hide;
        self
    }

    pub fn with_timestamp_format(
        mut self,
        format: impl Into<String>,
    ) -> Result<Self, TimestampFormatError> {
        let format = format.into();
        check_timestamp_format(&format)?;
        self.timestamp_format = format;
        Ok(self)
    }

    /// Render one line, without the trailing newline
    pub fn format_line(&self, event: &dyn Event) -> String {
        let mut line = String::new();

        if !self.hide_timestamp {
            let ts = render_timestamp(event.timestamp(), &self.timestamp_format);
            line.push_str(&self.colorize(&ts, Color::Gray));
            line.push(' ');
        }

        let flag = format!("[{}]", event.flag());
        line.push_str(&self.colorize(&flag, flag_color(event.flag())));

        if let Some(headings) = event.as_headings() {
            for heading in headings.headings() {
                line.push_str(" [");
                line.push_str(&self.colorize(heading, Color::Blue));
                line.push(']');
            }
        }

        if let Some(writable) = event.as_text_writable() {
            let mut text = String::new();
            writable.write_text(Some(self), &mut text);
            if !text.is_empty() {
                if !text.starts_with(char::is_whitespace) {
                    line.push(' ');
                }
                line.push_str(&text);
            }
        }

        if let Some(labels) = event.as_labels() {
            for (key, value) in labels.labels() {
                line.push(' ');
                line.push_str(&self.colorize(key, Color::Cyan));
                line.push('=');
                line.push_str(value);
            }
        }

        line
    }
}

impl Default for TextOutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormatter for TextOutputFormatter {
    fn colorize(&self, text: &str, color: Color) -> String {
        if self.no_color {
            return text.to_string();
        }
        text.color(to_colored(color)).to_string()
    }
}

impl WriteFormatter for TextOutputFormatter {
    fn write_formatted(&self, out: &mut dyn Write, event: &dyn Event) -> std::io::Result<()> {
        writeln!(out, "{}", self.format_line(event))
    }
}

// Falls back to RFC 3339 when the format fails to render
fn render_timestamp(ts: DateTime<Utc>, format: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    if write!(out, "{}", ts.format(format)).is_err() {
        return ts.to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    out
}

/// Color used for the `[flag]` segment
pub fn flag_color(flag: &Flag) -> Color {
    match flag.as_str() {
        "error" | "fatal" => Color::Red,
        "warning" => Color::Yellow,
        "debug" => Color::Magenta,
        "info" => Color::White,
        _ => Color::Green,
    }
}

fn to_colored(color: Color) -> colored::Color {
    match color {
        Color::Red => colored::Color::Red,
        Color::Green => colored::Color::Green,
        Color::Yellow => colored::Color::Yellow,
        Color::Blue => colored::Color::Blue,
        Color::Magenta => colored::Color::Magenta,
        Color::Cyan => colored::Color::Cyan,
        Color::White => colored::Color::White,
        Color::Gray => colored::Color::BrightBlack,
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
