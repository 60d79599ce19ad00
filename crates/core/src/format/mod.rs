// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting of events into output lines
//!
//! This module provides:
//! - `TextFormatter` - the styling hook event text rendering calls back into
//! - `TextOutputFormatter` - one human readable line per event
//! - `JsonOutputFormatter` - one JSON object per event

mod json;
mod text;

pub use json::JsonOutputFormatter;
pub use text::{
    check_timestamp_format, flag_color, TextOutputFormatter, TimestampFormatError,
    DEFAULT_TIMESTAMP_FORMAT,
};

use crate::event::Event;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Color tags understood by formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

/// Styling hook supplied to `TextWritable::write_text`
pub trait TextFormatter {
    fn colorize(&self, text: &str, color: Color) -> String;
}

/// Colorize through `tf` if one is supplied, otherwise leave the text plain
pub fn colorize(tf: Option<&dyn TextFormatter>, text: &str, color: Color) -> String {
    match tf {
        Some(tf) => tf.colorize(text, color),
        None => text.to_string(),
    }
}

/// Writes a fully formatted event to an output
pub trait WriteFormatter: Send + Sync {
    fn write_formatted(&self, out: &mut dyn Write, event: &dyn Event) -> std::io::Result<()>;
}

/// Output format selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Brackets;

    impl TextFormatter for Brackets {
        fn colorize(&self, text: &str, color: Color) -> String {
            format!("<{:?}>{}</{:?}>", color, text, color)
        }
    }

    #[test]
    fn colorize_without_formatter_is_plain() {
        assert_eq!(colorize(None, "failed", Color::Red), "failed");
    }

    #[test]
    fn colorize_delegates_to_formatter() {
        assert_eq!(
            colorize(Some(&Brackets), "failed", Color::Red),
            "<Red>failed</Red>"
        );
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" text ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("yaml".parse::<OutputFormat>(), Err("yaml".to_string()));
    }
}
