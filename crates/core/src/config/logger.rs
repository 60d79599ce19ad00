// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger configuration
//!
//! Loaded from TOML, then optionally overridden from the environment.

use crate::flag::{FlagParseError, Flags};
use crate::format::{
    check_timestamp_format, JsonOutputFormatter, OutputFormat, TextOutputFormatter,
    TimestampFormatError, WriteFormatter,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_FLAGS: &str = "LOG_FLAGS";
pub const ENV_FORMAT: &str = "LOG_FORMAT";
pub const ENV_NO_COLOR: &str = "NO_COLOR";
pub const ENV_HIDE_TIMESTAMP: &str = "LOG_HIDE_TIMESTAMP";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
    #[error(transparent)]
    Flags(#[from] FlagParseError),
    #[error(transparent)]
    TimestampFormat(#[from] TimestampFormatError),
}

/// Settings for a `Logger`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Flag expression, e.g. `all,-debug`
    pub flags: String,
    pub format: OutputFormat,
    pub no_color: bool,
    pub hide_timestamp: bool,
    /// chrono format string for text output
    pub timestamp_format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            flags: "all".to_string(),
            format: OutputFormat::Text,
            no_color: false,
            hide_timestamp: false,
            timestamp_format: crate::format::DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Parse configuration from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.parsed_flags()?;
        check_timestamp_format(&config.timestamp_format)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` if it exists, otherwise defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides looked up through `lookup`
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(flags) = lookup(ENV_FLAGS) {
            Flags::parse(&flags)?;
            self.flags = flags;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = format.parse().map_err(ConfigError::UnknownFormat)?;
        }
        if lookup(ENV_NO_COLOR).is_some() {
            self.no_color = true;
        }
        if let Some(hide) = lookup(ENV_HIDE_TIMESTAMP) {
            self.hide_timestamp = matches!(hide.trim(), "1" | "true" | "yes");
        }
        Ok(self)
    }

    pub fn parsed_flags(&self) -> Result<Flags, ConfigError> {
        Ok(Flags::parse(&self.flags)?)
    }

    /// Output formatter for the configured format
    pub fn formatter(&self) -> Result<Box<dyn WriteFormatter>, ConfigError> {
        Ok(match self.format {
            OutputFormat::Text => Box::new(
                TextOutputFormatter::new()
                    .with_no_color(self.no_color)
                    .with_hide_timestamp(self.hide_timestamp)
                    .with_timestamp_format(self.timestamp_format.clone())?,
            ),
            OutputFormat::Json => Box::new(JsonOutputFormatter::new()),
        })
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
