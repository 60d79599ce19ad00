// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Global options and logger construction

use anyhow::{Context, Result};
use clap::Args;
use evlog_core::{Flags, JsonLinesSink, Logger, LoggerConfig, OutputFormat};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Config file [default: <config dir>/evlog/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Enabled flags, e.g. `all,-debug`
    #[arg(long, global = true)]
    pub flags: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Omit timestamps from text output
    #[arg(long, global = true)]
    pub hide_timestamp: bool,

    /// Also append events to this JSON-lines file
    #[arg(long, global = true)]
    pub sink: Option<PathBuf>,
}

impl GlobalArgs {
    /// Build the logger: config file, then environment, then flags given here
    pub fn logger(&self) -> Result<Logger> {
        let config = self.resolve(|key| std::env::var(key).ok())?;
        tracing::debug!(?config, "resolved logger config");

        let logger = Logger::from_config(&config)?;
        if let Some(path) = &self.sink {
            let sink = JsonLinesSink::open(path.clone())
                .with_context(|| format!("failed to open sink {}", path.display()))?;
            logger.listen(sink.into_listener());
        }
        Ok(logger)
    }

    fn resolve<F>(&self, env: F) -> Result<LoggerConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match (&self.config, default_config_path()) {
            (Some(path), _) => LoggerConfig::load(path)?,
            (None, Some(path)) => LoggerConfig::load_or_default(&path)?,
            (None, None) => LoggerConfig::default(),
        };
        let mut config = base.apply_env(env)?;

        if let Some(flags) = &self.flags {
            Flags::parse(flags)?;
            config.flags = flags.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.no_color {
            config.no_color = true;
        }
        if self.hide_timestamp {
            config.hide_timestamp = true;
        }
        Ok(config)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("evlog").join("config.toml"))
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
