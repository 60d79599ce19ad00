// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event flags and the enabled-flag set
//!
//! A flag is the coarse category of an event (`info`, `db.query`, ...).
//! `Flags` decides which categories a logger lets through:
//!   - `all` enables everything
//!   - `none` disables everything
//!   - `name` enables one flag
//!   - `-name` disables one flag, even under `all`

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

/// Category tag carried by every event
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flag(Cow<'static, str>);

impl Flag {
    pub const INFO: Flag = Flag::from_static("info");
    pub const DEBUG: Flag = Flag::from_static("debug");
    pub const WARNING: Flag = Flag::from_static("warning");
    pub const ERROR: Flag = Flag::from_static("error");
    pub const FATAL: Flag = Flag::from_static("fatal");
    pub const QUERY: Flag = Flag::from_static("db.query");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Flag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Flag {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Error returned when a flag expression cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid flag expression: {0:?}")]
pub struct FlagParseError(pub String);

/// The set of enabled flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    all: bool,
    none: bool,
    enabled: HashSet<Flag>,
    disabled: HashSet<Flag>,
}

impl Flags {
    /// Every flag enabled
    pub fn all() -> Self {
        Self {
            all: true,
            none: false,
            enabled: HashSet::new(),
            disabled: HashSet::new(),
        }
    }

    /// Every flag disabled
    pub fn none() -> Self {
        Self {
            all: false,
            none: true,
            enabled: HashSet::new(),
            disabled: HashSet::new(),
        }
    }

    /// Only the given flags enabled
    pub fn only(flags: impl IntoIterator<Item = Flag>) -> Self {
        Self {
            all: false,
            none: false,
            enabled: flags.into_iter().collect(),
            disabled: HashSet::new(),
        }
    }

    /// Parse a comma separated flag expression, e.g. `all,-debug`
    pub fn parse(expr: &str) -> Result<Self, FlagParseError> {
        let mut flags = Self::only([]);
        for part in expr.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part {
                "all" => {
                    flags.all = true;
                    flags.none = false;
                }
                "none" => {
                    flags.all = false;
                    flags.none = true;
                    flags.enabled.clear();
                }
                _ => {
                    let (disable, name) = match part.strip_prefix('-') {
                        Some(name) => (true, name.trim()),
                        None => (false, part),
                    };
                    if name.is_empty() || name.contains(char::is_whitespace) {
                        return Err(FlagParseError(expr.to_string()));
                    }
                    if disable {
                        flags.disable(Flag::new(name));
                    } else {
                        flags.enable(Flag::new(name));
                    }
                }
            }
        }
        Ok(flags)
    }

    pub fn enable(&mut self, flag: Flag) {
        self.none = false;
        self.disabled.remove(&flag);
        self.enabled.insert(flag);
    }

    pub fn disable(&mut self, flag: Flag) {
        self.enabled.remove(&flag);
        self.disabled.insert(flag);
    }

    /// Check whether events with this flag should be let through
    pub fn is_enabled(&self, flag: &Flag) -> bool {
        if self.none || self.disabled.contains(flag) {
            return false;
        }
        self.all || self.enabled.contains(flag)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::all()
    }
}

impl std::str::FromStr for Flags {
    type Err = FlagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "flag_tests.rs"]
mod tests;
