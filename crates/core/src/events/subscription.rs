// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flag pattern matching and subscriptions

use crate::flag::Flag;
use std::fmt;

/// Pattern for matching event flags
/// Supports:
///   - Exact: "db.query"
///   - Single wildcard: "http.*" matches "http.response", "http.request"
///   - Remainder: "db.**" matches every flag under "db"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagPattern(String);

impl FlagPattern {
    pub fn new(pattern: &str) -> Self {
        Self(pattern.to_string())
    }

    /// Pattern matching every flag
    pub fn any() -> Self {
        Self::new("**")
    }

    /// Check if this pattern matches a flag
    pub fn matches(&self, flag: &Flag) -> bool {
        // Empty pattern matches nothing
        if self.0.is_empty() {
            return false;
        }

        if self.0 == "*" || self.0 == "**" {
            return true;
        }

        let pattern_parts: Vec<&str> = self.0.split('.').collect();
        let flag_parts: Vec<&str> = flag.as_str().split('.').collect();

        Self::match_segments(&pattern_parts, &flag_parts)
    }

    fn match_segments(pattern: &[&str], flag: &[&str]) -> bool {
        match (pattern.first(), flag.first()) {
            (None, None) => true,
            (Some(&"**"), _) => true,
            (Some(&"*"), Some(_)) => Self::match_segments(&pattern[1..], &flag[1..]),
            (Some(p), Some(f)) if *p == *f => Self::match_segments(&pattern[1..], &flag[1..]),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Flag> for FlagPattern {
    fn from(flag: &Flag) -> Self {
        Self::new(flag.as_str())
    }
}

/// Subscriber handle for unsubscribing
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub String);

impl SubscriberId {
    /// Fresh random id for anonymous listeners
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A subscription to specific flag patterns
#[derive(Clone, Debug)]
pub struct Subscription {
    pub id: SubscriberId,
    pub patterns: Vec<FlagPattern>,
    pub description: String,
}

impl Subscription {
    pub fn new(
        id: impl Into<String>,
        patterns: Vec<FlagPattern>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: SubscriberId(id.into()),
            patterns,
            description: description.into(),
        }
    }

    /// Anonymous subscription to every flag
    pub fn all() -> Self {
        Self {
            id: SubscriberId::generate(),
            patterns: vec![FlagPattern::any()],
            description: String::new(),
        }
    }

    /// Check if any pattern matches the flag
    pub fn matches(&self, flag: &Flag) -> bool {
        self.patterns.iter().any(|p| p.matches(flag))
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
