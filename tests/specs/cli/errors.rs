//! Error reporting specs

use crate::prelude::*;

#[test]
fn unknown_format_is_rejected() {
    Project::empty()
        .evlog()
        .args(&["--format", "yaml", "emit", "message", "hi"])
        .fails()
        .stderr_has("yaml");
}

#[test]
fn invalid_flag_expression_is_rejected() {
    Project::empty()
        .evlog()
        .args(&["--flags", "info,-", "emit", "message", "hi"])
        .fails()
        .stderr_has("invalid flag expression");
}

#[test]
fn missing_config_file_is_reported() {
    Project::empty()
        .evlog()
        .args(&["--config", "nope.toml", "emit", "message", "hi"])
        .fails()
        .stderr_has("nope.toml");
}

#[test]
fn replay_of_missing_file_fails() {
    Project::empty()
        .evlog()
        .args(&["replay", "missing.jsonl"])
        .fails()
        .stderr_has("sink file not found");
}

#[test]
fn tag_without_equals_is_rejected() {
    Project::empty()
        .evlog()
        .args(&["emit", "message", "--tag", "tenant", "hi"])
        .fails()
        .stderr_has("invalid key=value");
}
