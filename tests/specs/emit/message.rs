//! `evlog emit message` specs

use crate::prelude::*;

#[test]
fn message_defaults_to_info() {
    Project::empty()
        .evlog()
        .args(PLAIN)
        .args(&["emit", "message", "server listening"])
        .passes()
        .stdout_eq("[info] server listening\n");
}

#[test]
fn message_with_flag_and_heading() {
    Project::empty()
        .evlog()
        .args(PLAIN)
        .args(&[
            "emit", "message", "--flag", "warning", "--heading", "disk", "almost full",
        ])
        .passes()
        .stdout_eq("[warning] [disk] almost full\n");
}

#[test]
fn timestamp_is_shown_by_default() {
    let run = Project::empty()
        .evlog()
        .args(&["--no-color", "emit", "message", "hi"])
        .passes();

    let line = run.stdout();
    // 2024-01-01T00:00:00.000Z [info] hi
    assert!(line.ends_with(" [info] hi\n"), "line: {line}");
    assert!(line.contains('T') && line.split(' ').next().unwrap().ends_with('Z'));
}

#[test]
fn only_enabled_flags_are_printed() {
    Project::empty()
        .evlog()
        .args(PLAIN)
        .args(&["--flags", "error", "emit", "message", "--flag", "info", "ignored"])
        .passes()
        .stdout_eq("");
}

#[test]
fn environment_flags_apply() {
    Project::empty()
        .evlog()
        .env("LOG_FLAGS", "none")
        .args(PLAIN)
        .args(&["emit", "message", "ignored"])
        .passes()
        .stdout_eq("");
}
