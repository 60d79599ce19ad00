//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    Project::empty()
        .evlog()
        .args(&["--help"])
        .passes()
        .stdout_has("emit")
        .stdout_has("replay");
}

#[test]
fn emit_help_lists_event_kinds() {
    Project::empty()
        .evlog()
        .args(&["emit", "--help"])
        .passes()
        .stdout_has("query")
        .stdout_has("message")
        .stdout_has("response");
}

#[test]
fn version_flag() {
    Project::empty()
        .evlog()
        .args(&["--version"])
        .passes()
        .stdout_has("evlog");
}
