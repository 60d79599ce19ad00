//! Configuration file specs

use crate::prelude::*;

#[test]
fn explicit_config_file_is_used() {
    let project = Project::empty();
    project.file(
        "evlog.toml",
        "format = \"json\"\nflags = \"all,-debug\"\n",
    );

    let run = project
        .evlog()
        .args(&["--config", "evlog.toml", "emit", "message", "hello"])
        .passes();
    assert_eq!(run.stdout_json()[0]["text"], "hello");

    project
        .evlog()
        .args(&["--config", "evlog.toml", "emit", "message", "--flag", "debug", "x"])
        .passes()
        .stdout_eq("");
}

#[test]
fn default_config_location_is_read() {
    let project = Project::empty();
    project.file(
        "xdg/evlog/config.toml",
        "no_color = true\nhide_timestamp = true\n",
    );

    project
        .evlog()
        .args(&["emit", "message", "from config"])
        .passes()
        .stdout_eq("[info] from config\n");
}

#[test]
fn command_line_beats_config_file() {
    let project = Project::empty();
    project.file("xdg/evlog/config.toml", "format = \"json\"\n");

    project
        .evlog()
        .args(PLAIN)
        .args(&["--format", "text", "emit", "message", "plain"])
        .passes()
        .stdout_eq("[info] plain\n");
}

#[test]
fn unknown_config_key_fails() {
    let project = Project::empty();
    project.file("evlog.toml", "colour = true\n");

    project
        .evlog()
        .args(&["--config", "evlog.toml", "emit", "message", "x"])
        .fails()
        .stderr_has("colour");
}

#[test]
fn bad_timestamp_format_fails_without_panicking() {
    let project = Project::empty();
    project.file("evlog.toml", "timestamp_format = \"%Q\"\n");

    project
        .evlog()
        .args(&["--config", "evlog.toml", "emit", "message", "x"])
        .fails()
        .stderr_has("invalid timestamp format");
}
