//! Sink and replay specs

use crate::prelude::*;

fn seed(project: &Project) {
    project
        .evlog()
        .args(PLAIN)
        .args(&[
            "--sink", "events.jsonl", "emit", "query", "--engine", "postgres", "--label",
            "get_user", "--elapsed", "15ms",
        ])
        .passes();
    project
        .evlog()
        .args(PLAIN)
        .args(&["--sink", "events.jsonl", "emit", "message", "--tag", "run=1", "done"])
        .passes();
}

#[test]
fn sink_records_every_event() {
    let project = Project::empty();
    seed(&project);

    let contents = project.read("events.jsonl");
    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["sequence"], 1);
    assert_eq!(lines[0]["flag"], "db.query");
    assert_eq!(lines[0]["fields"]["queryLabel"], "get_user");
    assert_eq!(lines[1]["sequence"], 2);
    assert_eq!(lines[1]["labels"]["run"], "1");
}

#[test]
fn replay_prints_stored_events() {
    let project = Project::empty();
    seed(&project);

    project
        .evlog()
        .args(PLAIN)
        .args(&["replay", "events.jsonl"])
        .passes()
        .stdout_eq(concat!(
            "[db.query] body= database= elapsed=15 engine=postgres err=null queryLabel=get_user\n",
            "[info] done run=1\n",
        ));
}

#[test]
fn replay_filters_by_flag_pattern() {
    let project = Project::empty();
    seed(&project);

    project
        .evlog()
        .args(PLAIN)
        .args(&["replay", "events.jsonl", "--flag", "db.*"])
        .passes()
        .stdout_has("queryLabel=get_user")
        .stdout_lacks("[info]");
}

#[test]
fn replay_after_sequence() {
    let project = Project::empty();
    seed(&project);

    project
        .evlog()
        .args(PLAIN)
        .args(&["replay", "events.jsonl", "--after", "1"])
        .passes()
        .stdout_eq("[info] done run=1\n");
}

#[test]
fn replay_as_json_keeps_fields() {
    let project = Project::empty();
    seed(&project);

    let run = project
        .evlog()
        .args(&["--format", "json", "replay", "events.jsonl"])
        .passes();

    let lines = run.stdout_json();
    assert_eq!(lines[0]["engine"], "postgres");
    assert_eq!(lines[0]["elapsed"], 15);
    assert_eq!(lines[1]["text"], "done");
    assert_eq!(lines[1]["labels"]["run"], "1");
}
