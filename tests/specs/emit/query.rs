//! `evlog emit query` specs

use crate::prelude::*;

#[test]
fn successful_query_ends_with_elapsed() {
    Project::empty()
        .evlog()
        .args(PLAIN)
        .args(&[
            "emit", "query", "--engine", "postgres", "--label", "get_user", "--elapsed", "15ms",
        ])
        .passes()
        .stdout_eq("[db.query] [postgres:get_user](15ms)\n");
}

#[test]
fn failed_query_is_marked() {
    Project::empty()
        .evlog()
        .args(PLAIN)
        .args(&[
            "emit", "query", "--engine", "postgres", "--label", "get_user", "--elapsed", "15ms",
            "--error", "connection reset",
        ])
        .passes()
        .stdout_eq("[db.query] [postgres:get_user](15ms) failed\n");
}

#[test]
fn body_and_labels_follow_elapsed() {
    Project::empty()
        .evlog()
        .args(PLAIN)
        .args(&[
            "emit",
            "query",
            "--elapsed",
            "3ms",
            "--tag",
            "tenant=acme",
            "  select * from users  ",
        ])
        .passes()
        .stdout_eq("[db.query] (3ms) select * from users tenant=acme\n");
}

#[test]
fn json_output_has_query_fields() {
    let run = Project::empty()
        .evlog()
        .args(&[
            "--format", "json", "emit", "query", "--engine", "postgres", "--database", "accounts",
            "--label", "get_user", "--elapsed", "15ms", "select 1",
        ])
        .passes();

    let lines = run.stdout_json();
    assert_eq!(lines.len(), 1);
    let obj = &lines[0];
    assert_eq!(obj["flag"], "db.query");
    assert_eq!(obj["engine"], "postgres");
    assert_eq!(obj["database"], "accounts");
    assert_eq!(obj["queryLabel"], "get_user");
    assert_eq!(obj["body"], "select 1");
    assert_eq!(obj["elapsed"], 15);
    assert_eq!(obj["err"], serde_json::Value::Null);
    assert!(obj["_timestamp"].is_string());
}

#[test]
fn json_error_is_a_string() {
    let run = Project::empty()
        .evlog()
        .args(&["--format", "json", "emit", "query", "--error", "timeout"])
        .passes();

    assert_eq!(run.stdout_json()[0]["err"], "timeout");
}

#[test]
fn disabled_flag_prints_nothing() {
    Project::empty()
        .evlog()
        .args(PLAIN)
        .args(&["--flags", "all,-db.query", "emit", "query", "--label", "x"])
        .passes()
        .stdout_eq("");
}
