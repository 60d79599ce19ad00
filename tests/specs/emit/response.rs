//! `evlog emit response` specs

use crate::prelude::*;

#[test]
fn response_line() {
    Project::empty()
        .evlog()
        .args(PLAIN)
        .args(&[
            "emit", "response", "--url", "https://example.com/users", "--status", "200",
            "--elapsed", "120ms",
        ])
        .passes()
        .stdout_eq("[http.response] GET https://example.com/users 200 (120ms)\n");
}

#[test]
fn response_body_is_appended() {
    Project::empty()
        .evlog()
        .args(PLAIN)
        .args(&[
            "emit", "response", "--method", "POST", "--url", "/users", "--status", "201",
            "--body", "{\"id\":7}",
        ])
        .passes()
        .stdout_eq("[http.response] POST /users 201 (0ns) {\"id\":7}\n");
}

#[test]
fn response_json() {
    let run = Project::empty()
        .evlog()
        .args(&[
            "--format",
            "json",
            "emit",
            "response",
            "--url",
            "/health",
            "--status",
            "503",
            "--content-type",
            "text/plain",
        ])
        .passes();

    let obj = &run.stdout_json()[0];
    assert_eq!(obj["flag"], "http.response");
    assert_eq!(obj["req"]["method"], "GET");
    assert_eq!(obj["res"]["statusCode"], 503);
    assert_eq!(obj["res"]["contentType"], "text/plain");
    assert_eq!(obj["body"], serde_json::Value::Null);
}
