// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::message::MessageEvent;
use crate::query::QueryEvent;
use chrono::{TimeZone, Utc};
use std::time::Duration;

fn plain() -> TextOutputFormatter {
    TextOutputFormatter::new().with_no_color(true)
}

fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()
}

#[test]
fn line_has_timestamp_flag_and_text() {
    let event = MessageEvent::new(Flag::INFO, "started").with_timestamp(fixed_time());
    assert_eq!(
        plain().format_line(&event),
        "2024-05-06T07:08:09.000Z [info] started"
    );
}

#[test]
fn hide_timestamp_starts_with_flag() {
    let event = MessageEvent::new(Flag::INFO, "started");
    let line = plain().with_hide_timestamp(true).format_line(&event);
    assert_eq!(line, "[info] started");
}

#[test]
fn custom_timestamp_format() {
    let event = MessageEvent::new(Flag::INFO, "x").with_timestamp(fixed_time());
    let line = plain()
        .with_timestamp_format("%H:%M")
        .unwrap()
        .format_line(&event);
    assert_eq!(line, "07:08 [info] x");
}

#[test]
fn headings_and_labels_surround_text() {
    let event = MessageEvent::new(Flag::WARNING, "slow")
        .with_headings(["api", "v2"])
        .with_label("zone", "b")
        .with_label("app", "shop");
    let line = plain().with_hide_timestamp(true).format_line(&event);
    assert_eq!(line, "[warning] [api] [v2] slow app=shop zone=b");
}

#[test]
fn query_text_leading_space_is_not_doubled() {
    let event = QueryEvent::new("select 1", Duration::from_millis(15))
        .with_engine("postgres")
        .with_query_label("get_user");
    let line = plain().with_hide_timestamp(true).format_line(&event);
    assert_eq!(line, "[db.query] [postgres:get_user](15ms) select 1");
}

#[test]
fn query_without_label_gets_separator() {
    let event = QueryEvent::new("", Duration::from_millis(4));
    let line = plain().with_hide_timestamp(true).format_line(&event);
    assert_eq!(line, "[db.query] (4ms)");
}

#[test]
fn no_color_disables_styling() {
    assert_eq!(plain().colorize("failed", Color::Red), "failed");
}

#[test]
fn write_formatted_appends_newline() {
    let event = MessageEvent::new(Flag::ERROR, "boom");
    let mut out = Vec::new();
    plain()
        .with_hide_timestamp(true)
        .write_formatted(&mut out, &event)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[error] boom\n");
}

#[test]
fn flag_colors_by_category() {
    assert_eq!(flag_color(&Flag::ERROR), Color::Red);
    assert_eq!(flag_color(&Flag::FATAL), Color::Red);
    assert_eq!(flag_color(&Flag::WARNING), Color::Yellow);
    assert_eq!(flag_color(&Flag::QUERY), Color::Green);
}

#[test]
fn invalid_timestamp_format_is_rejected() {
    let err = plain().with_timestamp_format("%Q").unwrap_err();
    assert_eq!(err, TimestampFormatError("%Q".to_string()));
    assert!(check_timestamp_format(DEFAULT_TIMESTAMP_FORMAT).is_ok());
}

#[test]
fn unrenderable_timestamp_falls_back_to_rfc3339() {
    let formatter = TextOutputFormatter {
        timestamp_format: "%Q".to_string(),
        ..plain()
    };
    let event = MessageEvent::new(Flag::INFO, "x").with_timestamp(fixed_time());

    let mut out = Vec::new();
    formatter.write_formatted(&mut out, &event).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "2024-05-06T07:08:09.000Z [info] x\n"
    );
}
