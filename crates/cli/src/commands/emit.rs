// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `evlog emit <kind>` - Emit a single event

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use evlog_core::event::{EventAnnotations, EventHeadings, EventLabels};
use evlog_core::{
    maybe_trigger, CancellationToken, Event, EventMeta, Flag, Logger, MessageEvent, QueryEvent,
};
use evlog_http::{RequestInfo, ResponseEvent, ResponseInfo};
use std::time::Duration;

#[derive(Args)]
pub struct EmitArgs {
    #[command(subcommand)]
    pub command: EmitCommand,
}

#[derive(Subcommand)]
pub enum EmitCommand {
    /// A database query
    Query(QueryArgs),
    /// A plain text message
    Message(MessageArgs),
    /// A completed HTTP call
    Response(ResponseArgs),
}

/// Metadata any event accepts
#[derive(Args, Default)]
pub struct MetaArgs {
    /// Heading shown before the event text (repeatable)
    #[arg(long = "heading")]
    pub headings: Vec<String>,

    /// Label as key=value (repeatable)
    #[arg(long = "tag", value_parser = parse_key_val)]
    pub tags: Vec<(String, String)>,

    /// Annotation as key=value (repeatable)
    #[arg(long = "annotation", value_parser = parse_key_val)]
    pub annotations: Vec<(String, String)>,
}

impl MetaArgs {
    fn apply(self, meta: &mut EventMeta) {
        if !self.headings.is_empty() {
            meta.set_headings(self.headings);
        }
        for (key, value) in self.tags {
            meta.add_label(key, value);
        }
        for (key, value) in self.annotations {
            meta.add_annotation(key, value);
        }
    }
}

#[derive(Args)]
pub struct QueryArgs {
    /// Query text
    #[arg(default_value = "")]
    pub body: String,

    /// Database engine, e.g. postgres
    #[arg(long, default_value = "")]
    pub engine: String,

    #[arg(long, default_value = "")]
    pub database: String,

    /// Query label, e.g. get_user
    #[arg(long, default_value = "")]
    pub label: String,

    /// How long the query took, e.g. 15ms
    #[arg(long, value_parser = humantime::parse_duration, default_value = "0s")]
    pub elapsed: Duration,

    /// Mark the query as failed with this error
    #[arg(long)]
    pub error: Option<String>,

    #[command(flatten)]
    pub meta: MetaArgs,
}

#[derive(Args)]
pub struct MessageArgs {
    pub text: String,

    #[arg(long, default_value = "info")]
    pub flag: String,

    #[command(flatten)]
    pub meta: MetaArgs,
}

#[derive(Args)]
pub struct ResponseArgs {
    #[arg(long, default_value = "GET")]
    pub method: String,

    #[arg(long)]
    pub url: String,

    #[arg(long)]
    pub status: u16,

    #[arg(long, value_parser = humantime::parse_duration, default_value = "0s")]
    pub elapsed: Duration,

    #[arg(long)]
    pub content_type: Option<String>,

    #[arg(long)]
    pub content_length: Option<u64>,

    /// Response body to attach
    #[arg(long)]
    pub body: Option<String>,

    #[command(flatten)]
    pub meta: MetaArgs,
}

pub fn run(ctx: &CancellationToken, logger: &Logger, args: EmitArgs) -> Result<()> {
    let event = build(args.command)?;
    maybe_trigger(ctx, Some(logger), event.as_ref());
    Ok(())
}

pub fn build(command: EmitCommand) -> Result<Box<dyn Event>> {
    Ok(match command {
        EmitCommand::Query(args) => {
            let mut event = QueryEvent::new(args.body, args.elapsed)
                .with_engine(args.engine)
                .with_database(args.database)
                .with_query_label(args.label);
            if let Some(error) = args.error {
                event = event.with_err(error);
            }
            args.meta.apply(event.meta_mut());
            Box::new(event)
        }
        EmitCommand::Message(args) => {
            let flag = args.flag.trim();
            if flag.is_empty() || flag.contains(char::is_whitespace) {
                bail!("invalid flag: `{}`", args.flag);
            }
            let mut event = MessageEvent::new(Flag::new(flag), args.text);
            args.meta.apply(event.meta_mut());
            Box::new(event)
        }
        EmitCommand::Response(args) => {
            let mut info = ResponseInfo::new(args.status);
            if let Some(length) = args.content_length {
                info = info.with_content_length(length);
            }
            if let Some(content_type) = args.content_type {
                info = info.with_content_type(content_type);
            }
            let mut event =
                ResponseEvent::new(RequestInfo::new(args.method, args.url), info, args.elapsed);
            if let Some(body) = args.body {
                event = event.with_body(body);
            }
            args.meta.apply(event.meta_mut());
            Box::new(event)
        }
    })
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{s}`"))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod tests;
