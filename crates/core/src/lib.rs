// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! evlog-core: structured event logging substrate
//!
//! This crate provides:
//! - A typed event model with shared metadata and opt-in capabilities
//! - Text and JSON rendering through pluggable formatters
//! - A dispatcher that narrows listeners to the event types they want
//! - A flag-filtering logger and a JSON-lines sink

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod clock;
pub mod config;
pub mod event;
pub mod events;
pub mod flag;
pub mod format;
pub mod json;
pub mod logger;
pub mod message;
pub mod meta;
pub mod query;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, LoggerConfig};
pub use event::{
    Event, EventAnnotations, EventHeadings, EventLabels, Fields, JsonWritable, TextWritable,
};
pub use events::{
    any_listener, maybe_trigger, typed_listener, Dispatcher, EventRecord, FlagPattern,
    read_records, JsonLinesSink, Listener, SinkError, SubscriberId, Subscription, Triggerable,
};
pub use flag::{Flag, FlagParseError, Flags};
pub use format::{
    Color, JsonOutputFormatter, OutputFormat, TextFormatter, TextOutputFormatter,
    TimestampFormatError, WriteFormatter,
};
pub use json::JsonObj;
pub use logger::Logger;
pub use message::MessageEvent;
pub use meta::EventMeta;
pub use query::{EventError, QueryEvent};

// Producers take the cancellation token type from here
pub use tokio_util::sync::CancellationToken;
