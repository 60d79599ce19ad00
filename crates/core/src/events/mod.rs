// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event delivery
//!
//! This module provides:
//! - `Dispatcher` - Route events to listeners subscribed by flag pattern
//! - `typed_listener` - Narrow a listener to one event type
//! - `maybe_trigger` - Conditional trigger for producers
//! - `JsonLinesSink` - Append-only record of delivered events

mod dispatch;
mod listener;
mod sink;
mod subscription;
mod trigger;

pub use dispatch::Dispatcher;
pub use listener::{any_listener, typed_listener, Listener};
pub use sink::{read_records, EventRecord, JsonLinesSink, SinkError};
pub use subscription::{FlagPattern, SubscriberId, Subscription};
pub use trigger::{maybe_trigger, Triggerable};
