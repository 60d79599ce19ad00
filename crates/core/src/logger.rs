// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger: flag filtering, formatted output, and listener dispatch

use crate::config::{ConfigError, LoggerConfig};
use crate::event::Event;
use crate::events::{maybe_trigger, Dispatcher, Listener, SubscriberId, Subscription, Triggerable};
use crate::flag::{Flag, Flags};
use crate::format::{TextOutputFormatter, WriteFormatter};
use crate::message::MessageEvent;
use std::io::Write;
use std::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

type Output = Mutex<Box<dyn Write + Send>>;

/// Filters events by flag, writes them to an output, then dispatches them
///
/// Events with a disabled flag are dropped before either step. Output write
/// failures are logged and never reach the producer.
pub struct Logger {
    flags: RwLock<Flags>,
    dispatcher: Dispatcher,
    output: Option<Output>,
    formatter: Box<dyn WriteFormatter>,
}

impl Logger {
    /// Logger with every flag enabled, no output and no listeners
    pub fn new() -> Self {
        Self {
            flags: RwLock::new(Flags::all()),
            dispatcher: Dispatcher::new(),
            output: None,
            formatter: Box::new(TextOutputFormatter::new()),
        }
    }

    /// Logger writing to stdout as configured
    pub fn from_config(config: &LoggerConfig) -> Result<Self, ConfigError> {
        Ok(Self::new()
            .with_flags(config.parsed_flags()?)
            .with_boxed_formatter(config.formatter()?)
            .with_output(std::io::stdout()))
    }

    pub fn with_flags(self, flags: Flags) -> Self {
        *self.flags.write().unwrap_or_else(|e| e.into_inner()) = flags;
        self
    }

    pub fn with_output(mut self, output: impl Write + Send + 'static) -> Self {
        self.output = Some(Mutex::new(Box::new(output)));
        self
    }

    pub fn with_formatter(self, formatter: impl WriteFormatter + 'static) -> Self {
        self.with_boxed_formatter(Box::new(formatter))
    }

    pub fn with_boxed_formatter(mut self, formatter: Box<dyn WriteFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Share an existing dispatcher, e.g. one other loggers also feed
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn enable(&self, flag: Flag) {
        self.flags
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .enable(flag);
    }

    pub fn disable(&self, flag: Flag) {
        self.flags
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .disable(flag);
    }

    pub fn is_enabled(&self, flag: &Flag) -> bool {
        self.flags
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_enabled(flag)
    }

    /// Listen to every flag
    pub fn listen(&self, listener: Listener) -> SubscriberId {
        self.dispatcher.listen(listener)
    }

    pub fn subscribe(&self, subscription: Subscription, listener: Listener) -> SubscriberId {
        self.dispatcher.subscribe(subscription, listener)
    }

    pub fn unsubscribe(&self, id: &SubscriberId) -> bool {
        self.dispatcher.unsubscribe(id)
    }

    pub fn info(&self, ctx: &CancellationToken, text: impl Into<String>) {
        self.message(ctx, Flag::INFO, text);
    }

    pub fn debug(&self, ctx: &CancellationToken, text: impl Into<String>) {
        self.message(ctx, Flag::DEBUG, text);
    }

    pub fn warning(&self, ctx: &CancellationToken, text: impl Into<String>) {
        self.message(ctx, Flag::WARNING, text);
    }

    pub fn error(&self, ctx: &CancellationToken, text: impl Into<String>) {
        self.message(ctx, Flag::ERROR, text);
    }

    fn message(&self, ctx: &CancellationToken, flag: Flag, text: impl Into<String>) {
        if !self.is_enabled(&flag) {
            return;
        }
        maybe_trigger(ctx, Some(self), &MessageEvent::new(flag, text));
    }

    fn write(&self, event: &dyn Event) {
        let Some(output) = &self.output else {
            return;
        };
        let mut out = output.lock().unwrap_or_else(|e| e.into_inner());
        let result = self
            .formatter
            .write_formatted(&mut **out, event)
            .and_then(|()| out.flush());
        if let Err(e) = result {
            tracing::warn!(flag = %event.flag(), error = %e, "failed to write event");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Triggerable for Logger {
    fn trigger(&self, _ctx: &CancellationToken, event: &dyn Event) {
        if !self.is_enabled(event.flag()) {
            tracing::trace!(flag = %event.flag(), "flag disabled, event dropped");
            return;
        }
        self.write(event);
        self.dispatcher.dispatch(event);
    }

    fn has_listeners(&self) -> bool {
        self.output.is_some() || self.dispatcher.has_listeners()
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
