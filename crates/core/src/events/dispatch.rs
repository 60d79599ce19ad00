// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatcher fanning events out to subscribed listeners

use super::listener::Listener;
use super::subscription::{SubscriberId, Subscription};
use super::trigger::Triggerable;
use crate::event::Event;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
struct Registration {
    subscription: Subscription,
    listener: Listener,
}

/// Routes events to matching listeners, synchronously and in registration order
///
/// The registration list is locked only to copy or change it. Listeners run
/// outside the lock, so a slow listener never blocks `subscribe` or another
/// dispatch.
pub struct Dispatcher {
    registrations: Arc<Mutex<Vec<Registration>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            registrations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a listener for the subscription's flag patterns
    ///
    /// Re-using an id replaces the earlier listener in place.
    pub fn subscribe(&self, subscription: Subscription, listener: Listener) -> SubscriberId {
        let id = subscription.id.clone();
        tracing::debug!(subscriber = %id, patterns = subscription.patterns.len(), "subscribe");

        let registration = Registration {
            subscription,
            listener,
        };
        let mut regs = self.registrations.lock().unwrap_or_else(|e| e.into_inner());
        match regs.iter_mut().find(|r| r.subscription.id == id) {
            Some(existing) => *existing = registration,
            None => regs.push(registration),
        }

        id
    }

    /// Register a listener for every flag under a generated id
    pub fn listen(&self, listener: Listener) -> SubscriberId {
        self.subscribe(Subscription::all(), listener)
    }

    /// Remove a listener, returning whether it was registered
    pub fn unsubscribe(&self, id: &SubscriberId) -> bool {
        let mut regs = self.registrations.lock().unwrap_or_else(|e| e.into_inner());
        let before = regs.len();
        regs.retain(|r| &r.subscription.id != id);
        let removed = regs.len() != before;
        tracing::debug!(subscriber = %id, removed, "unsubscribe");
        removed
    }

    /// Offer an event to every matching listener
    ///
    /// A panicking listener is logged and skipped; it never reaches the caller
    /// or the listeners after it.
    pub fn dispatch(&self, event: &dyn Event) {
        for reg in self.snapshot() {
            if !reg.subscription.matches(event.flag()) {
                continue;
            }
            let result = catch_unwind(AssertUnwindSafe(|| (reg.listener)(event)));
            if let Err(payload) = result {
                tracing::error!(
                    subscriber = %reg.subscription.id,
                    flag = %event.flag(),
                    panic = panic_message(payload.as_ref()),
                    "listener panicked"
                );
            }
        }
    }

    /// Get count of registered listeners
    pub fn listener_count(&self) -> usize {
        self.registrations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn has_listeners(&self) -> bool {
        self.listener_count() > 0
    }

    /// List subscription ids in registration order
    pub fn subscriptions(&self) -> Vec<SubscriberId> {
        self.registrations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|r| r.subscription.id.clone())
            .collect()
    }

    fn snapshot(&self) -> Vec<Registration> {
        self.registrations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Dispatcher {
    fn clone(&self) -> Self {
        Self {
            registrations: Arc::clone(&self.registrations),
        }
    }
}

impl Triggerable for Dispatcher {
    fn trigger(&self, _ctx: &CancellationToken, event: &dyn Event) {
        self.dispatch(event);
    }

    fn has_listeners(&self) -> bool {
        Dispatcher::has_listeners(self)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
