// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conditional triggering for producers

use crate::event::Event;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Anything an event can be handed to
pub trait Triggerable: Send + Sync {
    /// Deliver `event`, synchronously
    fn trigger(&self, ctx: &CancellationToken, event: &dyn Event);

    /// Whether delivering would reach anyone at all
    fn has_listeners(&self) -> bool {
        true
    }
}

impl<T: Triggerable + ?Sized> Triggerable for Arc<T> {
    fn trigger(&self, ctx: &CancellationToken, event: &dyn Event) {
        (**self).trigger(ctx, event)
    }

    fn has_listeners(&self) -> bool {
        (**self).has_listeners()
    }
}

/// Trigger `event` unless there is nothing to do
///
/// Returns immediately when `log` is `None`, `ctx` is cancelled, or nothing is
/// listening, so producers can call this unconditionally. Cancellation is only
/// checked here, not during delivery.
pub fn maybe_trigger<T>(ctx: &CancellationToken, log: Option<&T>, event: &dyn Event)
where
    T: Triggerable + ?Sized,
{
    let Some(log) = log else {
        return;
    };
    if ctx.is_cancelled() {
        tracing::trace!(flag = %event.flag(), "context cancelled, event dropped");
        return;
    }
    if !log.has_listeners() {
        return;
    }
    log.trigger(ctx, event);
}
