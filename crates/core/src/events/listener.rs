// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener adapters

use crate::event::Event;
use std::sync::Arc;

/// A callback the dispatcher can offer any event to
pub type Listener = Arc<dyn Fn(&dyn Event) + Send + Sync>;

/// Wrap a callback for one concrete event type
///
/// Events of any other type are ignored; `listener` only ever sees an `E`.
pub fn typed_listener<E, F>(listener: F) -> Listener
where
    E: Event,
    F: Fn(&E) + Send + Sync + 'static,
{
    Arc::new(move |event: &dyn Event| {
        if let Some(typed) = event.downcast_ref::<E>() {
            listener(typed);
        }
    })
}

/// Wrap a callback that wants every event
pub fn any_listener<F>(listener: F) -> Listener
where
    F: Fn(&dyn Event) + Send + Sync + 'static,
{
    Arc::new(listener)
}
