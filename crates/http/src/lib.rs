// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! evlog-http: response logging for HTTP clients
//!
//! Clients call [`ResponseHook::on_response`] once a call completes; the hook
//! builds a [`ResponseEvent`] and hands it to whatever logger it was given.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod hook;
mod response;

pub use hook::{HttpResponse, ResponseHook, MAX_LOG_BYTES};
pub use response::{RequestInfo, ResponseEvent, ResponseInfo, RESPONSE};
