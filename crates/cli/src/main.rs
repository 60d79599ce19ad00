// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! evlog - emit and replay structured log events

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{emit, replay};
use evlog_core::CancellationToken;
use settings::GlobalArgs;

#[derive(Parser)]
#[command(
    name = "evlog",
    version,
    about = "Structured event logging from the command line"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit a single event
    Emit(emit::EmitArgs),
    /// Print the events stored in a sink file
    Replay(replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let logger = cli.global.logger()?;
    let ctx = CancellationToken::new();

    match cli.command {
        Commands::Emit(args) => emit::run(&ctx, &logger, args),
        Commands::Replay(args) => replay::run(&ctx, &logger, args),
    }
}

/// Diagnostics go to stderr; stdout carries event output only
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
