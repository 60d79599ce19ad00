// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `evlog replay <file>` - Print events stored in a sink file

use anyhow::{bail, Context, Result};
use clap::Args;
use evlog_core::{maybe_trigger, read_records, CancellationToken, EventRecord, FlagPattern, Logger};
use std::path::PathBuf;

#[derive(Args)]
pub struct ReplayArgs {
    /// JSON-lines file written with --sink
    pub file: PathBuf,

    /// Only records whose flag matches, e.g. `db.*`
    #[arg(long)]
    pub flag: Option<String>,

    /// Only records after this sequence number
    #[arg(long, default_value_t = 0)]
    pub after: u64,
}

pub fn run(ctx: &CancellationToken, logger: &Logger, args: ReplayArgs) -> Result<()> {
    if !args.file.exists() {
        bail!("sink file not found: {}", args.file.display());
    }
    let records = read_records(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let pattern = args
        .flag
        .as_deref()
        .map(FlagPattern::new)
        .unwrap_or_else(FlagPattern::any);
    let selected = select(records, &pattern, args.after);
    tracing::debug!(count = selected.len(), pattern = pattern.as_str(), "replaying records");

    for record in &selected {
        maybe_trigger(ctx, Some(logger), record);
    }
    Ok(())
}

fn select(records: Vec<EventRecord>, pattern: &FlagPattern, after: u64) -> Vec<EventRecord> {
    records
        .into_iter()
        .filter(|r| r.sequence > after && pattern.matches(&r.flag))
        .collect()
}
