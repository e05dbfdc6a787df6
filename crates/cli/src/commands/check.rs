// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jg check` - Resolve job arguments and report the result

use crate::error::JgError;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use jg_args::{Dispatcher, ResolvedArguments};
use serde::Serialize;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Job type (web, telemetry, tiktok, twitter, linkedin, reddit, ...)
    pub job_type: String,

    /// Read the argument object from a file instead of stdin
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Worker capability configuration (TOML)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    #[arg(long, short, value_enum, default_value_t)]
    pub output: OutputFormat,
}

pub fn check(args: CheckArgs) -> Result<()> {
    let matrix = super::load_matrix(args.config.as_deref())?;
    let json = read_arguments(args.file.as_ref())?;

    let dispatcher = Dispatcher::new(matrix);
    let resolved = dispatcher
        .resolve_json(&args.job_type, &json)
        .map_err(|e| JgError::resolve_failed(&args.job_type, &e))?;

    output::print(&CheckReport(resolved), args.output)
}

fn read_arguments(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .context("failed to read arguments from stdin")?;
            Ok(json)
        }
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct CheckReport(ResolvedArguments);

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolved = &self.0;
        let arguments = serde_json::to_string(resolved.arguments()).map_err(|_| fmt::Error)?;
        writeln!(
            f,
            "ok: {} {} ({})",
            resolved.job_type(),
            resolved.capability(),
            resolved.arguments().schema()
        )?;
        write!(f, "{}", arguments)
    }
}
