// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a single value in the specified format
pub fn print<T: Serialize + std::fmt::Display>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// Print a list of items, one per line in text mode
pub fn print_list<T: Serialize + std::fmt::Display>(
    items: &[T],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for item in items {
                println!("{}", item);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
    }
    Ok(())
}
