// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jg capabilities` - List what each job type may request

use crate::error::JgError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use jg_core::{Capability, CapabilityMatrix, JobType};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct CapabilitiesArgs {
    /// Only show this job type
    pub job_type: Option<String>,

    /// Worker capability configuration (TOML)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    #[arg(long, short, value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(Serialize)]
struct Entry {
    job_type: JobType,
    default: Option<Capability>,
    capabilities: Vec<Capability>,
}

impl Entry {
    fn new(matrix: &CapabilityMatrix, job_type: JobType) -> Self {
        Self {
            job_type,
            default: matrix.default_capability(job_type),
            capabilities: matrix.valid_capabilities(job_type).unwrap_or_default(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let caps: Vec<&str> = self.capabilities.iter().map(|c| c.as_str()).collect();
        write!(
            f,
            "{:<20} {} (default: {})",
            self.job_type.as_str(),
            caps.join(", "),
            self.default.map_or("-", |c| c.as_str())
        )
    }
}

pub fn capabilities(args: CapabilitiesArgs) -> Result<()> {
    let matrix = super::load_matrix(args.config.as_deref())?;

    let job_types = match &args.job_type {
        Some(name) => {
            let job_type: JobType = name.parse().map_err(|_| {
                JgError::new(format!("unknown job type '{}'", name))
                    .with_suggestion("List supported job types: jg capabilities")
            })?;
            if !matrix.supports(job_type) {
                return Err(JgError::new(format!(
                    "job type '{}' is not served by this worker",
                    job_type
                ))
                .into());
            }
            vec![job_type]
        }
        None => matrix.job_types(),
    };

    let entries: Vec<Entry> = job_types
        .into_iter()
        .map(|job_type| Entry::new(&matrix, job_type))
        .collect();
    output::print_list(&entries, args.output)
}
