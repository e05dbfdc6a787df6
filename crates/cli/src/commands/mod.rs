// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod capabilities;
pub mod check;

use anyhow::{Context, Result};
use jg_core::{CapabilityMatrix, WorkerCapabilities};
use std::path::Path;

/// The standard matrix, restricted by a worker configuration if given
pub fn load_matrix(config: Option<&Path>) -> Result<CapabilityMatrix> {
    let base = CapabilityMatrix::standard();
    let Some(path) = config else {
        return Ok(base);
    };

    let worker = WorkerCapabilities::load(path)?;
    let matrix = worker
        .matrix(&base)
        .with_context(|| format!("invalid worker configuration {}", path.display()))?;
    tracing::debug!(config = %path.display(), job_types = matrix.job_types().len(), "loaded worker capabilities");
    Ok(matrix)
}
