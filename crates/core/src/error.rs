// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability lookup errors

use crate::{Capability, JobType};
use thiserror::Error;

/// Errors raised by the capability vocabulary and matrix
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("unknown job type: {0}")]
    UnknownJobType(String),
    #[error("unknown capability: {0}")]
    UnknownCapability(String),
    #[error(
        "capability '{capability}' is not valid for job type '{job_type}'. Valid capabilities: [{}]",
        join(.allowed)
    )]
    NotAllowed {
        capability: Capability,
        job_type: JobType,
        allowed: Vec<Capability>,
    },
}

fn join(caps: &[Capability]) -> String {
    caps.iter()
        .map(Capability::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
