// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Telemetry arguments (the job carries no parameters)

use crate::{JobArguments, ValidationErrors};
use chrono::{DateTime, Utc};
use jg_core::{Capability, CapabilityError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryArguments {}

impl JobArguments for TelemetryArguments {
    const SCHEMA: &'static str = "telemetry";

    fn capability(&self) -> Result<Option<Capability>, CapabilityError> {
        Ok(Some(Capability::Telemetry))
    }

    fn validate(&self, _now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        Ok(())
    }
}
