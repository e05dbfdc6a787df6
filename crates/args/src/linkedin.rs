// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! LinkedIn arguments

use crate::{FieldError, JobArguments, ValidationErrors};
use chrono::{DateTime, Utc};
use jg_core::{Capability, CapabilityError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedinArguments {
    #[serde(rename = "type")]
    pub query_type: String,
    /// Search keywords, or a username for profile lookups
    pub query: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub public_identifier: String,
    /// Connection degrees to search: "F", "S", "O". Empty means all.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub network_filters: Vec<String>,
    pub max_results: i64,
    pub start: i64,
}

impl JobArguments for LinkedinArguments {
    const SCHEMA: &'static str = "linkedin";

    fn normalize(&mut self) {
        self.query_type = self.query_type.to_lowercase();
    }

    fn fill_capability(&mut self, capability: Capability) -> bool {
        if !self.query_type.is_empty() {
            return false;
        }
        self.query_type = capability.as_str().to_string();
        true
    }

    fn capability(&self) -> Result<Option<Capability>, CapabilityError> {
        Capability::parse_optional(&self.query_type)
    }

    fn validate(&self, _now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        if self.max_results < 0 {
            errors.push(FieldError::MaxResultsNegative(self.max_results));
        }
        if self.start < 0 {
            errors.push(FieldError::StartNegative(self.start));
        }
        ValidationErrors::check(errors)
    }
}
