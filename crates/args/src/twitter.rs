// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Twitter arguments, shared by every Twitter job type

use crate::{FieldError, JobArguments, ValidationErrors};
use chrono::{DateTime, Utc};
use jg_core::{Capability, CapabilityError};
use serde::{Deserialize, Serialize};

/// Operations that return profiles, spaces or trends rather than tweets
const NON_TWEET_OPERATIONS: &[Capability] = &[
    Capability::SearchByProfile,
    Capability::GetRetweeters,
    Capability::GetProfileById,
    Capability::GetById,
    Capability::GetSpace,
    Capability::GetTrends,
    Capability::GetFollowing,
    Capability::GetFollowers,
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterArguments {
    #[serde(rename = "type")]
    pub query_type: String,
    /// Search query, username or id depending on the operation
    pub query: String,
    pub count: i64,
    /// ISO 8601 lower bound, passed through unparsed
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end_time: String,
    pub max_results: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_cursor: String,
}

impl TwitterArguments {
    pub fn is_non_tweet_operation(&self) -> bool {
        matches!(
            self.capability(),
            Ok(Some(capability)) if NON_TWEET_OPERATIONS.contains(&capability)
        )
    }
}

impl JobArguments for TwitterArguments {
    const SCHEMA: &'static str = "twitter";

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
        if self.count < 0 {
            errors.push(FieldError::CountNegative(self.count));
        }
        if self.max_results < 0 {
            errors.push(FieldError::MaxResultsNegative(self.max_results));
        }
        ValidationErrors::check(errors)
    }
}

#[cfg(test)]
#[path = "twitter_tests.rs"]
mod tests;
