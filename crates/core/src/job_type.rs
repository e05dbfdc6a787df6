// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job type identifiers

use crate::error::CapabilityError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The category of work a submitter requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobType {
    Web,
    Telemetry,
    Tiktok,
    /// General Twitter scraping, using the best available auth per capability
    Twitter,
    /// Twitter scraping with account credentials
    TwitterCredential,
    /// Twitter scraping with API keys
    TwitterApi,
    /// Twitter scraping through Apify
    TwitterApify,
    Linkedin,
    Reddit,
}

impl JobType {
    /// Every job type, in canonical order
    pub const ALL: [JobType; 9] = [
        JobType::Web,
        JobType::Telemetry,
        JobType::Tiktok,
        JobType::Twitter,
        JobType::TwitterCredential,
        JobType::TwitterApi,
        JobType::TwitterApify,
        JobType::Linkedin,
        JobType::Reddit,
    ];

    /// Wire name of this job type
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Web => "web",
            JobType::Telemetry => "telemetry",
            JobType::Tiktok => "tiktok",
            JobType::Twitter => "twitter",
            JobType::TwitterCredential => "twitter-credential",
            JobType::TwitterApi => "twitter-api",
            JobType::TwitterApify => "twitter-apify",
            JobType::Linkedin => "linkedin",
            JobType::Reddit => "reddit",
        }
    }

    /// Check if this is one of the Twitter job types
    pub fn is_twitter(&self) -> bool {
        matches!(
            self,
            JobType::Twitter
                | JobType::TwitterCredential
                | JobType::TwitterApi
                | JobType::TwitterApify
        )
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobType {
    type Err = CapabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|job_type| job_type.as_str() == s)
            .ok_or_else(|| CapabilityError::UnknownJobType(s.to_string()))
    }
}

impl Serialize for JobType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JobType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "job_type_tests.rs"]
mod tests;
