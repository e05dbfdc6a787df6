// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TikTok arguments.
//!
//! The TikTok job type has one schema per capability: transcription of a
//! single video, search by query, and trending listings.

use crate::{FieldError, JobArguments, ValidationErrors};
use chrono::{DateTime, Utc};
use jg_core::{Capability, CapabilityError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Countries the trending listing is available for
pub const TIKTOK_COUNTRY_CODES: &[&str] = &[
    "AU", "BR", "CA", "EG", "FR", "DE", "ID", "IL", "IT", "JP", "MY", "PH", "RU", "SA", "SG", "KR",
    "ES", "TW", "TH", "TR", "AE", "GB", "US", "VN",
];
pub const TIKTOK_SORT_OPTIONS: &[&str] = &["trending", "like", "comment", "repost"];
pub const TIKTOK_PERIODS: &[&str] = &["7", "30"];

pub const TIKTOK_DEFAULT_COUNTRY_CODE: &str = "US";
pub const TIKTOK_DEFAULT_SORT_BY: &str = "trending";
pub const TIKTOK_DEFAULT_PERIOD: &str = "7";
pub const TIKTOK_DEFAULT_MAX_ITEMS: i64 = 20;

// Language tags like "en-us" or "eng-us", checked after lower-casing
#[allow(clippy::expect_used)]
static LANGUAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}-[a-z]{2}$").expect("constant regex pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TikTokTranscriptionArguments {
    pub video_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language: String,
}

impl TikTokTranscriptionArguments {
    /// Language code if one was given
    pub fn language(&self) -> Option<&str> {
        (!self.language.is_empty()).then_some(self.language.as_str())
    }
}

impl JobArguments for TikTokTranscriptionArguments {
    const SCHEMA: &'static str = "tiktok transcription";

    fn normalize(&mut self) {
        self.language = self.language.to_lowercase();
    }

    fn capability(&self) -> Result<Option<Capability>, CapabilityError> {
        Ok(Some(Capability::Transcription))
    }

    fn validate(&self, _now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self.video_url.is_empty() {
            errors.push(FieldError::VideoUrlRequired);
        } else {
            match url::Url::parse(&self.video_url) {
                Ok(parsed) if parsed.host_str().is_some_and(is_tiktok_host) => {}
                Ok(_) => errors.push(FieldError::VideoUrlNotTiktok(self.video_url.clone())),
                Err(_) => errors.push(FieldError::VideoUrlInvalid(self.video_url.clone())),
            }
        }

        if let Some(language) = self.language() {
            if !LANGUAGE_PATTERN.is_match(language) {
                errors.push(FieldError::LanguageInvalid(language.to_string()));
            }
        }

        ValidationErrors::check(errors)
    }
}

fn is_tiktok_host(host: &str) -> bool {
    host == "tiktok.com" || host.ends_with(".tiktok.com")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TikTokSearchByQueryArguments {
    #[serde(rename = "type")]
    pub query_type: String,
    pub search: Vec<String>,
    pub start_urls: Vec<String>,
    pub max_items: u32,
    pub end_page: u32,
}

impl JobArguments for TikTokSearchByQueryArguments {
    const SCHEMA: &'static str = "tiktok search by query";

    fn normalize(&mut self) {
        self.query_type = self.query_type.to_lowercase();
    }

    fn apply_defaults(&mut self) {
        if self.query_type.is_empty() {
            self.query_type = Capability::SearchByQuery.as_str().to_string();
        }
    }

    fn capability(&self) -> Result<Option<Capability>, CapabilityError> {
        Ok(Some(Capability::SearchByQuery))
    }

    fn validate(&self, _now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        if self.search.is_empty() && self.start_urls.is_empty() {
            return Err(FieldError::SearchOrStartUrlsRequired.into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TikTokSearchByTrendingArguments {
    #[serde(rename = "type")]
    pub query_type: String,
    pub country_code: String,
    pub sort_by: String,
    pub period: String,
    pub max_items: i64,
}

impl JobArguments for TikTokSearchByTrendingArguments {
    const SCHEMA: &'static str = "tiktok search by trending";

    fn normalize(&mut self) {
        self.query_type = self.query_type.to_lowercase();
        self.country_code = self.country_code.to_uppercase();
        self.sort_by = self.sort_by.to_lowercase();
    }

    fn apply_defaults(&mut self) {
        if self.query_type.is_empty() {
            self.query_type = Capability::SearchByTrending.as_str().to_string();
        }
        if self.country_code.is_empty() {
            self.country_code = TIKTOK_DEFAULT_COUNTRY_CODE.to_string();
        }
        if self.sort_by.is_empty() {
            self.sort_by = TIKTOK_DEFAULT_SORT_BY.to_string();
        }
        if self.period.is_empty() {
            self.period = TIKTOK_DEFAULT_PERIOD.to_string();
        }
        if self.max_items == 0 {
            self.max_items = TIKTOK_DEFAULT_MAX_ITEMS;
        }
    }

    fn capability(&self) -> Result<Option<Capability>, CapabilityError> {
        Ok(Some(Capability::SearchByTrending))
    }

    fn validate(&self, _now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if !TIKTOK_COUNTRY_CODES.contains(&self.country_code.as_str()) {
            errors.push(FieldError::CountryCodeInvalid(self.country_code.clone()));
        }
        if !TIKTOK_SORT_OPTIONS.contains(&self.sort_by.as_str()) {
            errors.push(FieldError::SortByInvalid(self.sort_by.clone()));
        }
        if !TIKTOK_PERIODS.contains(&self.period.as_str()) {
            errors.push(FieldError::PeriodInvalid(self.period.clone()));
        }
        if self.max_items < 0 {
            errors.push(FieldError::MaxItemsNegative(self.max_items));
        }

        ValidationErrors::check(errors)
    }
}

#[cfg(test)]
#[path = "tiktok_tests.rs"]
mod tests;
