// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Web scraping arguments

use crate::{FieldError, JobArguments, ValidationErrors};
use chrono::{DateTime, Utc};
use jg_core::{Capability, CapabilityError};
use serde::{Deserialize, Serialize};

pub const WEB_DEFAULT_MAX_PAGES: i64 = 1;
pub const WEB_DEFAULT_METHOD: &str = "GET";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebArguments {
    pub url: String,
    pub max_depth: i64,
    pub max_pages: i64,
}

impl WebArguments {
    /// Build the crawl request handed to the scraper
    pub fn to_scraper_request(&self) -> WebScraperRequest {
        WebScraperRequest {
            start_urls: vec![WebStartUrl {
                url: self.url.clone(),
                method: WEB_DEFAULT_METHOD.to_string(),
            }],
            max_crawl_depth: self.max_depth,
            max_crawl_pages: self.max_pages,
            respect_robots_txt_file: false,
            save_markdown: true,
        }
    }
}

impl JobArguments for WebArguments {
    const SCHEMA: &'static str = "web";

    fn apply_defaults(&mut self) {
        if self.max_pages == 0 {
            self.max_pages = WEB_DEFAULT_MAX_PAGES;
        }
    }

    fn capability(&self) -> Result<Option<Capability>, CapabilityError> {
        Ok(Some(Capability::Scraper))
    }

    fn validate(&self, _now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self.url.is_empty() {
            errors.push(FieldError::UrlRequired);
        } else {
            match url::Url::parse(&self.url) {
                Ok(_) => {}
                Err(url::ParseError::RelativeUrlWithoutBase) => {
                    errors.push(FieldError::UrlSchemeMissing)
                }
                Err(e) => errors.push(FieldError::UrlInvalid(e.to_string())),
            }
        }

        if self.max_depth < 0 {
            errors.push(FieldError::MaxDepthNegative(self.max_depth));
        }
        if self.max_pages < 1 {
            errors.push(FieldError::MaxPagesTooSmall(self.max_pages));
        }

        ValidationErrors::check(errors)
    }
}

/// Crawl request in the scraper's wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebScraperRequest {
    pub start_urls: Vec<WebStartUrl>,
    pub max_crawl_depth: i64,
    pub max_crawl_pages: i64,
    pub respect_robots_txt_file: bool,
    pub save_markdown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebStartUrl {
    pub url: String,
    pub method: String,
}

#[cfg(test)]
#[path = "web_tests.rs"]
mod tests;
