// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reddit arguments.
//!
//! `scrapeurls` takes post or comment URLs and no queries; every other
//! query type takes queries and no URLs. All violations are reported
//! together.

use crate::{FieldError, JobArguments, ValidationErrors};
use chrono::{DateTime, Utc};
use jg_core::{Capability, CapabilityError};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub const REDDIT_DEFAULT_MAX_ITEMS: u32 = 10;
pub const REDDIT_DEFAULT_MAX_POSTS: u32 = 10;
pub const REDDIT_DEFAULT_MAX_COMMENTS: u32 = 10;
pub const REDDIT_DEFAULT_MAX_COMMUNITIES: u32 = 2;
pub const REDDIT_DEFAULT_MAX_USERS: u32 = 2;
pub const REDDIT_DEFAULT_METHOD: &str = "GET";

const REDDIT_DOMAIN_SUFFIX: &str = "reddit.com";
const ALLOWED_HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS"];

// Path of a post or comment: /r/<community>/comments/<id>[/...]
#[allow(clippy::expect_used)]
static POST_PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/r/[^/]+/comments/[^/]+").expect("constant regex pattern is valid")
});

/// What a Reddit job looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedditQueryType {
    ScrapeUrls,
    SearchPosts,
    SearchUsers,
    SearchCommunities,
}

impl RedditQueryType {
    pub const ALL: [RedditQueryType; 4] = [
        RedditQueryType::ScrapeUrls,
        RedditQueryType::SearchPosts,
        RedditQueryType::SearchUsers,
        RedditQueryType::SearchCommunities,
    ];

    pub fn as_str(&self) -> &'static str {
        self.capability().as_str()
    }

    pub fn capability(&self) -> Capability {
        match self {
            RedditQueryType::ScrapeUrls => Capability::ScrapeUrls,
            RedditQueryType::SearchPosts => Capability::SearchPosts,
            RedditQueryType::SearchUsers => Capability::SearchUsers,
            RedditQueryType::SearchCommunities => Capability::SearchCommunities,
        }
    }
}

impl fmt::Display for RedditQueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RedditQueryType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FieldError::RedditInvalidType(s.to_string()))
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedditSort {
    Relevance,
    Hot,
    Top,
    New,
    Rising,
    Comments,
}

impl RedditSort {
    pub const ALL: [RedditSort; 6] = [
        RedditSort::Relevance,
        RedditSort::Hot,
        RedditSort::Top,
        RedditSort::New,
        RedditSort::Rising,
        RedditSort::Comments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RedditSort::Relevance => "relevance",
            RedditSort::Hot => "hot",
            RedditSort::Top => "top",
            RedditSort::New => "new",
            RedditSort::Rising => "rising",
            RedditSort::Comments => "comments",
        }
    }
}

impl fmt::Display for RedditSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RedditSort {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FieldError::RedditInvalidSort(s.to_string()))
    }
}

/// A URL to scrape, given either as a bare string or as `{url, method}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedditStartUrl {
    pub url: String,
    pub method: String,
}

impl RedditStartUrl {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: REDDIT_DEFAULT_METHOD.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RedditStartUrlRaw {
    Url(String),
    Full {
        url: String,
        #[serde(default)]
        method: String,
    },
}

impl<'de> Deserialize<'de> for RedditStartUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RedditStartUrlRaw::deserialize(deserializer)? {
            RedditStartUrlRaw::Url(url) => RedditStartUrl::get(url),
            RedditStartUrlRaw::Full { url, method } if method.is_empty() => {
                RedditStartUrl::get(url)
            }
            RedditStartUrlRaw::Full { url, method } => RedditStartUrl { url, method },
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditArguments {
    #[serde(rename = "type")]
    pub query_type: String,
    pub queries: Vec<String>,
    pub urls: Vec<RedditStartUrl>,
    pub sort: String,
    pub include_nsfw: bool,
    /// Only meaningful for searchusers
    pub skip_posts: bool,
    /// Only meaningful for scrapeurls and searchposts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<DateTime<Utc>>,
    /// Total items to scrape
    pub max_items: u32,
    /// Results per page, defaults to `max_items`
    pub max_results: u32,
    pub max_posts: u32,
    pub max_comments: u32,
    pub max_communities: u32,
    pub max_users: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_cursor: String,
}

impl RedditArguments {
    /// The parsed query type, if valid
    pub fn query_type(&self) -> Option<RedditQueryType> {
        self.query_type.parse().ok()
    }

    /// The parsed sort order, if valid
    pub fn sort(&self) -> Option<RedditSort> {
        self.sort.parse().ok()
    }

    fn validate_url(start: &RedditStartUrl, errors: &mut Vec<FieldError>) {
        if !ALLOWED_HTTP_METHODS.contains(&start.method.as_str()) {
            errors.push(FieldError::RedditInvalidMethod(start.method.clone()));
        }

        let parsed = match url::Url::parse(&start.url) {
            Ok(parsed) => parsed,
            Err(_) => {
                errors.push(FieldError::RedditInvalidUrl(start.url.clone()));
                return;
            }
        };

        if !parsed
            .host_str()
            .is_some_and(|host| host.ends_with(REDDIT_DOMAIN_SUFFIX))
        {
            errors.push(FieldError::RedditNotRedditUrl(start.url.clone()));
        } else if !POST_PATH_PATTERN.is_match(parsed.path()) {
            errors.push(FieldError::RedditNotPostOrComment(start.url.clone()));
        }
    }
}

impl JobArguments for RedditArguments {
    const SCHEMA: &'static str = "reddit";

    fn normalize(&mut self) {
        self.query_type = self.query_type.to_lowercase();
        self.sort = self.sort.to_lowercase();
        for start in &mut self.urls {
            start.method = start.method.to_uppercase();
        }
    }

    fn apply_defaults(&mut self) {
        if self.max_items == 0 {
            self.max_items = REDDIT_DEFAULT_MAX_ITEMS;
        }
        if self.max_posts == 0 {
            self.max_posts = REDDIT_DEFAULT_MAX_POSTS;
        }
        if self.max_comments == 0 {
            self.max_comments = REDDIT_DEFAULT_MAX_COMMENTS;
        }
        if self.max_communities == 0 {
            self.max_communities = REDDIT_DEFAULT_MAX_COMMUNITIES;
        }
        if self.max_users == 0 {
            self.max_users = REDDIT_DEFAULT_MAX_USERS;
        }
        if self.sort.is_empty() {
            self.sort = RedditSort::New.as_str().to_string();
        }
        if self.max_results == 0 {
            self.max_results = self.max_items;
        }
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

    fn validate(&self, now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        let query_type = match self.query_type.parse::<RedditQueryType>() {
            Ok(query_type) => Some(query_type),
            Err(e) => {
                errors.push(e);
                None
            }
        };
        if let Err(e) = self.sort.parse::<RedditSort>() {
            errors.push(e);
        }
        if self.after.is_some_and(|after| after > now) {
            errors.push(FieldError::RedditTimeInTheFuture);
        }

        match query_type {
            Some(RedditQueryType::ScrapeUrls) => {
                if self.urls.is_empty() {
                    errors.push(FieldError::RedditNoUrls);
                }
                if !self.queries.is_empty() {
                    errors.push(FieldError::RedditQueriesNotAllowed);
                }
                for start in &self.urls {
                    Self::validate_url(start, &mut errors);
                }
            }
            Some(_) => {
                if self.queries.is_empty() {
                    errors.push(FieldError::RedditNoQueries);
                }
                if !self.urls.is_empty() {
                    errors.push(FieldError::RedditUrlsNotAllowed);
                }
            }
            // Urls and queries are only checked against a known type
            None => {}
        }

        ValidationErrors::check(errors)
    }
}

#[cfg(test)]
#[path = "reddit_tests.rs"]
mod tests;
