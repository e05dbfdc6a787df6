// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument resolution errors

use jg_core::{Capability, CapabilityError, JobType};
use thiserror::Error;

/// A single violated field rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    // Web
    #[error("url is required")]
    UrlRequired,
    #[error("invalid URL format: {0}")]
    UrlInvalid(String),
    #[error("url must include a scheme (http:// or https://)")]
    UrlSchemeMissing,
    #[error("max depth must be non-negative: got {0}")]
    MaxDepthNegative(i64),
    #[error("max pages must be at least 1: got {0}")]
    MaxPagesTooSmall(i64),

    // TikTok
    #[error("video_url is required")]
    VideoUrlRequired,
    #[error("video_url is not a valid URL: {0}")]
    VideoUrlInvalid(String),
    #[error("video_url must point to tiktok.com: {0}")]
    VideoUrlNotTiktok(String),
    #[error("language must look like 'lang-REGION' (e.g. 'en-us'): got {0}")]
    LanguageInvalid(String),
    #[error("either search or start_urls must be provided")]
    SearchOrStartUrlsRequired,
    #[error("country_code {0} is not supported")]
    CountryCodeInvalid(String),
    #[error("sort_by must be one of trending, like, comment, repost: got {0}")]
    SortByInvalid(String),
    #[error("period must be \"7\" or \"30\": got {0}")]
    PeriodInvalid(String),
    #[error("max_items must be non-negative: got {0}")]
    MaxItemsNegative(i64),

    // Twitter and LinkedIn
    #[error("count must be non-negative: got {0}")]
    CountNegative(i64),
    #[error("max_results must be non-negative: got {0}")]
    MaxResultsNegative(i64),
    #[error("start must be non-negative: got {0}")]
    StartNegative(i64),

    // Reddit
    #[error("invalid type: {0}")]
    RedditInvalidType(String),
    #[error("invalid sort: {0}")]
    RedditInvalidSort(String),
    #[error("after field is in the future")]
    RedditTimeInTheFuture,
    #[error("queries must be provided for all query types except scrapeurls")]
    RedditNoQueries,
    #[error("urls must be provided for scrapeurls query type")]
    RedditNoUrls,
    #[error("the scrapeurls query type does not admit queries")]
    RedditQueriesNotAllowed,
    #[error("urls can only be provided for the scrapeurls query type")]
    RedditUrlsNotAllowed,
    #[error("{0} is not a valid HTTP method")]
    RedditInvalidMethod(String),
    #[error("{0} is not a valid URL")]
    RedditInvalidUrl(String),
    #[error("invalid Reddit URL {0}")]
    RedditNotRedditUrl(String),
    #[error("{0} is not a Reddit post or comment URL")]
    RedditNotPostOrComment(String),

    // LLM post-processing
    #[error("dataset id is required")]
    LlmDatasetIdRequired,
    #[error("prompt is required")]
    LlmPromptRequired,
}

/// Every rule a value violated, in the order they were checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// `Ok` when nothing was collected
    pub fn check(errors: Vec<FieldError>) -> Result<(), ValidationErrors> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }

    pub fn contains(&self, error: &FieldError) -> bool {
        self.errors.contains(error)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        ValidationErrors {
            errors: vec![error],
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let [only] = self.errors.as_slice() {
            return write!(f, "{}", only);
        }
        write!(
            f,
            "argument validation failed with {} error(s):",
            self.errors.len()
        )?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n  {}: {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Why a job's arguments could not be resolved
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unknown job type: {0}")]
    UnknownJobType(String),
    #[error("unknown capability '{capability}' for job type '{job_type}'")]
    UnknownCapability {
        job_type: JobType,
        capability: String,
    },
    #[error("failed to decode {schema} arguments: {source}")]
    Decode {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(
        "capability '{capability}' is not valid for job type '{job_type}'. Valid capabilities: [{}]",
        join(.allowed)
    )]
    CapabilityNotAllowed {
        capability: Capability,
        job_type: JobType,
        allowed: Vec<Capability>,
    },
}

impl ResolveError {
    /// Attach job-type context to a matrix or vocabulary error
    pub fn from_capability(job_type: JobType, err: CapabilityError) -> Self {
        match err {
            CapabilityError::UnknownJobType(name) => ResolveError::UnknownJobType(name),
            CapabilityError::UnknownCapability(capability) => ResolveError::UnknownCapability {
                job_type,
                capability,
            },
            CapabilityError::NotAllowed {
                capability,
                job_type,
                allowed,
            } => ResolveError::CapabilityNotAllowed {
                capability,
                job_type,
                allowed,
            },
        }
    }

    /// The violated field rules, if this is a validation failure
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ResolveError::Validation(errors) => &errors.errors,
            _ => &[],
        }
    }
}

fn join(caps: &[Capability]) -> String {
    caps.iter()
        .map(Capability::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
