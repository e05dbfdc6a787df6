// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jg-args: job argument schemas and resolution
//!
//! This crate provides:
//! - One argument schema per job type (three for TikTok)
//! - Field validation that reports every violated rule at once
//! - The dispatcher that turns a raw JSON object into validated arguments

pub mod decode;
mod dispatch;
mod error;
pub mod linkedin;
pub mod llm;
pub mod reddit;
mod schema;
pub mod telemetry;
pub mod tiktok;
pub mod twitter;
pub mod web;

pub use decode::RawArguments;
pub use dispatch::{Dispatcher, JobArgs, ResolvedArguments};
pub use error::{FieldError, ResolveError, ValidationErrors};
pub use linkedin::LinkedinArguments;
pub use llm::{LlmProcessorArguments, LlmProcessorRequest};
pub use reddit::{RedditArguments, RedditQueryType, RedditSort, RedditStartUrl};
pub use schema::JobArguments;
pub use telemetry::TelemetryArguments;
pub use tiktok::{
    TikTokSearchByQueryArguments, TikTokSearchByTrendingArguments, TikTokTranscriptionArguments,
};
pub use twitter::TwitterArguments;
pub use web::{WebArguments, WebScraperRequest, WebStartUrl};
