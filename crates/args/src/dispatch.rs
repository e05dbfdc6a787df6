// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolve raw arguments into validated, capability-checked values

use crate::decode::{parse_raw, QueryTypeArgument, RawArguments};
use crate::{
    JobArguments, LinkedinArguments, RedditArguments, ResolveError, TelemetryArguments,
    TikTokSearchByQueryArguments, TikTokSearchByTrendingArguments, TikTokTranscriptionArguments,
    TwitterArguments, WebArguments,
};
use jg_core::{Capability, CapabilityMatrix, Clock, JobType, SystemClock};
use serde::Serialize;

/// The concrete arguments a job resolved to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JobArgs {
    Web(WebArguments),
    Telemetry(TelemetryArguments),
    TikTokTranscription(TikTokTranscriptionArguments),
    TikTokSearchByQuery(TikTokSearchByQueryArguments),
    TikTokSearchByTrending(TikTokSearchByTrendingArguments),
    Twitter(TwitterArguments),
    Linkedin(LinkedinArguments),
    Reddit(RedditArguments),
}

impl JobArgs {
    pub fn schema(&self) -> &'static str {
        match self {
            JobArgs::Web(_) => WebArguments::SCHEMA,
            JobArgs::Telemetry(_) => TelemetryArguments::SCHEMA,
            JobArgs::TikTokTranscription(_) => TikTokTranscriptionArguments::SCHEMA,
            JobArgs::TikTokSearchByQuery(_) => TikTokSearchByQueryArguments::SCHEMA,
            JobArgs::TikTokSearchByTrending(_) => TikTokSearchByTrendingArguments::SCHEMA,
            JobArgs::Twitter(_) => TwitterArguments::SCHEMA,
            JobArgs::Linkedin(_) => LinkedinArguments::SCHEMA,
            JobArgs::Reddit(_) => RedditArguments::SCHEMA,
        }
    }
}

/// Arguments that passed field validation and the capability matrix.
///
/// Only the dispatcher constructs these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedArguments {
    job_type: JobType,
    capability: Capability,
    arguments: JobArgs,
}

impl ResolvedArguments {
    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn arguments(&self) -> &JobArgs {
        &self.arguments
    }

    pub fn into_arguments(self) -> JobArgs {
        self.arguments
    }
}

/// Resolves job arguments against a fixed capability matrix
#[derive(Debug, Clone)]
pub struct Dispatcher<C: Clock = SystemClock> {
    matrix: CapabilityMatrix,
    clock: C,
}

impl Dispatcher<SystemClock> {
    pub fn new(matrix: CapabilityMatrix) -> Self {
        Self::with_clock(matrix, SystemClock)
    }
}

impl Default for Dispatcher<SystemClock> {
    fn default() -> Self {
        Self::new(CapabilityMatrix::standard())
    }
}

impl<C: Clock> Dispatcher<C> {
    pub fn with_clock(matrix: CapabilityMatrix, clock: C) -> Self {
        Self { matrix, clock }
    }

    pub fn matrix(&self) -> &CapabilityMatrix {
        &self.matrix
    }

    /// Resolve arguments for a job type given by its wire name
    pub fn resolve_str(
        &self,
        job_type: &str,
        raw: &RawArguments,
    ) -> Result<ResolvedArguments, ResolveError> {
        let job_type: JobType = job_type
            .parse()
            .map_err(|_| ResolveError::UnknownJobType(job_type.to_string()))?;
        self.resolve(job_type, raw)
    }

    /// Resolve arguments given as a JSON document
    pub fn resolve_json(
        &self,
        job_type: &str,
        json: &str,
    ) -> Result<ResolvedArguments, ResolveError> {
        let raw = parse_raw(json)?;
        self.resolve_str(job_type, &raw)
    }

    pub fn resolve(
        &self,
        job_type: JobType,
        raw: &RawArguments,
    ) -> Result<ResolvedArguments, ResolveError> {
        if !self.matrix.supports(job_type) {
            return Err(ResolveError::UnknownJobType(job_type.to_string()));
        }

        let arguments = match job_type {
            JobType::Web => JobArgs::Web(self.resolve_schema(job_type, raw)?),
            JobType::Telemetry => JobArgs::Telemetry(self.resolve_schema(job_type, raw)?),
            JobType::Tiktok => self.resolve_tiktok(raw)?,
            JobType::Twitter
            | JobType::TwitterCredential
            | JobType::TwitterApi
            | JobType::TwitterApify => JobArgs::Twitter(self.resolve_schema(job_type, raw)?),
            JobType::Linkedin => JobArgs::Linkedin(self.resolve_schema(job_type, raw)?),
            JobType::Reddit => JobArgs::Reddit(self.resolve_schema(job_type, raw)?),
        };

        let capability = capability_of(&arguments)
            .map_err(|e| ResolveError::from_capability(job_type, e))?
            .ok_or_else(|| ResolveError::UnknownCapability {
                job_type,
                capability: String::new(),
            })?;

        tracing::debug!(
            %job_type,
            %capability,
            schema = arguments.schema(),
            "resolved job arguments"
        );

        Ok(ResolvedArguments {
            job_type,
            capability,
            arguments,
        })
    }

    fn resolve_schema<T: JobArguments>(
        &self,
        job_type: JobType,
        raw: &RawArguments,
    ) -> Result<T, ResolveError> {
        let mut args = T::decode(raw)?;
        args.apply_defaults();

        if let Some(default) = self.matrix.default_capability(job_type) {
            if args.fill_capability(default) {
                tracing::debug!(%job_type, capability = %default, "substituted default capability");
            }
        }

        args.validate_for_job_type(job_type, &self.matrix, self.clock.now())?;
        Ok(args)
    }

    /// TikTok picks its schema from the requested capability
    fn resolve_tiktok(&self, raw: &RawArguments) -> Result<JobArgs, ResolveError> {
        let job_type = JobType::Tiktok;
        let peeked = QueryTypeArgument::peek(raw)?;

        let capability = match Capability::parse_optional(&peeked.query_type) {
            Ok(Some(capability)) => capability,
            Ok(None) => {
                let default = self.matrix.default_capability(job_type).ok_or_else(|| {
                    ResolveError::UnknownCapability {
                        job_type,
                        capability: String::new(),
                    }
                })?;
                tracing::debug!(%job_type, capability = %default, "substituted default capability");
                default
            }
            Err(_) => {
                return Err(ResolveError::UnknownCapability {
                    job_type,
                    capability: peeked.query_type,
                })
            }
        };

        match capability {
            Capability::Transcription => Ok(JobArgs::TikTokTranscription(
                self.resolve_schema(job_type, raw)?,
            )),
            Capability::SearchByQuery => Ok(JobArgs::TikTokSearchByQuery(
                self.resolve_schema(job_type, raw)?,
            )),
            Capability::SearchByTrending => Ok(JobArgs::TikTokSearchByTrending(
                self.resolve_schema(job_type, raw)?,
            )),
            other => Err(ResolveError::UnknownCapability {
                job_type,
                capability: other.to_string(),
            }),
        }
    }
}

fn capability_of(
    arguments: &JobArgs,
) -> Result<Option<Capability>, jg_core::CapabilityError> {
    match arguments {
        JobArgs::Web(args) => args.capability(),
        JobArgs::Telemetry(args) => args.capability(),
        JobArgs::TikTokTranscription(args) => args.capability(),
        JobArgs::TikTokSearchByQuery(args) => args.capability(),
        JobArgs::TikTokSearchByTrending(args) => args.capability(),
        JobArgs::Twitter(args) => args.capability(),
        JobArgs::Linkedin(args) => args.capability(),
        JobArgs::Reddit(args) => args.capability(),
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
