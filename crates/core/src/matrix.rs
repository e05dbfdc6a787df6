// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The capability matrix: which capabilities each job type may request
//!
//! The matrix is built once (usually with [`CapabilityMatrix::standard`] or
//! from a worker's advertised capabilities) and is read-only afterwards.
//! Every accessor hands out copies, so a matrix can be shared freely
//! between threads.

use crate::capability::{
    LINKEDIN_CAPS, REDDIT_CAPS, TELEMETRY_CAPS, TIKTOK_CAPS, TWITTER_API_CAPS,
    TWITTER_APIFY_CAPS, TWITTER_CREDENTIAL_CAPS, TWITTER_ELEVATED_CAPS, WEB_CAPS,
};
use crate::error::CapabilityError;
use crate::{Capability, JobType};
use std::collections::{BTreeMap, BTreeSet};

/// Union capability groups, dropping duplicates.
///
/// The result is in canonical capability order, so the union is the same
/// no matter which order the groups are given in.
pub fn combine_capabilities(groups: &[&[Capability]]) -> Vec<Capability> {
    groups
        .iter()
        .flat_map(|group| group.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Immutable JobType -> allowed capabilities mapping, with per-job defaults
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapabilityMatrix {
    allowed: BTreeMap<JobType, BTreeSet<Capability>>,
    defaults: BTreeMap<JobType, Capability>,
}

impl CapabilityMatrix {
    pub fn builder() -> MatrixBuilder {
        MatrixBuilder::default()
    }

    /// The full matrix every job type supports
    pub fn standard() -> Self {
        Self::builder()
            .allow(
                JobType::Twitter,
                &[
                    TWITTER_CREDENTIAL_CAPS,
                    TWITTER_API_CAPS,
                    TWITTER_APIFY_CAPS,
                    TWITTER_ELEVATED_CAPS,
                ],
            )
            .allow(JobType::TwitterCredential, &[TWITTER_CREDENTIAL_CAPS])
            .allow(JobType::TwitterApi, &[TWITTER_API_CAPS, TWITTER_ELEVATED_CAPS])
            .allow(JobType::TwitterApify, &[TWITTER_APIFY_CAPS])
            .allow(JobType::Web, &[WEB_CAPS])
            .allow(JobType::Tiktok, &[TIKTOK_CAPS])
            .allow(JobType::Telemetry, &[TELEMETRY_CAPS])
            .allow(JobType::Linkedin, &[LINKEDIN_CAPS])
            .allow(JobType::Reddit, &[REDDIT_CAPS])
            .default_capability(JobType::Twitter, Capability::SearchByQuery)
            .default_capability(JobType::TwitterCredential, Capability::SearchByQuery)
            .default_capability(JobType::TwitterApi, Capability::SearchByQuery)
            .default_capability(JobType::TwitterApify, Capability::GetFollowers)
            .default_capability(JobType::Web, Capability::Scraper)
            .default_capability(JobType::Tiktok, Capability::SearchByQuery)
            .default_capability(JobType::Telemetry, Capability::Telemetry)
            .default_capability(JobType::Linkedin, Capability::SearchByQuery)
            .default_capability(JobType::Reddit, Capability::ScrapeUrls)
            .build()
    }

    /// Check that `capability` may be requested for `job_type`.
    ///
    /// A missing capability is always accepted: the caller deferred to the
    /// job type's default, which is validated once it has been substituted.
    pub fn validate(
        &self,
        job_type: JobType,
        capability: Option<Capability>,
    ) -> Result<(), CapabilityError> {
        let Some(capability) = capability else {
            return Ok(());
        };

        let allowed = self
            .allowed
            .get(&job_type)
            .ok_or_else(|| CapabilityError::UnknownJobType(job_type.to_string()))?;

        if allowed.contains(&capability) {
            Ok(())
        } else {
            Err(CapabilityError::NotAllowed {
                capability,
                job_type,
                allowed: allowed.iter().copied().collect(),
            })
        }
    }

    /// Same as [`validate`](Self::validate), for wire strings.
    ///
    /// The empty capability is accepted before the job type is looked at.
    pub fn validate_str(&self, job_type: &str, capability: &str) -> Result<(), CapabilityError> {
        if capability.is_empty() {
            return Ok(());
        }
        let job_type: JobType = job_type.parse()?;
        let capability: Capability = capability.parse()?;
        self.validate(job_type, Some(capability))
    }

    pub fn is_valid(&self, job_type: JobType, capability: Option<Capability>) -> bool {
        self.validate(job_type, capability).is_ok()
    }

    /// Allowed capabilities for a job type, in canonical order
    pub fn valid_capabilities(&self, job_type: JobType) -> Result<Vec<Capability>, CapabilityError> {
        self.allowed
            .get(&job_type)
            .map(|caps| caps.iter().copied().collect())
            .ok_or_else(|| CapabilityError::UnknownJobType(job_type.to_string()))
    }

    /// Capability substituted when a job omits its `type` field
    pub fn default_capability(&self, job_type: JobType) -> Option<Capability> {
        self.defaults.get(&job_type).copied()
    }

    pub fn supports(&self, job_type: JobType) -> bool {
        self.allowed.contains_key(&job_type)
    }

    /// Job types present in this matrix, in canonical order
    pub fn job_types(&self) -> Vec<JobType> {
        self.allowed.keys().copied().collect()
    }
}

/// Assembles a [`CapabilityMatrix`] from capability groups
#[derive(Debug, Default)]
pub struct MatrixBuilder {
    allowed: BTreeMap<JobType, BTreeSet<Capability>>,
    defaults: BTreeMap<JobType, Capability>,
}

impl MatrixBuilder {
    /// Union the given groups into the job type's allowed set
    pub fn allow(mut self, job_type: JobType, groups: &[&[Capability]]) -> Self {
        self.allowed
            .entry(job_type)
            .or_default()
            .extend(combine_capabilities(groups));
        self
    }

    pub fn default_capability(mut self, job_type: JobType, capability: Capability) -> Self {
        self.defaults.insert(job_type, capability);
        self
    }

    pub fn build(self) -> CapabilityMatrix {
        CapabilityMatrix {
            allowed: self.allowed,
            defaults: self.defaults,
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
