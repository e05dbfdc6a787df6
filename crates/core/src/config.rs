// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker capability configuration
//!
//! A worker advertises the subset of the capability matrix it can actually
//! serve. The configuration is TOML:
//!
//! ```toml
//! [capabilities]
//! twitter = ["searchbyquery", "getbyid"]
//! reddit = ["scrapeurls", "searchposts"]
//!
//! [defaults]
//! twitter = "getbyid"
//! ```
//!
//! Web, telemetry and TikTok are always available and are merged in unless
//! `include_always_available = false`.

use crate::capability::{TELEMETRY_CAPS, TIKTOK_CAPS, WEB_CAPS};
use crate::{Capability, CapabilityMatrix, JobType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading worker capabilities
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("capability '{capability}' is not supported by job type '{job_type}'")]
    CapabilityNotAllowed {
        job_type: JobType,
        capability: Capability,
    },
    #[error("default capability '{capability}' for job type '{job_type}' is not advertised")]
    DefaultNotAllowed {
        job_type: JobType,
        capability: Capability,
    },
}

/// Capabilities a worker advertises, per job type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerCapabilities {
    #[serde(default)]
    pub capabilities: BTreeMap<JobType, Vec<Capability>>,
    /// Overrides of the default capability
    #[serde(default)]
    pub defaults: BTreeMap<JobType, Capability>,
    #[serde(default = "default_include_always_available")]
    pub include_always_available: bool,
}

fn default_include_always_available() -> bool {
    true
}

impl Default for WorkerCapabilities {
    fn default() -> Self {
        Self {
            capabilities: BTreeMap::new(),
            defaults: BTreeMap::new(),
            include_always_available: true,
        }
    }
}

impl WorkerCapabilities {
    /// Capabilities every worker serves regardless of configuration
    pub fn always_available() -> Self {
        let capabilities = [
            (JobType::Web, WEB_CAPS),
            (JobType::Telemetry, TELEMETRY_CAPS),
            (JobType::Tiktok, TIKTOK_CAPS),
        ]
        .into_iter()
        .map(|(job_type, caps)| (job_type, caps.to_vec()))
        .collect();

        Self {
            capabilities,
            defaults: BTreeMap::new(),
            include_always_available: true,
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Advertised capabilities with the always-available set merged in
    pub fn effective(&self) -> BTreeMap<JobType, BTreeSet<Capability>> {
        let mut merged: BTreeMap<JobType, BTreeSet<Capability>> = BTreeMap::new();
        if self.include_always_available {
            for (job_type, caps) in Self::always_available().capabilities {
                merged.entry(job_type).or_default().extend(caps);
            }
        }
        for (job_type, caps) in &self.capabilities {
            merged.entry(*job_type).or_default().extend(caps.iter().copied());
        }
        merged
    }

    /// Build the matrix this worker enforces, as a restriction of `base`.
    ///
    /// Every advertised capability must already be allowed by `base`. A job
    /// type whose base default is not advertised falls back to its first
    /// advertised capability.
    pub fn matrix(&self, base: &CapabilityMatrix) -> Result<CapabilityMatrix, ConfigError> {
        let mut builder = CapabilityMatrix::builder();

        for (job_type, caps) in self.effective() {
            if caps.is_empty() {
                tracing::warn!(%job_type, "no capabilities advertised, job type disabled");
                continue;
            }

            for capability in &caps {
                if !base.is_valid(job_type, Some(*capability)) {
                    return Err(ConfigError::CapabilityNotAllowed {
                        job_type,
                        capability: *capability,
                    });
                }
            }

            let default = match self.defaults.get(&job_type) {
                Some(capability) if caps.contains(capability) => Some(*capability),
                Some(capability) => {
                    return Err(ConfigError::DefaultNotAllowed {
                        job_type,
                        capability: *capability,
                    });
                }
                None => match base.default_capability(job_type) {
                    Some(capability) if caps.contains(&capability) => Some(capability),
                    fallback => {
                        let first = caps.iter().next().copied();
                        tracing::warn!(
                            %job_type,
                            base_default = ?fallback,
                            replacement = ?first,
                            "default capability not advertised, using first advertised capability"
                        );
                        first
                    }
                },
            };

            let caps: Vec<Capability> = caps.into_iter().collect();
            builder = builder.allow(job_type, &[caps.as_slice()]);
            if let Some(capability) = default {
                builder = builder.default_capability(job_type, capability);
            }
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
