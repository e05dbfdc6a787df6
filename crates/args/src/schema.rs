// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The contract every job argument schema implements

use crate::decode::{decode_raw, RawArguments};
use crate::{ResolveError, ValidationErrors};
use chrono::{DateTime, Utc};
use jg_core::{Capability, CapabilityError, CapabilityMatrix, JobType};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub trait JobArguments: DeserializeOwned + Serialize + Sized {
    /// Name used in decode errors and logs
    const SCHEMA: &'static str;

    /// Decode `raw` and normalize the result
    fn decode(raw: &RawArguments) -> Result<Self, ResolveError> {
        let mut args: Self = decode_raw(raw, Self::SCHEMA)?;
        args.normalize();
        Ok(args)
    }

    /// Canonicalize decoded fields (lower-casing and the like)
    fn normalize(&mut self) {}

    /// Fill zero-valued optional fields. Must be idempotent.
    fn apply_defaults(&mut self) {}

    /// Fill an empty `type` field with `capability`.
    ///
    /// Returns true if the value changed. Schemas with a fixed capability
    /// ignore this.
    fn fill_capability(&mut self, _capability: Capability) -> bool {
        false
    }

    /// The capability this value requests, `None` if it deferred to the default
    fn capability(&self) -> Result<Option<Capability>, CapabilityError>;

    /// Field checks that do not depend on the job type
    fn validate(&self, now: DateTime<Utc>) -> Result<(), ValidationErrors>;

    /// Field checks followed by the capability matrix check
    fn validate_for_job_type(
        &self,
        job_type: JobType,
        matrix: &CapabilityMatrix,
        now: DateTime<Utc>,
    ) -> Result<(), ResolveError> {
        self.validate(now)?;
        self.capability()
            .and_then(|capability| matrix.validate(job_type, capability))
            .map_err(|e| ResolveError::from_capability(job_type, e))
    }
}

