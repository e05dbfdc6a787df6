// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jg-core: capability vocabulary for job argument resolution
//!
//! This crate provides:
//! - Closed `JobType` and `Capability` enumerations with stable wire names
//! - The capability matrix (which capabilities each job type may request)
//! - Worker capability configuration that restricts the matrix
//! - A clock abstraction for time-dependent validation

pub mod capability;
pub mod clock;
pub mod config;
mod error;
mod job_type;
pub mod matrix;

pub use capability::Capability;
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, WorkerCapabilities};
pub use error::CapabilityError;
pub use job_type::JobType;
pub use matrix::{combine_capabilities, CapabilityMatrix, MatrixBuilder};
