// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing error display with context and suggestions.

use jg_args::ResolveError;
use std::fmt;

/// A failure explained for the person at the terminal
#[derive(Debug)]
pub struct JgError {
    /// What went wrong
    pub message: String,
    /// Details, one per line
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl JgError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Explain why `job_type` arguments did not resolve
    pub fn resolve_failed(job_type: &str, err: &ResolveError) -> Self {
        match err {
            ResolveError::UnknownJobType(name) => JgError::new(format!("unknown job type '{}'", name))
                .with_suggestion("List supported job types: jg capabilities"),
            ResolveError::UnknownCapability { capability, .. } if capability.is_empty() => {
                JgError::new(format!("job type '{}' has no default capability", job_type))
                    .with_suggestion("Set the \"type\" field explicitly")
            }
            ResolveError::UnknownCapability { capability, .. } => {
                JgError::new(format!("unknown capability '{}'", capability)).with_suggestion(
                    format!("List capabilities for this job type: jg capabilities {}", job_type),
                )
            }
            ResolveError::Decode { schema, source } => {
                JgError::new(format!("arguments do not match the {} schema", schema))
                    .with_context(source.to_string())
                    .with_suggestion("Check field names and value types")
            }
            ResolveError::Validation(errors) => errors.errors.iter().fold(
                JgError::new(format!("invalid {} arguments", job_type)),
                |e, field| e.with_context(field.to_string()),
            ),
            ResolveError::CapabilityNotAllowed {
                capability,
                allowed,
                ..
            } => {
                let allowed: Vec<&str> = allowed.iter().map(|c| c.as_str()).collect();
                JgError::new(format!(
                    "capability '{}' is not allowed for job type '{}'",
                    capability, job_type
                ))
                .with_context(format!("allowed: {}", allowed.join(", ")))
                .with_suggestion("Pick one of the allowed capabilities for \"type\"")
            }
        }
    }
}

impl fmt::Display for JgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for JgError {}
