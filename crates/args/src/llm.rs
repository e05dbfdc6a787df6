// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! LLM post-processing arguments.
//!
//! Not a job type of its own: these arguments describe a processing step
//! run over a dataset a previous job produced.

use crate::decode::{decode_raw, RawArguments};
use crate::{FieldError, ResolveError, ValidationErrors};
use serde::{Deserialize, Serialize};

pub const LLM_DEFAULT_MAX_TOKENS: u32 = 300;
pub const LLM_DEFAULT_TEMPERATURE: f64 = 0.1;
pub const LLM_DEFAULT_ITEMS: u32 = 1;
pub const LLM_DEFAULT_MODEL: &str = "gemini-1.5-flash-8b";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmProcessorArguments {
    pub dataset_id: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub items: u32,
}

impl LlmProcessorArguments {
    /// Decode, fill defaults and validate in one step
    pub fn resolve(raw: &RawArguments) -> Result<Self, ResolveError> {
        let mut args: Self = decode_raw(raw, "llm processor")?;
        args.apply_defaults();
        args.validate()?;
        Ok(args)
    }

    pub fn apply_defaults(&mut self) {
        if self.temperature == 0.0 {
            self.temperature = LLM_DEFAULT_TEMPERATURE;
        }
        if self.max_tokens == 0 {
            self.max_tokens = LLM_DEFAULT_MAX_TOKENS;
        }
        if self.items == 0 {
            self.items = LLM_DEFAULT_ITEMS;
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        if self.dataset_id.is_empty() {
            errors.push(FieldError::LlmDatasetIdRequired);
        }
        if self.prompt.is_empty() {
            errors.push(FieldError::LlmPromptRequired);
        }
        ValidationErrors::check(errors)
    }

    pub fn to_request(&self) -> LlmProcessorRequest {
        LlmProcessorRequest {
            input_dataset_id: self.dataset_id.clone(),
            prompt: self.prompt.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature.to_string(),
            multiple_columns: false,
            model: LLM_DEFAULT_MODEL.to_string(),
        }
    }
}

/// Request in the processor's wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmProcessorRequest {
    pub input_dataset_id: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: String,
    pub multiple_columns: bool,
    pub model: String,
}
