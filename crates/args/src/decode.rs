// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoding raw argument objects

use crate::ResolveError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// An untyped argument payload: a JSON object with string keys
pub type RawArguments = serde_json::Map<String, Value>;

/// Decode `raw` into `T`, reporting failures against `schema`
///
/// A `null` field decodes as if it were absent, leaving the field at its default.
pub fn decode_raw<T: DeserializeOwned>(
    raw: &RawArguments,
    schema: &'static str,
) -> Result<T, ResolveError> {
    let present: RawArguments = raw
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    serde_json::from_value(Value::Object(present))
        .map_err(|source| ResolveError::Decode { schema, source })
}

/// Parse a JSON document that must be an object
pub fn parse_raw(json: &str) -> Result<RawArguments, ResolveError> {
    serde_json::from_str(json).map_err(|source| ResolveError::Decode {
        schema: "raw",
        source,
    })
}

/// Just the `type` field, read ahead of choosing a schema
#[derive(Debug, Default, Deserialize)]
pub(crate) struct QueryTypeArgument {
    #[serde(rename = "type", default)]
    pub query_type: String,
}

impl QueryTypeArgument {
    pub(crate) fn peek(raw: &RawArguments) -> Result<Self, ResolveError> {
        let mut peeked: Self = decode_raw(raw, "query type")?;
        peeked.query_type = peeked.query_type.to_lowercase();
        Ok(peeked)
    }
}
