//! The uniform result wrapper returned by every generation operation.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tag identifying what an envelope carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    RandomIntegers,
    RandomFloats,
    RandomBytes,
    Uuids,
    RandomStrings,
    RandomChoices,
    RandomBooleans,
}

/// Ordered values produced by one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedValues {
    Integers(Vec<i64>),
    Floats(Vec<f64>),
    Strings(Vec<String>),
    Booleans(Vec<bool>),
}

impl GeneratedValues {
    pub fn len(&self) -> usize {
        match self {
            Self::Integers(v) => v.len(),
            Self::Floats(v) => v.len(),
            Self::Strings(v) => v.len(),
            Self::Booleans(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result envelope: `{ type, values | value, parameters, timestamp }`.
///
/// Byte output is a single encoded string and uses `value`; every other kind
/// uses `values`. Exactly one of the two is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RandomEnvelope {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<GeneratedValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Effective parameters, after defaults were applied
    pub parameters: Value,
    /// UTC, RFC 3339 with microseconds and a `Z` suffix
    pub timestamp: String,
}

impl RandomEnvelope {
    pub fn with_values(
        kind: ResultKind,
        values: GeneratedValues,
        parameters: Value,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            values: Some(values),
            value: None,
            parameters,
            timestamp: format_timestamp(generated_at),
        }
    }

    pub fn with_value(
        kind: ResultKind,
        value: String,
        parameters: Value,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            values: None,
            value: Some(value),
            parameters,
            timestamp: format_timestamp(generated_at),
        }
    }

    pub fn integers(&self) -> Option<&[i64]> {
        match &self.values {
            Some(GeneratedValues::Integers(v)) => Some(v),
            _ => None,
        }
    }

    pub fn floats(&self) -> Option<&[f64]> {
        match &self.values {
            Some(GeneratedValues::Floats(v)) => Some(v),
            _ => None,
        }
    }

    pub fn strings(&self) -> Option<&[String]> {
        match &self.values {
            Some(GeneratedValues::Strings(v)) => Some(v),
            _ => None,
        }
    }

    pub fn booleans(&self) -> Option<&[bool]> {
        match &self.values {
            Some(GeneratedValues::Booleans(v)) => Some(v),
            _ => None,
        }
    }
}

/// Format a generation time the way envelopes carry it.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
