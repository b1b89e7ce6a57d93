use serde::{Deserialize, Serialize};

use super::{default_one, whole_number};
use crate::error::GenerationError;
use crate::value_objects::bounds::UUID_COUNT;
use crate::value_objects::UuidFormat;

/// Parameters for `generate_uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidRequest {
    #[serde(default = "default_one", deserialize_with = "whole_number")]
    pub count: i64,
    /// `standard` (hyphenated) or `compact`
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    UuidFormat::Standard.as_str().to_string()
}

impl Default for UuidRequest {
    fn default() -> Self {
        Self {
            count: default_one(),
            format: default_format(),
        }
    }
}

/// Validated UUID request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidSpec {
    pub count: usize,
    pub format: UuidFormat,
}

impl UuidRequest {
    pub fn validate(&self) -> Result<UuidSpec, GenerationError> {
        let count = UUID_COUNT.check_count(self.count)?;
        let format = self.format.parse()?;
        Ok(UuidSpec { count, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request: UuidRequest = serde_json::from_str("{}").expect("empty object should decode");
        assert_eq!(
            request.validate(),
            Ok(UuidSpec {
                count: 1,
                format: UuidFormat::Standard
            })
        );
    }

    #[test]
    fn test_count_capped_at_one_hundred() {
        let request = UuidRequest {
            count: 101,
            ..Default::default()
        };
        assert_eq!(
            request.validate(),
            Err(GenerationError::InvalidCount {
                count: 101,
                min: 1,
                max: 100
            })
        );
    }

    #[test]
    fn test_unknown_format() {
        let request = UuidRequest {
            format: "urn".into(),
            ..Default::default()
        };
        assert_eq!(
            request.validate(),
            Err(GenerationError::InvalidFormat("urn".into()))
        );
    }
}
