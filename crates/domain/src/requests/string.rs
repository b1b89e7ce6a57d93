use serde::{Deserialize, Serialize};

use super::whole_number;
use crate::error::GenerationError;
use crate::value_objects::bounds::{STRING_COUNT, STRING_LENGTH};
use crate::value_objects::Charset;

/// Parameters for `generate_random_string`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringRequest {
    /// Characters per string
    #[serde(deserialize_with = "whole_number")]
    pub length: i64,
    /// Name of the character pool
    pub charset: String,
    #[serde(deserialize_with = "whole_number")]
    pub count: i64,
}

impl Default for StringRequest {
    fn default() -> Self {
        Self {
            length: 16,
            charset: Charset::Alphanumeric.as_str().to_string(),
            count: 1,
        }
    }
}

/// Validated string request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringSpec {
    pub length: usize,
    pub charset: Charset,
    pub count: usize,
}

impl StringRequest {
    pub fn validate(&self) -> Result<StringSpec, GenerationError> {
        let length = STRING_LENGTH.check_length(self.length)?;
        let count = STRING_COUNT.check_count(self.count)?;
        let charset = self.charset.parse()?;
        Ok(StringSpec {
            length,
            charset,
            count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request: StringRequest =
            serde_json::from_str("{}").expect("empty object should decode");
        assert_eq!(
            request.validate(),
            Ok(StringSpec {
                length: 16,
                charset: Charset::Alphanumeric,
                count: 1
            })
        );
    }

    #[test]
    fn test_partial_arguments_keep_other_defaults() {
        let request: StringRequest = serde_json::from_str(r#"{"charset": "hex", "length": 8}"#)
            .expect("partial object should decode");
        assert_eq!(request.count, 1);
        assert_eq!(request.validate().map(|s| s.charset), Ok(Charset::Hex));
    }

    #[test]
    fn test_length_and_count_bounds() {
        let request = StringRequest {
            length: 257,
            ..Default::default()
        };
        assert!(matches!(
            request.validate(),
            Err(GenerationError::InvalidLength { .. })
        ));

        let request = StringRequest {
            count: 101,
            ..Default::default()
        };
        assert!(matches!(
            request.validate(),
            Err(GenerationError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_unknown_charset() {
        let request = StringRequest {
            charset: "unicode".into(),
            ..Default::default()
        };
        assert_eq!(
            request.validate(),
            Err(GenerationError::InvalidCharset("unicode".into()))
        );
    }
}
