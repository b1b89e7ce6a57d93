use serde::{Deserialize, Serialize};

use super::whole_number;
use crate::error::GenerationError;
use crate::value_objects::bounds::BYTE_LENGTH;
use crate::value_objects::ByteEncoding;

/// Parameters for `generate_random_bytes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BytesRequest {
    /// Number of raw bytes, before encoding
    #[serde(deserialize_with = "whole_number")]
    pub length: i64,
    /// `hex` or `base64`
    pub encoding: String,
}

impl Default for BytesRequest {
    fn default() -> Self {
        Self {
            length: 32,
            encoding: ByteEncoding::Hex.as_str().to_string(),
        }
    }
}

/// Validated bytes request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BytesSpec {
    pub length: usize,
    pub encoding: ByteEncoding,
}

impl BytesRequest {
    pub fn validate(&self) -> Result<BytesSpec, GenerationError> {
        let length = BYTE_LENGTH.check_length(self.length)?;
        let encoding = self.encoding.parse()?;
        Ok(BytesSpec { length, encoding })
    }
}
