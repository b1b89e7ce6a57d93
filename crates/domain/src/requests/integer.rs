use serde::{Deserialize, Serialize};

use super::whole_number;
use crate::error::GenerationError;
use crate::value_objects::bounds::INTEGER_COUNT;

/// Parameters for `generate_random_integer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegerRequest {
    /// Lower bound, inclusive
    #[serde(deserialize_with = "whole_number")]
    pub min: i64,
    /// Upper bound, inclusive
    #[serde(deserialize_with = "whole_number")]
    pub max: i64,
    #[serde(deserialize_with = "whole_number")]
    pub count: i64,
}

impl Default for IntegerRequest {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            count: 1,
        }
    }
}

/// Validated integer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerSpec {
    pub min: i64,
    pub max: i64,
    pub count: usize,
}

impl IntegerRequest {
    pub fn validate(&self) -> Result<IntegerSpec, GenerationError> {
        if self.min > self.max {
            return Err(GenerationError::invalid_range(format!(
                "minimum value {} cannot be greater than maximum value {}",
                self.min, self.max
            )));
        }
        let count = INTEGER_COUNT.check_count(self.count)?;

        Ok(IntegerSpec {
            min: self.min,
            max: self.max,
            count,
        })
    }
}
