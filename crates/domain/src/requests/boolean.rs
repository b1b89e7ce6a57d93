use serde::{Deserialize, Serialize};

use super::whole_number;
use crate::error::GenerationError;
use crate::value_objects::bounds::BOOLEAN_COUNT;

/// Parameters for `generate_random_boolean`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BooleanRequest {
    #[serde(deserialize_with = "whole_number")]
    pub count: i64,
    /// Probability that each value is `true`
    pub probability: f64,
}

impl Default for BooleanRequest {
    fn default() -> Self {
        Self {
            count: 1,
            probability: 0.5,
        }
    }
}

/// Validated boolean request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BooleanSpec {
    pub count: usize,
    pub probability: f64,
}

impl BooleanRequest {
    pub fn validate(&self) -> Result<BooleanSpec, GenerationError> {
        let count = BOOLEAN_COUNT.check_count(self.count)?;
        // NaN fails the range check
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(GenerationError::InvalidProbability(self.probability));
        }
        Ok(BooleanSpec {
            count,
            probability: self.probability,
        })
    }
}

impl BooleanSpec {
    /// Decide one value from a uniform draw in `[0, 1)`.
    pub fn decide(&self, unit: f64) -> bool {
        unit < self.probability
    }
}
