use serde::{Deserialize, Serialize};

use super::whole_number;
use crate::error::GenerationError;
use crate::value_objects::bounds::{FLOAT_COUNT, FLOAT_PRECISION};

/// Above this magnitude every `f64` is already an integer, so scaling by a
/// power of ten and rounding cannot remove any fractional digits.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Parameters for `generate_random_float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatRequest {
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, exclusive
    pub max: f64,
    #[serde(deserialize_with = "whole_number")]
    pub count: i64,
    /// Decimal places kept after rounding
    #[serde(deserialize_with = "whole_number")]
    pub precision: i64,
}

impl Default for FloatRequest {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            count: 1,
            precision: 6,
        }
    }
}

/// Validated float request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatSpec {
    pub min: f64,
    pub max: f64,
    pub count: usize,
    pub precision: u32,
}

impl FloatRequest {
    pub fn validate(&self) -> Result<FloatSpec, GenerationError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(GenerationError::invalid_range(
                "minimum and maximum must be finite numbers",
            ));
        }
        if self.min >= self.max {
            return Err(GenerationError::invalid_range(format!(
                "minimum value {} must be less than maximum value {}",
                self.min, self.max
            )));
        }
        if !(self.max - self.min).is_finite() {
            return Err(GenerationError::invalid_range(
                "range width exceeds the representable float range",
            ));
        }
        let count = FLOAT_COUNT.check_count(self.count)?;
        if !FLOAT_PRECISION.contains(self.precision) {
            return Err(GenerationError::invalid_precision(format!(
                "precision must be between {} and {}, got {}",
                FLOAT_PRECISION.min, FLOAT_PRECISION.max, self.precision
            )));
        }
        let precision = self.precision as u32;

        let spec = FloatSpec {
            min: self.min,
            max: self.max,
            count,
            precision,
        };
        if !spec.has_grid_point() {
            return Err(GenerationError::invalid_precision(format!(
                "no value with {} decimal places lies in [{}, {})",
                precision, self.min, self.max
            )));
        }
        Ok(spec)
    }
}

impl FloatSpec {
    /// Map a uniform draw from `[0, 1)` to a rounded value in `[min, max)`.
    ///
    /// Rounding is half away from zero. A value that would round up to `max`
    /// is rounded down instead, and one that would round below `min` is
    /// rounded up, so the result never leaves the half-open range.
    pub fn value_from_unit(&self, unit: f64) -> f64 {
        let mut raw = self.min + (self.max - self.min) * unit;
        if raw >= self.max {
            raw = previous_float(self.max);
        }

        let scale = self.scale();
        let scaled = raw * scale;
        if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
            return raw;
        }

        let mut value = scaled.round() / scale;
        if value >= self.max {
            value = self.grid_floor(raw);
        }
        if value < self.min {
            value = self.grid_ceil(raw);
        }
        if value < self.min || value >= self.max {
            return raw;
        }
        value
    }

    fn scale(&self) -> f64 {
        10f64.powi(self.precision as i32)
    }

    /// Whether at least one value with `precision` decimals lies in `[min, max)`.
    fn has_grid_point(&self) -> bool {
        let scaled_min = self.min * self.scale();
        if !scaled_min.is_finite() || scaled_min.abs() >= EXACT_INTEGER_LIMIT {
            return true;
        }
        self.grid_ceil(self.min) < self.max
    }

    /// Smallest value with `precision` decimals that is `>= x`.
    ///
    /// Works from the nearest grid point rather than `ceil` of the scaled
    /// value, since `x * scale` can land just above an exact integer
    /// (`1.1 * 100 == 110.00000000000001`).
    fn grid_ceil(&self, x: f64) -> f64 {
        let scale = self.scale();
        let k = (x * scale).round();
        let candidate = k / scale;
        if candidate >= x {
            candidate
        } else {
            (k + 1.0) / scale
        }
    }

    /// Largest value with `precision` decimals that is `<= x`.
    fn grid_floor(&self, x: f64) -> f64 {
        let scale = self.scale();
        let k = (x * scale).round();
        let candidate = k / scale;
        if candidate <= x {
            candidate
        } else {
            (k - 1.0) / scale
        }
    }
}

/// The largest `f64` strictly below `x`. `x` must be finite.
fn previous_float(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}
