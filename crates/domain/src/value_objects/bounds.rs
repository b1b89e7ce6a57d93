//! Inclusive bounds for numeric request parameters.

use crate::error::GenerationError;

/// An inclusive `[min, max]` interval a request parameter must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// `[min, i64::MAX]`, for parameters with no upper limit.
    pub const fn at_least(min: i64) -> Self {
        Self { min, max: i64::MAX }
    }

    /// The upper limit, or `None` when the bound is open-ended.
    pub fn upper(&self) -> Option<i64> {
        (self.max < i64::MAX).then_some(self.max)
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Check a `count` parameter and convert it to a loop bound.
    pub fn check_count(&self, count: i64) -> Result<usize, GenerationError> {
        self.to_usize(count).ok_or(GenerationError::InvalidCount {
            count,
            min: self.min,
            max: self.max,
        })
    }

    /// Check a `length` parameter and convert it to a buffer size.
    pub fn check_length(&self, length: i64) -> Result<usize, GenerationError> {
        self.to_usize(length).ok_or(GenerationError::InvalidLength {
            length,
            min: self.min,
            max: self.max,
        })
    }

    fn to_usize(&self, value: i64) -> Option<usize> {
        if self.contains(value) {
            usize::try_from(value).ok()
        } else {
            None
        }
    }
}

pub const INTEGER_COUNT: Bounds = Bounds::new(1, 1000);
pub const FLOAT_COUNT: Bounds = Bounds::new(1, 1000);
pub const FLOAT_PRECISION: Bounds = Bounds::new(0, 15);
pub const BYTE_LENGTH: Bounds = Bounds::new(1, 1024);
pub const UUID_COUNT: Bounds = Bounds::new(1, 100);
pub const STRING_LENGTH: Bounds = Bounds::new(1, 256);
pub const STRING_COUNT: Bounds = Bounds::new(1, 100);
/// Only the pool size limits picks without duplicates.
pub const CHOICE_COUNT: Bounds = Bounds::at_least(1);
pub const BOOLEAN_COUNT: Bounds = Bounds::new(1, 1000);
