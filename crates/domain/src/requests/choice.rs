use serde::{Deserialize, Serialize};

use super::{default_one, default_true, whole_number};
use crate::error::GenerationError;
use crate::value_objects::bounds::CHOICE_COUNT;

/// Parameters for `generate_random_choice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRequest {
    /// Items to pick from, in caller order
    pub choices: Vec<String>,
    #[serde(default = "default_one", deserialize_with = "whole_number")]
    pub count: i64,
    /// When false, each input position is picked at most once
    #[serde(default = "default_true")]
    pub allow_duplicates: bool,
}

impl ChoiceRequest {
    pub fn new(choices: Vec<String>) -> Self {
        Self {
            choices,
            count: default_one(),
            allow_duplicates: default_true(),
        }
    }

    pub fn validate(&self) -> Result<ChoiceSpec<'_>, GenerationError> {
        if self.choices.is_empty() {
            return Err(GenerationError::EmptyChoices);
        }
        let count = CHOICE_COUNT.check_count(self.count)?;
        if !self.allow_duplicates && count > self.choices.len() {
            return Err(GenerationError::DuplicatesRequestedExceedPoolSize {
                requested: self.count,
                available: self.choices.len(),
            });
        }
        Ok(ChoiceSpec {
            choices: &self.choices,
            count,
            allow_duplicates: self.allow_duplicates,
        })
    }
}

/// Validated choice request, borrowing the caller's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceSpec<'a> {
    pub choices: &'a [String],
    pub count: usize,
    pub allow_duplicates: bool,
}
