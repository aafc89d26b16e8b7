//! Operand input checks applied before any layout is computed

use crate::constants::MAX_TOTAL_UNITS;
use crate::error::{LayoutError, LayoutResult};
use crate::layout::{GridLayout, Layout};
use serde::{Deserialize, Serialize};

/// Parse one operand as a non-negative integer
pub fn parse_operand(input: &str) -> LayoutResult<u32> {
    let trimmed = input.trim();
    let invalid = |reason: &str| LayoutError::InvalidOperand {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("empty input"));
    }
    if trimmed.starts_with('-') {
        return Err(invalid("negative values are not allowed"));
    }
    if !trimmed.trim_start_matches('+').chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("not a whole number"));
    }

    trimmed.parse::<u32>().map_err(|e| invalid(&e.to_string()))
}

/// A validated pair of operand counts
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Operands {
    pub first: u32,
    pub second: u32,
}

impl Operands {
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    /// Parse both operands from user text
    pub fn parse(first: &str, second: &str) -> LayoutResult<Self> {
        Ok(Self::new(parse_operand(first)?, parse_operand(second)?))
    }

    pub fn total(&self) -> u64 {
        self.first as u64 + self.second as u64
    }

    /// Reject totals above `max`
    pub fn check_limit(self, max: u64) -> LayoutResult<Self> {
        let total = self.total();
        if total > max {
            return Err(LayoutError::TooManyUnits { total, max });
        }
        Ok(self)
    }

    /// Reject totals above [`MAX_TOTAL_UNITS`]
    pub fn checked(self) -> LayoutResult<Self> {
        self.check_limit(MAX_TOTAL_UNITS)
    }

    pub fn layout(&self, grid: &GridLayout) -> Layout {
        grid.compute(self.first, self.second)
    }
}
