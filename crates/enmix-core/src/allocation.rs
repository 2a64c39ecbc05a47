//! Proportional allocation of a user's consumption to renewable sources.
//!
//! Given a consumption figure and a reference year, the calculator scales
//! the consumption by that year's renewable-to-total ratio. Invalid input
//! is a typed failure rather than a silent no-op, so callers can tell the
//! user what went wrong.

use serde::Serialize;
use thiserror::Error;

use crate::units::{round2, Percent, TerawattHours};
use crate::MixRecord;

/// Rejected consumption input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    /// NaN or infinite consumption
    #[error("consumption must be a finite number, got {0}")]
    NotFinite(f64),

    /// Zero or negative consumption
    #[error("consumption must be greater than zero, got {0}")]
    NonPositive(f64),
}

/// Result of a proportional allocation, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    /// Renewable supply of the reference year
    pub total_renewable: TerawattHours,
    /// Renewable share of the reference year
    pub percentage: Percent,
    /// The consumption that was allocated
    pub consumption: TerawattHours,
    /// Renewable portion of the consumption, rounded to 2 decimals
    pub user_renewable: TerawattHours,
}

/// Allocate `consumption` against `reference`, the most recent record of the
/// series. Stateless; the reference record is not modified.
pub fn allocate(consumption: f64, reference: &MixRecord) -> Result<Allocation, AllocationError> {
    if !consumption.is_finite() {
        return Err(AllocationError::NotFinite(consumption));
    }
    if consumption <= 0.0 {
        return Err(AllocationError::NonPositive(consumption));
    }

    let proportion = reference.total_renewable / reference.total_generation;
    let user_renewable = TerawattHours(round2(consumption * proportion));

    Ok(Allocation {
        total_renewable: reference.total_renewable,
        percentage: reference.percentage,
        consumption: TerawattHours(consumption),
        user_renewable,
    })
}
