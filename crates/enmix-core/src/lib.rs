//! # enmix-core: Synthetic Energy-Mix Series
//!
//! Provides the record model, the deterministic yearly generator, and the
//! proportional allocation calculator.
//!
//! ## Design Philosophy
//!
//! The series is a **pure function of the year range**: every contribution
//! is a closed-form expression over the calendar year, so the dataset can be
//! regenerated at any time instead of being persisted. Consumers receive the
//! series ordered descending by year; the first record is the reference for
//! allocation.
//!
//! ## Quick Start
//!
//! ```rust
//! use enmix_core::*;
//!
//! // Generate the default 1965-2022 series (2022 first)
//! let series = MixSeries::generate();
//! let reference = series.latest().unwrap();
//! assert_eq!(reference.year, 2022);
//!
//! // Allocate 1000 TWh of consumption proportionally
//! let allocation = allocation::allocate(1000.0, reference).unwrap();
//! assert!(allocation.user_renewable.value() > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`generate`] - Closed-form yearly record generation
//! - [`allocation`] - Proportional renewable-share calculator
//! - [`diagnostics`] - Validation and diagnostic reporting
//! - [`units`] - Newtype wrappers for TWh and percentages

use serde::{Deserialize, Serialize};

pub mod allocation;
pub mod diagnostics;
pub mod error;
pub mod generate;
pub mod units;

pub use allocation::{allocate, Allocation, AllocationError};
pub use diagnostics::{DiagnosticIssue, Diagnostics, Severity};
pub use error::{CoreError, CoreResult};
pub use generate::{generate_series, record_for_year, YearRange, EPOCH_YEAR, FINAL_YEAR};
pub use units::{round2, Percent, TerawattHours};

/// One calendar year's synthetic energy-mix data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixRecord {
    pub year: i32,
    /// Solar contribution (zero before 1990)
    pub solar: TerawattHours,
    /// Wind contribution (zero before 1985)
    pub wind: TerawattHours,
    /// Hydro contribution
    pub hydro: TerawattHours,
    /// Other renewable sources
    pub others: TerawattHours,
    /// Sum of the four renewable contributions
    pub total_renewable: TerawattHours,
    /// Renewable plus fossil generation
    pub total_generation: TerawattHours,
    /// Renewable share of total generation, rounded to 2 decimals
    pub percentage: Percent,
}

/// The generated series, ordered descending by year.
///
/// Generated once per session and immutable afterwards; regenerating with
/// the same range yields an identical series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixSeries {
    records: Vec<MixRecord>,
}

impl MixSeries {
    /// Generate the default 1965-2022 series.
    pub fn generate() -> Self {
        Self::generate_range(YearRange::default())
    }

    /// Generate the series for an explicit range.
    pub fn generate_range(range: YearRange) -> Self {
        Self {
            records: generate_series(range),
        }
    }

    /// The most recent record, used as the allocation reference.
    pub fn latest(&self) -> Option<&MixRecord> {
        self.records.first()
    }

    /// All records, most recent first.
    pub fn records(&self) -> &[MixRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MixRecord> {
        self.records.iter()
    }

    /// Validate the series invariants.
    ///
    /// Populates the provided `Diagnostics` with any warnings/errors found.
    pub fn validate_into(&self, diag: &mut Diagnostics) {
        if self.records.is_empty() {
            diag.add_error("structure", "Series has no records");
            return; // Can't check further
        }

        for pair in self.records.windows(2) {
            if pair[0].year != pair[1].year + 1 {
                diag.add_error_for_year(
                    "ordering",
                    &format!(
                        "Expected year {} after {}, found {}",
                        pair[0].year - 1,
                        pair[0].year,
                        pair[1].year
                    ),
                    pair[1].year,
                );
            }
        }

        for record in &self.records {
            let components =
                record.solar + record.wind + record.hydro + record.others;
            if (components - record.total_renewable).value().abs() > 1e-9 {
                diag.add_error_for_year(
                    "structure",
                    "Renewable total does not match its components",
                    record.year,
                );
            }
            if record.total_renewable.value() < 0.0 {
                diag.add_error_for_year("structure", "Renewable total is negative", record.year);
            }
            if record.total_generation.value() <= record.total_renewable.value() {
                diag.add_error_for_year(
                    "structure",
                    "Total generation does not exceed the renewable total",
                    record.year,
                );
            }
            let share = record.percentage.value();
            if !(0.0..=100.0).contains(&share) {
                diag.add_error_for_year(
                    "share",
                    &format!("Share {share} outside 0..=100"),
                    record.year,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_final_year() {
        let series = MixSeries::generate();
        assert_eq!(series.len(), 58);
        assert_eq!(series.latest().map(|r| r.year), Some(2022));
    }

    #[test]
    fn test_generated_series_validates_clean() {
        let series = MixSeries::generate();
        let mut diag = Diagnostics::new();
        series.validate_into(&mut diag);
        assert!(!diag.has_issues(), "{diag}");
    }

    #[test]
    fn test_custom_range_validates_clean() {
        let range = YearRange::new(1980, 1995).unwrap();
        let series = MixSeries::generate_range(range);
        let mut diag = Diagnostics::new();
        series.validate_into(&mut diag);
        assert!(!diag.has_issues(), "{diag}");
    }

    #[test]
    fn test_validation_flags_broken_record() {
        let mut series = MixSeries::generate_range(YearRange::new(2020, 2022).unwrap());
        series.records[1].total_generation = TerawattHours(1.0);

        let mut diag = Diagnostics::new();
        series.validate_into(&mut diag);
        assert!(diag.has_errors());
        assert!(diag
            .errors()
            .any(|i| i.year == Some(2021) && i.message.contains("does not exceed")));
    }

    #[test]
    fn test_validation_flags_gap() {
        let mut series = MixSeries::generate_range(YearRange::new(2018, 2022).unwrap());
        series.records.remove(2); // drop 2020

        let mut diag = Diagnostics::new();
        series.validate_into(&mut diag);
        assert!(diag.errors().any(|i| i.category == "ordering"));
    }

    #[test]
    fn test_empty_series_is_an_error() {
        let series = MixSeries { records: Vec::new() };
        let mut diag = Diagnostics::new();
        series.validate_into(&mut diag);
        assert!(diag.has_errors());
        assert!(diag.errors().any(|i| i.message.contains("no records")));
    }

    #[test]
    fn test_records_serialize_to_json() {
        let series = MixSeries::generate_range(YearRange::new(2021, 2022).unwrap());
        let json = serde_json::to_string_pretty(series.records()).unwrap();
        assert!(json.contains("\"year\": 2022"));
        assert!(json.contains("\"percentage\""));
    }
}
