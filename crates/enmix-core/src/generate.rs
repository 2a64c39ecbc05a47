//! Deterministic generation of the yearly energy-mix series.
//!
//! Every figure is a closed-form function of the calendar year: no
//! randomness, no external input. Two runs over the same range produce
//! identical series, which is what makes the allocation calculator
//! reproducible.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::units::{Percent, TerawattHours};
use crate::MixRecord;

/// First year of the historical dataset. Growth offsets stay anchored here
/// even for custom ranges, so overlapping years always agree with the
/// default series.
pub const EPOCH_YEAR: i32 = 1965;

/// Last year of the default historical dataset.
pub const FINAL_YEAR: i32 = 2022;

/// Solar generation is zero before this year.
const SOLAR_START: i32 = 1990;

/// Wind generation is zero before this year.
const WIND_START: i32 = 1985;

/// Inclusive range of years to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    /// Create a range, rejecting inverted bounds.
    pub fn new(start: i32, end: i32) -> CoreResult<Self> {
        if start > end {
            return Err(CoreError::Config(format!(
                "start year {start} is after end year {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Number of years covered.
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: EPOCH_YEAR,
            end: FINAL_YEAR,
        }
    }
}

fn solar_for(year: i32) -> TerawattHours {
    if year < SOLAR_START {
        TerawattHours::ZERO
    } else {
        TerawattHours((f64::from(year - SOLAR_START).powf(2.1) * 0.4).round())
    }
}

fn wind_for(year: i32) -> TerawattHours {
    if year < WIND_START {
        TerawattHours::ZERO
    } else {
        TerawattHours((f64::from(year - WIND_START).powf(2.2) * 0.3).round())
    }
}

/// Compute the record for a single year.
pub fn record_for_year(year: i32) -> MixRecord {
    let d = f64::from(year - EPOCH_YEAR);

    let solar = solar_for(year);
    let wind = wind_for(year);
    let hydro = TerawattHours(2000.0 + d * 40.0);
    let others = TerawattHours(100.0 + d * 5.0);
    let fossil = TerawattHours(10000.0 + d * 150.0);

    let total_renewable = solar + wind + hydro + others;
    let total_generation = total_renewable + fossil;
    let percentage = Percent::from_ratio(total_renewable, total_generation);

    MixRecord {
        year,
        solar,
        wind,
        hydro,
        others,
        total_renewable,
        total_generation,
        percentage,
    }
}

/// Generate the series for a range, ordered descending by year (most recent
/// first, for presentation and as the calculator's reference).
pub fn generate_series(range: YearRange) -> Vec<MixRecord> {
    let mut records: Vec<MixRecord> = (range.start..=range.end).map(record_for_year).collect();
    records.reverse();
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_covers_history() {
        let range = YearRange::default();
        assert_eq!(range.start, 1965);
        assert_eq!(range.end, 2022);
        assert_eq!(range.len(), 58);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = YearRange::new(2022, 1965).unwrap_err();
        assert!(err.to_string().contains("after end year"));
    }

    #[test]
    fn test_one_record_per_year_descending() {
        let records = generate_series(YearRange::default());
        assert_eq!(records.len(), 58);
        assert_eq!(records.first().map(|r| r.year), Some(2022));
        assert_eq!(records.last().map(|r| r.year), Some(1965));
        for pair in records.windows(2) {
            assert_eq!(pair[0].year, pair[1].year + 1);
        }
    }

    #[test]
    fn test_source_onset_years() {
        assert_eq!(record_for_year(1989).solar, TerawattHours::ZERO);
        assert_eq!(record_for_year(1990).solar, TerawattHours::ZERO);
        assert_eq!(record_for_year(1984).wind, TerawattHours::ZERO);
        assert_eq!(record_for_year(1985).wind, TerawattHours::ZERO);
        assert!(record_for_year(1991).solar.value() > 0.0);
        assert!(record_for_year(1986).wind.value() > 0.0);
    }

    #[test]
    fn test_record_totals() {
        for year in [1965, 1984, 1985, 1990, 2000, 2022] {
            let record = record_for_year(year);
            let by_hand =
                record.solar + record.wind + record.hydro + record.others;
            assert_eq!(record.total_renewable, by_hand);
            assert!(record.total_generation.value() > record.total_renewable.value());
            assert!(record.total_renewable.value() >= 0.0);
            assert!(record.percentage.value() >= 0.0);
            assert!(record.percentage.value() <= 100.0);
        }
    }

    #[test]
    fn test_fossil_contribution() {
        // 1965: d = 0, so fossil is exactly 10000 TWh
        let record = record_for_year(1965);
        assert_eq!(
            (record.total_generation - record.total_renewable).value(),
            10000.0
        );
    }

    #[test]
    fn test_share_grows_over_the_long_run() {
        let late = record_for_year(2022);
        let early = record_for_year(1970);
        assert!(late.percentage.value() > early.percentage.value());
    }

    #[test]
    fn test_generation_is_idempotent() {
        let first = generate_series(YearRange::default());
        let second = generate_series(YearRange::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_range_stays_anchored_to_epoch() {
        let range = YearRange::new(2000, 2010).unwrap();
        let custom = generate_series(range);
        assert_eq!(custom.len(), 11);
        assert_eq!(custom.first().map(|r| r.year), Some(2010));

        // Overlapping years agree with the default series exactly
        let full = generate_series(YearRange::default());
        let full_2005 = full.iter().find(|r| r.year == 2005).unwrap();
        let custom_2005 = custom.iter().find(|r| r.year == 2005).unwrap();
        assert_eq!(full_2005, custom_2005);
    }
}
