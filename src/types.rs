//! Core types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rate type (bolívars per unit of foreign currency)
pub type Rate = f64;

/// One calendar day's rate snapshot in the reconciled series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Calendar date the rates are valid on (date-only, unique per series)
    pub iso_date: NaiveDate,
    /// Short human label (dd/MM) derived from `iso_date`
    pub display_date: String,
    /// Official (BCV) USD rate in bolívars
    pub official_rate: Rate,
    /// Stable-coin (USDT) rate; 0.0 when unknown for the day
    pub secondary_rate: Rate,
    /// EUR rate, always `official_rate * cross_ratio` rounded to 4 decimals
    pub derived_rate: Rate,
}

impl RatePoint {
    /// Create a new rate point; the display label is derived from the date
    pub fn new(
        iso_date: NaiveDate,
        official_rate: Rate,
        secondary_rate: Rate,
        derived_rate: Rate,
    ) -> Self {
        Self {
            iso_date,
            display_date: iso_date.format("%d/%m").to_string(),
            official_rate,
            secondary_rate,
            derived_rate,
        }
    }
}

/// Raw history-feed entry, keyed by its publication date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Date the rate was published (one day before it takes effect)
    pub published: NaiveDate,
    /// Official USD rate in bolívars
    pub rate: Rate,
}

impl HistoryEntry {
    pub fn new(published: NaiveDate, rate: Rate) -> Self {
        Self { published, rate }
    }
}

/// Outcome of the independent source fetches, one slot per source
///
/// Each slot is `None`/empty when its fetch failed; the reconciler maps
/// missing slots to their defined fallbacks.
#[derive(Debug, Clone, Default)]
pub struct SourceReadings {
    /// Today's official (BCV) USD rate
    pub official: Option<Rate>,
    /// Today's stable-coin (USDT) rate
    pub secondary: Option<Rate>,
    /// EUR per local-currency-equivalent of one USD (already inverted)
    pub cross_ratio: Option<f64>,
    /// Trailing-window history feed entries, publication-dated
    pub history: Vec<HistoryEntry>,
}

/// Day-over-day direction of a rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// Classify the move from `previous` to `current`
    pub fn of(current: Rate, previous: Rate) -> Self {
        if current > previous {
            Trend::Up
        } else if current < previous {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_point_display_date() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let point = RatePoint::new(d, 36.5, 0.0, 39.42);
        assert_eq!(point.display_date, "05/01");
    }

    #[test]
    fn test_trend_classification() {
        assert_eq!(Trend::of(37.0, 36.0), Trend::Up);
        assert_eq!(Trend::of(36.0, 37.0), Trend::Down);
        assert_eq!(Trend::of(36.0, 36.0), Trend::Neutral);
    }

    #[test]
    fn test_source_readings_default() {
        let readings = SourceReadings::default();
        assert!(readings.official.is_none());
        assert!(readings.cross_ratio.is_none());
        assert!(readings.history.is_empty());
    }
}
