//! History reconciliation
//!
//! Merges the independently-fetched source readings (current official rate,
//! stable-coin rate, EUR/USD cross ratio, trailing history feed) into one
//! clean ascending series of daily [`RatePoint`]s.
//!
//! The merge is a pure function of [`SourceReadings`] plus the calendar date
//! considered "today", so it is fully deterministic under test.

use crate::constants::{DEFAULT_EUR_USD_RATIO, DERIVED_RATE_DECIMALS, PUBLICATION_LAG_DAYS};
use crate::types::{RatePoint, SourceReadings};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Reconciled, immutable series of daily rate points
///
/// Invariants: strictly ascending by date, no duplicate dates, gaps allowed
/// (missing days are absent, never interpolated).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSeries {
    points: Vec<RatePoint>,
}

impl RateSeries {
    /// Series points in ascending date order
    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent point, the one seeding the UI's date selection
    pub fn latest(&self) -> Option<&RatePoint> {
        self.points.last()
    }
}

/// Round a derived rate to the feed's published precision (4 decimals)
pub fn round_derived(rate: f64) -> f64 {
    let factor = 10f64.powi(DERIVED_RATE_DECIMALS);
    (rate * factor).round() / factor
}

/// Merge the source readings into one reconciled series
///
/// Fallbacks per failed slot: official rate unknown (0.0), cross ratio
/// [`DEFAULT_EUR_USD_RATIO`], history empty. Total failure of every source
/// yields an empty series; consumers render zeros rather than failing.
pub fn reconcile(readings: SourceReadings, today: NaiveDate) -> RateSeries {
    let ratio = readings.cross_ratio.unwrap_or(DEFAULT_EUR_USD_RATIO);
    let current_official = readings.official.unwrap_or(0.0);
    let current_secondary = readings.secondary.unwrap_or(0.0);
    let current_derived = if current_official > 0.0 {
        round_derived(current_official * ratio)
    } else {
        0.0
    };

    // Shift publication dates to validity dates; the BTreeMap both sorts
    // ascending and collapses same-day republications (last one wins).
    let mut by_validity: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for entry in &readings.history {
        let valid = entry.published + Duration::days(PUBLICATION_LAG_DAYS);
        by_validity.insert(valid, entry.rate);
    }

    let mut points: Vec<RatePoint> = by_validity
        .into_iter()
        .map(|(date, rate)| RatePoint::new(date, rate, 0.0, round_derived(rate * ratio)))
        .collect();

    // History-unavailable fallback: synthesize a lone today-point from the
    // current rate.
    if points.is_empty() {
        if current_official > 0.0 {
            points.push(RatePoint::new(
                today,
                current_official,
                current_secondary,
                current_derived,
            ));
        }
        return RateSeries { points };
    }

    // Reconcile the series tail with today's fresher rate. The history feed
    // lags, so the last point usually predates today; a same-day point is
    // overwritten in place rather than duplicated. A future-dated point
    // (today's publication, valid tomorrow) already carries the freshest
    // feed value and is left alone to keep the series strictly ascending.
    if current_official > 0.0 {
        let last_date = points.last().map(|p| p.iso_date);
        if last_date == Some(today) {
            if let Some(last) = points.last_mut() {
                last.official_rate = current_official;
                last.secondary_rate = current_secondary;
                last.derived_rate = current_derived;
            }
        } else if last_date.is_some_and(|d| d < today) {
            points.push(RatePoint::new(
                today,
                current_official,
                current_secondary,
                current_derived,
            ));
        }
    }

    RateSeries { points }
}
