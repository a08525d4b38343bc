//! Date-based rate lookup
//!
//! Maps a user-selected date onto the reconciled series: the applicable
//! point is the most recent one on or before the target date (forward-fill),
//! and its predecessor supports trend display.

use crate::history::RateSeries;
use crate::types::{RatePoint, Trend};
use chrono::NaiveDate;

/// The point applicable on a target date plus its predecessor
///
/// When the selected point is the first in the series, `previous` is the
/// selected point itself and every trend is neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateView<'a> {
    pub current: &'a RatePoint,
    pub previous: &'a RatePoint,
}

impl<'a> RateView<'a> {
    /// Day-over-day direction of the official (USD) rate
    pub fn official_trend(&self) -> Trend {
        Trend::of(self.current.official_rate, self.previous.official_rate)
    }

    /// Day-over-day direction of the stable-coin (USDT) rate
    pub fn secondary_trend(&self) -> Trend {
        Trend::of(self.current.secondary_rate, self.previous.secondary_rate)
    }

    /// Day-over-day direction of the derived (EUR) rate
    pub fn derived_trend(&self) -> Trend {
        Trend::of(self.current.derived_rate, self.previous.derived_rate)
    }
}

/// Find the rate view applicable on `target`
///
/// Returns the rightmost point dated on or before `target`; if the target
/// precedes the whole series, the earliest point is the floor fallback.
/// `None` only when the series is empty.
pub fn lookup(series: &RateSeries, target: NaiveDate) -> Option<RateView<'_>> {
    let points = series.points();
    if points.is_empty() {
        return None;
    }

    let idx = points
        .iter()
        .rposition(|p| p.iso_date <= target)
        .unwrap_or(0);
    let prev_idx = idx.saturating_sub(1);

    Some(RateView {
        current: &points[idx],
        previous: &points[prev_idx],
    })
}
