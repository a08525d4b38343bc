//! End-to-end tests over the public API: source readings through
//! reconciliation, lookup and conversion.

use approx::assert_relative_eq;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use tasacalc::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_pipeline_lagging_history() {
    let _ = env_logger::builder().is_test(true).try_init();

    // History feed lags two days behind; the current fetch is fresher.
    let today = date(2025, 1, 10);
    let readings = SourceReadings {
        official: Some(36.80),
        secondary: Some(52.10),
        cross_ratio: Some(1.08),
        history: vec![
            HistoryEntry::new(date(2025, 1, 5), 36.20),
            HistoryEntry::new(date(2025, 1, 6), 36.40),
            HistoryEntry::new(date(2025, 1, 7), 36.50),
        ],
    };

    let series = reconcile(readings, today);
    // Three shifted history points plus the appended today point
    assert_eq!(series.len(), 4);
    assert_eq!(series.latest().unwrap().iso_date, today);

    let view = lookup(&series, today).unwrap();
    assert_relative_eq!(view.current.official_rate, 36.80);
    assert_relative_eq!(view.current.secondary_rate, 52.10);
    assert_eq!(view.official_trend(), Trend::Up);

    // Looking up a mid-window date forward-fills from Jan 7 (valid Jan 8)
    let view = lookup(&series, date(2025, 1, 9)).unwrap();
    assert_eq!(view.current.iso_date, date(2025, 1, 8));
    assert_relative_eq!(view.current.official_rate, 36.50);

    let bolivars = convert("100", view.current.official_rate, Direction::ToLocal, false);
    assert_relative_eq!(bolivars, 3650.0);
    let with_igtf = convert("100", view.current.official_rate, Direction::ToLocal, true);
    assert_relative_eq!(with_igtf, 3759.50);
}

#[test]
fn derived_rate_matches_cross_ratio_product() {
    let readings = SourceReadings {
        official: Some(36.50),
        secondary: None,
        cross_ratio: Some(1.08),
        history: vec![],
    };
    let series = reconcile(readings, date(2025, 1, 10));
    assert_relative_eq!(series.latest().unwrap().derived_rate, 39.42);
}

#[test]
fn total_source_failure_renders_zeros() {
    let series = reconcile(SourceReadings::default(), date(2025, 1, 10));
    assert!(series.is_empty());
    assert!(lookup(&series, date(2025, 1, 10)).is_none());

    // Downstream still renders something: zero-valued conversion
    assert_relative_eq!(convert("100", 0.0, Direction::ToLocal, false), 0.0);
    assert_eq!(format_amount(0.0), "0,00");
}

#[test]
fn lookup_forward_fill_and_floor() {
    let readings = SourceReadings {
        history: vec![
            // Published a day early so validity lands on Jan 1 and Jan 5
            HistoryEntry::new(date(2024, 12, 31), 36.0),
            HistoryEntry::new(date(2025, 1, 4), 37.0),
        ],
        ..Default::default()
    };
    let series = reconcile(readings, date(2025, 1, 5));

    let view = lookup(&series, date(2025, 1, 3)).unwrap();
    assert_eq!(view.current.iso_date, date(2025, 1, 1));
    assert_eq!(view.previous.iso_date, date(2025, 1, 1));
    assert_eq!(view.official_trend(), Trend::Neutral);

    let view = lookup(&series, date(2025, 1, 6)).unwrap();
    assert_eq!(view.current.iso_date, date(2025, 1, 5));
    assert_eq!(view.previous.iso_date, date(2025, 1, 1));
    assert_eq!(view.official_trend(), Trend::Up);
}

#[test]
fn keypad_precedence_sequence() {
    let mut calc = Calculator::new();
    calc.press_all(&[
        Key::Digit(2),
        Key::Add,
        Key::Digit(3),
        Key::Multiply,
        Key::Digit(4),
        Key::Equals,
    ]);
    assert_eq!(calc.display(), "14");
}

#[test]
fn converter_result_formats_for_display() {
    let result = convert("1000", 36.5, Direction::ToLocal, false);
    assert_eq!(format_amount(result), "36.500,00");
}

#[test]
fn day_summary_uses_latest_point() {
    let readings = SourceReadings {
        official: Some(36.50),
        secondary: Some(52.30),
        cross_ratio: Some(1.08),
        history: vec![],
    };
    let series = reconcile(readings, date(2025, 1, 10));
    let summary = day_summary(series.latest().unwrap());
    assert!(summary.starts_with("Tasa del día:"));
    assert!(summary.contains("36.50"));
    assert!(summary.contains("52.30"));
}

proptest! {
    /// The reconciled series is strictly ascending with no duplicate dates,
    /// for any spread of publication offsets and rates.
    #[test]
    fn series_strictly_ascending(
        offsets in prop::collection::vec(0i64..60, 0..40),
        rates in prop::collection::vec(1.0f64..500.0, 40),
        official in prop::option::of(1.0f64..500.0),
    ) {
        let base = date(2025, 1, 1);
        let history: Vec<HistoryEntry> = offsets
            .iter()
            .zip(rates.iter())
            .map(|(&off, &rate)| HistoryEntry::new(base + Duration::days(off), rate))
            .collect();
        let readings = SourceReadings {
            official,
            secondary: None,
            cross_ratio: Some(1.08),
            history,
        };
        let series = reconcile(readings, date(2025, 3, 15));

        for pair in series.points().windows(2) {
            prop_assert!(pair[0].iso_date < pair[1].iso_date);
        }
    }

    /// Every point's validity date is exactly publication + 1 day.
    #[test]
    fn validity_shift_is_one_day(offset in 0i64..60, rate in 1.0f64..500.0) {
        let published = date(2025, 1, 1) + Duration::days(offset);
        let readings = SourceReadings {
            history: vec![HistoryEntry::new(published, rate)],
            ..Default::default()
        };
        let series = reconcile(readings, date(2025, 6, 1));
        prop_assert_eq!(series.points()[0].iso_date, published + Duration::days(1));
    }

    /// Round-tripping a conversion through both directions recovers the
    /// amount (no surcharge involved).
    #[test]
    fn conversion_directions_are_inverse(amount in 0.01f64..1e6, rate in 0.01f64..500.0) {
        let to_local = convert(&amount.to_string(), rate, Direction::ToLocal, false);
        let back = convert(&to_local.to_string(), rate, Direction::FromLocal, false);
        prop_assert!((back - amount).abs() / amount < 1e-9);
    }
}
