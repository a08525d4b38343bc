//! Display formatting
//!
//! es-VE number formatting (thousands `.`, decimal `,`), short date labels
//! and the shareable day summary. Pure string helpers; no rounding happens
//! anywhere else in the crate.

use crate::types::RatePoint;
use chrono::NaiveDate;

/// Format an amount with es-VE separators and exactly two decimals
///
/// `3650.5` becomes `"3.650,50"`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    // Sign follows the rounded magnitude so -0.001 renders as "0,00"
    let negative = value < 0.0 && fixed != "0.00";
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{},{}", sign, grouped, frac_part)
}

/// Format a rate for a card display (plain two decimals)
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}", rate)
}

/// Short dd/MM label for a calendar date
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Shareable one-day summary of the board's rates
pub fn day_summary(point: &RatePoint) -> String {
    format!(
        "Tasa del día:\nUSD BCV: {} Bs\nUSDT: {} Bs\nEUR: {} Bs",
        format_rate(point.official_rate),
        format_rate(point.secondary_rate),
        format_rate(point.derived_rate),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(3650.0), "3.650,00");
        assert_eq!(format_amount(1234567.891), "1.234.567,89");
    }

    #[test]
    fn test_format_amount_small_values() {
        assert_eq!(format_amount(0.0), "0,00");
        assert_eq!(format_amount(2.739), "2,74");
        assert_eq!(format_amount(999.0), "999,00");
        assert_eq!(format_amount(1000.0), "1.000,00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1234.5), "-1.234,50");
    }

    #[test]
    fn test_format_amount_negative_rounding_to_zero_drops_sign() {
        assert_eq!(format_amount(-0.001), "0,00");
        assert_eq!(format_amount(-0.0049), "0,00");
        assert_eq!(format_amount(-0.005), "-0,01");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(36.5), "36.50");
        assert_eq!(format_rate(0.0), "0.00");
    }

    #[test]
    fn test_display_date() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(display_date(d), "07/03");
    }

    #[test]
    fn test_day_summary() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let point = RatePoint::new(d, 36.5, 52.3, 39.42);
        let summary = day_summary(&point);
        assert!(summary.contains("USD BCV: 36.50 Bs"));
        assert!(summary.contains("USDT: 52.30 Bs"));
        assert!(summary.contains("EUR: 39.42 Bs"));
    }
}
