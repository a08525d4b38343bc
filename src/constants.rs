//! Business-rule constants
//!
//! Named values for the rate feed's domain rules. The publication lag in
//! particular encodes the BCV feed's "rate valid starting tomorrow"
//! semantics and must not be inlined as arithmetic.

/// Days between a history entry's publication date and its validity date
pub const PUBLICATION_LAG_DAYS: i64 = 1;

/// Fallback EUR/USD ratio when the cross-rate source is unavailable
pub const DEFAULT_EUR_USD_RATIO: f64 = 1.05;

/// IGTF levy multiplier, applied only when converting into bolívars
pub const SURCHARGE_FACTOR: f64 = 1.03;

/// Decimal places kept on derived (EUR) rates
pub const DERIVED_RATE_DECIMALS: i32 = 4;

/// Trailing window requested from the history feed
pub const HISTORY_WINDOW_DAYS: i64 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(PUBLICATION_LAG_DAYS, 1);
        assert_eq!(SURCHARGE_FACTOR, 1.03);
        assert!(DEFAULT_EUR_USD_RATIO > 1.0);
        assert_eq!(DERIVED_RATE_DECIMALS, 4);
        assert_eq!(HISTORY_WINDOW_DAYS, 30);
    }
}
