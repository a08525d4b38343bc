//! Conversion engine
//!
//! Stateless amount conversion, re-evaluated on every input change. Input
//! comes straight from a text field, so non-numeric text yields exactly
//! zero rather than an error.

use crate::constants::SURCHARGE_FACTOR;
use crate::currency::Currency;

/// Conversion direction relative to the local currency (bolívar)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Foreign currency into bolívars (amount × rate)
    ToLocal,
    /// Bolívars into foreign currency (amount ÷ rate)
    FromLocal,
}

/// Convert a raw amount string at the given rate
///
/// The IGTF surcharge applies only in the [`Direction::ToLocal`] direction;
/// the flag is ignored otherwise. A non-positive rate means "no data" and
/// yields zero. No rounding is applied; display formatting owns precision.
pub fn convert(amount: &str, rate: f64, direction: Direction, surcharge: bool) -> f64 {
    let value: f64 = match amount.trim().parse() {
        Ok(v) => v,
        Err(_) => return 0.0,
    };
    if !value.is_finite() || rate <= 0.0 {
        return 0.0;
    }

    let result = match direction {
        Direction::ToLocal => value * rate,
        Direction::FromLocal => value / rate,
    };

    if surcharge && direction == Direction::ToLocal {
        result * SURCHARGE_FACTOR
    } else {
        result
    }
}

/// One converter evaluation as the UI owns it: raw amount text, selected
/// foreign currency, direction and the surcharge toggle. Produced per
/// keystroke, consumed immediately, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: String,
    pub currency: Currency,
    pub direction: Direction,
    pub surcharge: bool,
}

impl ConversionRequest {
    pub fn new(amount: impl Into<String>, currency: Currency, direction: Direction) -> Self {
        Self {
            amount: amount.into(),
            currency,
            direction,
            surcharge: false,
        }
    }

    pub fn with_surcharge(mut self, surcharge: bool) -> Self {
        self.surcharge = surcharge;
        self
    }

    /// Evaluate against the rate for the selected currency
    pub fn evaluate(&self, rate: f64) -> f64 {
        convert(&self.amount, rate, self.direction, self.surcharge)
    }
}
