//! # tasacalc
//!
//! Bolívar exchange-rate reconciliation, lookup and conversion.
//!
//! The crate merges three unreliable remote feeds (today's official BCV
//! rate, a USD cross-rate table, and a 30-day rate history) into one clean
//! daily series, answers date-based lookups with trend information, and
//! converts amounts between bolívars and foreign currency. A small keypad
//! calculator rounds out the widget's logic. Every remote failure degrades
//! to a defined fallback; nothing here panics on missing data.
//!
//! ## Example
//!
//! ```rust
//! use tasacalc::prelude::*;
//! use chrono::NaiveDate;
//!
//! let readings = SourceReadings {
//!     official: Some(36.50),
//!     secondary: Some(52.30),
//!     cross_ratio: Some(1.08),
//!     history: vec![],
//! };
//! let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//! let series = reconcile(readings, today);
//!
//! let view = lookup(&series, today).unwrap();
//! let bolivars = convert("100", view.current.official_rate, Direction::ToLocal, false);
//! assert_eq!(bolivars, 3650.0);
//! ```

pub mod calc;
pub mod constants;
pub mod convert;
pub mod currency;
pub mod error;
pub mod format;
pub mod history;
pub mod lookup;
pub mod sources;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::calc::{Calculator, Key};
    pub use crate::convert::{convert, ConversionRequest, Direction};
    pub use crate::currency::Currency;
    pub use crate::error::{Result, TasaError};
    pub use crate::format::{day_summary, display_date, format_amount, format_rate};
    pub use crate::history::{reconcile, RateSeries};
    pub use crate::lookup::{lookup, RateView};
    pub use crate::types::{HistoryEntry, RatePoint, SourceReadings, Trend};

    #[cfg(feature = "async")]
    pub use crate::sources::RateSources;
}
