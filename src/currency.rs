//! Currency types for the bolívar rate board

use crate::error::{Result, TasaError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies handled by the rate board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar at the official (BCV) rate
    USD,
    /// Tether, the stable-coin parallel reference
    USDT,
    /// Euro, derived from the official rate via the EUR/USD cross ratio
    EUR,
    /// Venezuelan Bolívar, the local currency
    VES,
}

impl Currency {
    /// Parse currency from string
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "USDT" => Ok(Currency::USDT),
            "EUR" => Ok(Currency::EUR),
            "VES" => Ok(Currency::VES),
            _ => Err(TasaError::InvalidData(format!("Unknown currency: {}", s))),
        }
    }

    /// Get currency code as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::USDT => "USDT",
            Currency::EUR => "EUR",
            Currency::VES => "VES",
        }
    }

    /// Get currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::USDT => "USDT",
            Currency::EUR => "€",
            Currency::VES => "Bs",
        }
    }

    /// Whether this is the local (bolívar) side of a conversion
    pub fn is_local(&self) -> bool {
        matches!(self, Currency::VES)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
