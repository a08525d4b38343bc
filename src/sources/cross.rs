//! Cross-rate table source (exchangerate-api)
//!
//! Supplies the general USD-based rate table from which the EUR/USD cross
//! ratio is taken. The published value is EUR per USD, so it is inverted to
//! get "USD-equivalents per EUR", the multiplier the reconciler applies to
//! the official rate.

use crate::error::{Result, TasaError};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const EXCHANGERATE_BASE_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// Cross-rate table source (no API key required)
pub struct CrossRateSource {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct CrossPayload {
    rates: HashMap<String, f64>,
}

impl CrossRateSource {
    /// Create a new cross-rate source
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("tasacalc/0.1")
            .build()
            .map_err(|e| TasaError::SourceError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Reuse an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the inverted EUR/USD cross ratio
    pub async fn fetch_ratio(&self) -> Result<f64> {
        let response = self
            .client
            .get(EXCHANGERATE_BASE_URL)
            .send()
            .await
            .map_err(|e| TasaError::SourceError(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(TasaError::SourceError(format!(
                "exchangerate-api returned error: {}",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| TasaError::SourceError(format!("Failed to read response: {}", e)))?;

        parse_ratio(&text)
    }
}

/// Extract and invert the EUR ratio from an exchangerate-api payload
fn parse_ratio(json: &str) -> Result<f64> {
    let payload: CrossPayload = serde_json::from_str(json)
        .map_err(|e| TasaError::ParseError(format!("exchangerate-api: {}", e)))?;

    let eur = payload
        .rates
        .get("EUR")
        .copied()
        .ok_or_else(|| TasaError::InvalidData("No EUR entry in rate table".to_string()))?;

    if eur <= 0.0 {
        return Err(TasaError::InvalidData(format!(
            "Non-positive EUR ratio: {}",
            eur
        )));
    }
    Ok(1.0 / eur)
}
