//! BCV history feed via a CORS relay
//!
//! The 30-day official-rate history comes from the BCV mirror, reached
//! through the allorigins relay. The relay wraps the true payload inside a
//! `contents` field as a JSON-encoded string, so decoding takes two parse
//! passes. Entries carry publication dates; the validity shift happens in
//! the reconciler, not here.

use crate::error::{Result, TasaError};
use crate::types::HistoryEntry;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const RELAY_BASE_URL: &str = "https://api.allorigins.win/get";
const BCV_HISTORY_URL: &str = "https://bcv-api.rafnixg.dev/rates/history";

/// 30-day official-rate history source
pub struct BcvHistorySource {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct RelayEnvelope {
    /// The relayed response body, itself JSON-encoded
    contents: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BcvPayload {
    #[serde(default)]
    rates: Vec<BcvEntry>,
}

#[derive(Debug, Deserialize)]
struct BcvEntry {
    /// Publication date (the rate takes effect the next day)
    date: NaiveDate,
    dollar: f64,
}

impl BcvHistorySource {
    /// Create a new history source
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

    /// Fetch the history feed for a publication-date window
    pub async fn fetch_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<HistoryEntry>> {
        let target = format!(
            "{}?start_date={}&end_date={}",
            BCV_HISTORY_URL,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );

        let response = self
            .client
            .get(RELAY_BASE_URL)
            .query(&[("url", target.as_str())])
            .send()
            .await
            .map_err(|e| TasaError::SourceError(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(TasaError::SourceError(format!(
                "relay returned error: {}",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| TasaError::SourceError(format!("Failed to read response: {}", e)))?;

        parse_envelope(&text)
    }
}

/// Unwrap the relay envelope and parse the BCV payload inside it
fn parse_envelope(json: &str) -> Result<Vec<HistoryEntry>> {
    let envelope: RelayEnvelope =
        serde_json::from_str(json).map_err(|e| TasaError::ParseError(format!("relay: {}", e)))?;

    let contents = envelope
        .contents
        .ok_or_else(|| TasaError::InvalidData("Relay envelope has no contents".to_string()))?;

    // Second pass: the envelope carries the BCV body as a string
    let payload: BcvPayload = serde_json::from_str(&contents)
        .map_err(|e| TasaError::ParseError(format!("bcv history: {}", e)))?;

    Ok(payload
        .rates
        .into_iter()
        .map(|entry| HistoryEntry::new(entry.date, entry.dollar))
        .collect())
}
