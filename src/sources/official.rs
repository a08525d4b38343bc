//! Official and parallel current-rate source (dolarapi)
//!
//! Two endpoints of the same provider: the BCV official average and the
//! stable-coin parallel reference. Each is a single scalar for "today".

use crate::error::{Result, TasaError};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DOLARAPI_BASE_URL: &str = "https://ve.dolarapi.com/v1/dolares";

/// Current-rate source (no API key required)
pub struct OfficialRateSource {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct DolarPayload {
    /// Averaged rate in bolívars
    promedio: f64,
}

impl OfficialRateSource {
    /// Create a new current-rate source
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

    /// Fetch today's official (BCV) USD rate
    pub async fn fetch_official(&self) -> Result<f64> {
        self.fetch_average("oficial").await
    }

    /// Fetch today's stable-coin (parallel) rate
    pub async fn fetch_secondary(&self) -> Result<f64> {
        self.fetch_average("paralelo").await
    }

    async fn fetch_average(&self, kind: &str) -> Result<f64> {
        let url = format!("{}/{}", DOLARAPI_BASE_URL, kind);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TasaError::SourceError(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(TasaError::SourceError(format!(
                "dolarapi returned error: {}",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| TasaError::SourceError(format!("Failed to read response: {}", e)))?;

        parse_average(&text)
    }
}

/// Extract the averaged rate from a dolarapi payload
fn parse_average(json: &str) -> Result<f64> {
    let payload: DolarPayload =
        serde_json::from_str(json).map_err(|e| TasaError::ParseError(format!("dolarapi: {}", e)))?;

    if payload.promedio <= 0.0 {
        return Err(TasaError::InvalidData(format!(
            "Non-positive rate: {}",
            payload.promedio
        )));
    }
    Ok(payload.promedio)
}
