//! Remote rate source integrations
//!
//! Three independent, unauthenticated HTTP collaborators plus the parallel
//! (stable-coin) reference:
//! - dolarapi: today's official and parallel rates
//! - exchangerate-api: the USD cross-rate table (EUR ratio)
//! - BCV mirror via the allorigins relay: the 30-day rate history
//!
//! Every fetch fails independently and silently: a failure is logged and
//! collapses into that slot's fallback, never into an error for the caller.

#[cfg(feature = "async")]
pub mod bcv;
#[cfg(feature = "async")]
pub mod cross;
#[cfg(feature = "async")]
pub mod official;

#[cfg(feature = "async")]
pub use bcv::BcvHistorySource;
#[cfg(feature = "async")]
pub use cross::CrossRateSource;
#[cfg(feature = "async")]
pub use official::OfficialRateSource;

#[cfg(feature = "async")]
use crate::constants::HISTORY_WINDOW_DAYS;
#[cfg(feature = "async")]
use crate::error::Result;
#[cfg(feature = "async")]
use crate::history::{reconcile, RateSeries};
#[cfg(feature = "async")]
use crate::types::SourceReadings;
#[cfg(feature = "async")]
use chrono::{Duration, Local, NaiveDate};

/// Aggregate over the remote sources, producing one [`SourceReadings`]
/// per load cycle
#[cfg(feature = "async")]
pub struct RateSources {
    official: OfficialRateSource,
    cross: CrossRateSource,
    bcv: BcvHistorySource,
}

#[cfg(feature = "async")]
impl RateSources {
    /// Create the three sources over one shared HTTP client
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("tasacalc/0.1")
            .build()
            .map_err(|e| {
                crate::error::TasaError::SourceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            official: OfficialRateSource::with_client(client.clone()),
            cross: CrossRateSource::with_client(client.clone()),
            bcv: BcvHistorySource::with_client(client),
        })
    }

    /// Fetch all sources concurrently with isolated failures
    ///
    /// Each slot in the result is independently `None`/empty when its fetch
    /// failed; failures are logged, never propagated.
    pub async fn fetch_all(&self, today: NaiveDate) -> SourceReadings {
        let window_start = today - Duration::days(HISTORY_WINDOW_DAYS);

        let (official, secondary, cross_ratio, history) = tokio::join!(
            self.official.fetch_official(),
            self.official.fetch_secondary(),
            self.cross.fetch_ratio(),
            self.bcv.fetch_history(window_start, today),
        );

        let official = match official {
            Ok(rate) => Some(rate),
            Err(e) => {
                log::warn!("Failed to fetch official rate: {}", e);
                None
            }
        };
        let secondary = match secondary {
            Ok(rate) => Some(rate),
            Err(e) => {
                log::warn!("Failed to fetch secondary rate: {}", e);
                None
            }
        };
        let cross_ratio = match cross_ratio {
            Ok(ratio) => Some(ratio),
            Err(e) => {
                log::warn!("Failed to fetch cross ratio: {}", e);
                None
            }
        };
        let history = match history {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Failed to fetch rate history: {}", e);
                Vec::new()
            }
        };

        SourceReadings {
            official,
            secondary,
            cross_ratio,
            history,
        }
    }

    /// One full load cycle: fetch everything and reconcile into a series
    ///
    /// "Today" is the host's local calendar date.
    pub async fn load(&self) -> RateSeries {
        let today = Local::now().date_naive();
        let readings = self.fetch_all(today).await;
        reconcile(readings, today)
    }
}
