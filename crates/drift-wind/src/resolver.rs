//! Total-failure-proof wind resolution: cache, source chain, fixed default.

use crate::cache::{CellKey, WindCache};
use crate::sources::{FetchError, ForecastResponse, SourceScheme};
use drift_core::WindSample;
use reqwest::Client;
use std::time::Duration;

/// Resolver tuning; defaults match the production provider.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Forecast endpoint queried by every scheme in the chain.
    pub base_url: String,
    /// Bound on each individual source attempt.
    pub fetch_timeout: Duration,
    /// Freshness window for cached samples.
    pub cache_ttl: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            fetch_timeout: Duration::from_secs(4),
            cache_ttl: Duration::from_secs(600),
        }
    }
}

/// Resolves current wind for a coordinate. Never fails outward: remote
/// errors degrade through the source chain and finally to a fixed default
/// sample, so every call produces a usable [`WindSample`].
#[derive(Debug)]
pub struct WindResolver {
    client: Client,
    base_url: String,
    cache: WindCache,
}

impl WindResolver {
    pub fn new(config: ResolverConfig) -> Self {
        let client = Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: config.base_url,
            cache: WindCache::new(config.cache_ttl),
        }
    }

    /// Resolve wind for a coordinate.
    ///
    /// A cache entry younger than the TTL short-circuits all network
    /// access. On a miss each source gets exactly one attempt before the
    /// chain falls through; whatever sample results (remote or default) is
    /// cached and returned.
    pub async fn resolve(&self, lat: f64, lon: f64) -> WindSample {
        let key = CellKey::new(lat, lon);
        if let Some(sample) = self.cache.get_fresh(key) {
            return sample;
        }

        for scheme in SourceScheme::CHAIN {
            match self.fetch(scheme, lat, lon).await {
                Ok(sample) => {
                    self.cache.insert(key, sample);
                    return sample;
                }
                Err(err) => {
                    tracing::debug!(
                        "wind source {:?} failed for ({:.2}, {:.2}): {}",
                        scheme,
                        lat,
                        lon,
                        err
                    );
                }
            }
        }

        tracing::warn!(
            "all wind sources exhausted for ({:.2}, {:.2}); using default sample",
            lat,
            lon
        );
        let sample = WindSample::fallback();
        self.cache.insert(key, sample);
        sample
    }

    async fn fetch(
        &self,
        scheme: SourceScheme,
        lat: f64,
        lon: f64,
    ) -> Result<WindSample, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("hourly", scheme.hourly_fields().to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let payload: ForecastResponse = response.json().await?;
        let (speed_ms, direction_deg) = payload.latest_wind(scheme)?;
        Ok(WindSample::new(speed_ms, direction_deg, scheme.source()))
    }

    /// Number of cached cells, for diagnostics.
    pub fn cached_cells(&self) -> usize {
        self.cache.len()
    }
}

impl Default for WindResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
