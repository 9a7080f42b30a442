//! Server configuration from environment.

use drift_core::REFERENCE_MASS_KG;
use drift_wind::ResolverConfig;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub wind_api_url: String,
    pub wind_cache_ttl_s: u64,
    pub wind_timeout_s: u64,
    /// Payload mass for the mass-scaled descent profile. Not exposed to
    /// callers; at the default reference mass the scale factor is 1.0.
    pub payload_mass_kg: f64,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("DRIFT_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            wind_api_url: env::var("DRIFT_WIND_URL")
                .unwrap_or_else(|_| "https://api.open-meteo.com/v1/forecast".to_string()),
            wind_cache_ttl_s: env::var("DRIFT_WIND_CACHE_TTL_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(600),
            wind_timeout_s: env::var("DRIFT_WIND_TIMEOUT_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4),
            payload_mass_kg: env::var("DRIFT_PAYLOAD_MASS_KG")
                .ok()
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|mass| mass.is_finite() && *mass > 0.0)
                .unwrap_or(REFERENCE_MASS_KG),
            static_dir: env::var("DRIFT_STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        }
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            base_url: self.wind_api_url.clone(),
            fetch_timeout: Duration::from_secs(self.wind_timeout_s),
            cache_ttl: Duration::from_secs(self.wind_cache_ttl_s),
        }
    }
}
