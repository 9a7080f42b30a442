//! Core data models for drift prediction.

use serde::{Deserialize, Serialize};

/// Default wind used when every data source fails: 10 m/s blowing from the
/// southeast toward the northwest.
pub const DEFAULT_WIND_SPEED_MS: f64 = 10.0;
pub const DEFAULT_WIND_DIRECTION_DEG: f64 = 315.0;

/// A single recorded position along a simulated drift path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

/// Which fallback tier produced a wind sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindSource {
    /// Open-Meteo hourly forecast, primary field names.
    #[serde(rename = "Open-Meteo")]
    OpenMeteo,
    /// Open-Meteo hourly forecast, alternate field names.
    #[serde(rename = "Open-Meteo(alt)")]
    OpenMeteoAlt,
    /// Fixed default after both remote sources failed.
    #[serde(rename = "Default")]
    Fallback,
}

impl WindSource {
    /// Provenance label reported to callers.
    pub fn label(&self) -> &'static str {
        match self {
            WindSource::OpenMeteo => "Open-Meteo",
            WindSource::OpenMeteoAlt => "Open-Meteo(alt)",
            WindSource::Fallback => "Default",
        }
    }
}

/// Wind at a coordinate. Direction is the compass bearing the wind blows
/// *toward* (meteorological "blowing into"), degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    pub speed_ms: f64,
    pub direction_deg: f64,
    pub source: WindSource,
}

impl WindSample {
    pub fn new(speed_ms: f64, direction_deg: f64, source: WindSource) -> Self {
        Self {
            speed_ms,
            direction_deg,
            source,
        }
    }

    /// The sample substituted when every data source is exhausted.
    pub fn fallback() -> Self {
        Self {
            speed_ms: DEFAULT_WIND_SPEED_MS,
            direction_deg: DEFAULT_WIND_DIRECTION_DEG,
            source: WindSource::Fallback,
        }
    }
}

/// Geographic bounding box for wind-field sampling, degrees.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}
