//! Ordered wind data sources and their uniform failure signal.

use drift_core::WindSource;
use serde::Deserialize;

/// One attempt against the forecast provider. Both schemes query the same
/// provider; they differ only in the hourly field names they request and
/// read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceScheme {
    /// `windspeed_100m` / `winddirection_100m`
    Primary,
    /// `wind_speed_100m` / `wind_direction_100m`
    Alternate,
}

impl SourceScheme {
    /// Fallback order: primary first, alternate on any failure.
    pub const CHAIN: [SourceScheme; 2] = [SourceScheme::Primary, SourceScheme::Alternate];

    /// Value of the `hourly` query parameter for this scheme.
    pub fn hourly_fields(self) -> &'static str {
        match self {
            SourceScheme::Primary => "windspeed_100m,winddirection_100m",
            SourceScheme::Alternate => "wind_speed_100m,wind_direction_100m",
        }
    }

    /// Provenance tag recorded on samples this scheme produces.
    pub fn source(self) -> WindSource {
        match self {
            SourceScheme::Primary => WindSource::OpenMeteo,
            SourceScheme::Alternate => WindSource::OpenMeteoAlt,
        }
    }
}

/// Uniform failure signal for a single source attempt. Network errors,
/// timeouts, bad statuses, and malformed or incomplete bodies all just move
/// the chain along to the next source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("response missing hourly {0} data")]
    MissingField(&'static str),
}

/// Hourly forecast payload. Every field is optional so a response from
/// either scheme deserializes; the reader picks the fields its scheme
/// requested.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    hourly: Option<HourlySeries>,
}

#[derive(Debug, Deserialize)]
struct HourlySeries {
    #[serde(default)]
    windspeed_100m: Option<Vec<f64>>,
    #[serde(default)]
    winddirection_100m: Option<Vec<f64>>,
    #[serde(default)]
    wind_speed_100m: Option<Vec<f64>>,
    #[serde(default)]
    wind_direction_100m: Option<Vec<f64>>,
}

impl ForecastResponse {
    /// Extract the most recent (speed, direction) pair for the scheme, or
    /// fail uniformly if anything is missing.
    pub fn latest_wind(&self, scheme: SourceScheme) -> Result<(f64, f64), FetchError> {
        let hourly = self
            .hourly
            .as_ref()
            .ok_or(FetchError::MissingField("series"))?;
        let (speeds, directions) = match scheme {
            SourceScheme::Primary => (&hourly.windspeed_100m, &hourly.winddirection_100m),
            SourceScheme::Alternate => (&hourly.wind_speed_100m, &hourly.wind_direction_100m),
        };
        let speed = speeds
            .as_ref()
            .and_then(|series| series.last().copied())
            .ok_or(FetchError::MissingField("speed"))?;
        let direction = directions
            .as_ref()
            .and_then(|series| series.last().copied())
            .ok_or(FetchError::MissingField("direction"))?;
        Ok((speed, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ForecastResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn chain_tries_primary_before_alternate() {
        assert_eq!(
            SourceScheme::CHAIN,
            [SourceScheme::Primary, SourceScheme::Alternate]
        );
    }

    #[test]
    fn primary_scheme_reads_its_own_fields() {
        let response = parse(
            r#"{"hourly": {"windspeed_100m": [3.0, 4.5], "winddirection_100m": [100.0, 220.0]}}"#,
        );
        let (speed, direction) = response.latest_wind(SourceScheme::Primary).unwrap();
        assert_eq!(speed, 4.5);
        assert_eq!(direction, 220.0);
    }

    #[test]
    fn alternate_scheme_reads_underscored_fields() {
        let response = parse(
            r#"{"hourly": {"wind_speed_100m": [7.0], "wind_direction_100m": [315.0]}}"#,
        );
        let (speed, direction) = response.latest_wind(SourceScheme::Alternate).unwrap();
        assert_eq!(speed, 7.0);
        assert_eq!(direction, 315.0);
    }

    #[test]
    fn missing_fields_fail_uniformly() {
        let response = parse(r#"{"hourly": {"windspeed_100m": [3.0]}}"#);
        assert!(matches!(
            response.latest_wind(SourceScheme::Primary),
            Err(FetchError::MissingField("direction"))
        ));
        assert!(matches!(
            response.latest_wind(SourceScheme::Alternate),
            Err(FetchError::MissingField("speed"))
        ));
        let empty = parse(r#"{}"#);
        assert!(matches!(
            empty.latest_wind(SourceScheme::Primary),
            Err(FetchError::MissingField("series"))
        ));
    }

    #[test]
    fn empty_series_counts_as_missing() {
        let response =
            parse(r#"{"hourly": {"windspeed_100m": [], "winddirection_100m": []}}"#);
        assert!(response.latest_wind(SourceScheme::Primary).is_err());
    }
}
