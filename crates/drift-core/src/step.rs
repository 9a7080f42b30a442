//! Single wind-driven displacement step.

/// Meters per degree of latitude/longitude. A flat-earth scalar without
/// longitude compression by latitude; adequate for short regional flights.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Advance a position by one time step under the given wind.
///
/// Direction follows the blowing-toward convention, so the displacement is
/// added along the bearing. With `reverse` set, both components are negated
/// to backtrack the object's origin under the same wind field.
pub fn step_position(
    lat: f64,
    lon: f64,
    speed_ms: f64,
    direction_deg: f64,
    dt_s: f64,
    reverse: bool,
) -> (f64, f64) {
    let dir_rad = direction_deg.to_radians();
    let mut east_ms = speed_ms * dir_rad.sin();
    let mut north_ms = speed_ms * dir_rad.cos();
    if reverse {
        east_ms = -east_ms;
        north_ms = -north_ms;
    }
    let lat = lat + north_ms * dt_s / METERS_PER_DEGREE;
    let lon = lon + east_ms * dt_s / METERS_PER_DEGREE;
    (lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn northward_wind_moves_north_only() {
        let (lat, lon) = step_position(55.0, 24.0, 10.0, 0.0, 15.0, false);
        assert!(lat > 55.0);
        assert!((lon - 24.0).abs() < 1e-12);
    }

    #[test]
    fn eastward_wind_moves_east_only() {
        let (lat, lon) = step_position(55.0, 24.0, 10.0, 90.0, 15.0, false);
        assert!(lon > 24.0);
        // cos(90 deg) is not exactly zero in floating point; the residual
        // latitude drift must stay negligible.
        assert!((lat - 55.0).abs() < 1e-12);
    }

    #[test]
    fn displacement_scales_with_dt() {
        let (lat_short, _) = step_position(55.0, 24.0, 10.0, 0.0, 15.0, false);
        let (lat_long, _) = step_position(55.0, 24.0, 10.0, 0.0, 30.0, false);
        let short = lat_short - 55.0;
        let long = lat_long - 55.0;
        assert!((long - 2.0 * short).abs() < 1e-12);
    }

    #[test]
    fn reverse_then_forward_returns_to_start() {
        let (lat, lon) = step_position(55.0, 24.0, 12.3, 137.0, 15.0, true);
        let (lat, lon) = step_position(lat, lon, 12.3, 137.0, 15.0, false);
        assert!((lat - 55.0).abs() < 1e-10);
        assert!((lon - 24.0).abs() < 1e-10);
    }
}
