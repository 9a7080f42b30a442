//! Trajectory integration: repeated stepping until a termination condition.

use crate::models::{TrajectoryPoint, WindSample};
use crate::step::step_position;

/// Simulation time step in seconds.
pub const STEP_SECONDS: f64 = 15.0;
/// Number of steps for the fixed-count (level flight) profile.
pub const FIXED_STEP_COUNT: usize = 50;
/// Vertical speed substituted when the caller supplies none (<= 0).
pub const DEFAULT_DESCENT_MPS: f64 = 2.5;
/// Mass at which the mass-scaled profile matches plain altitude depletion.
pub const REFERENCE_MASS_KG: f64 = 55.0;
/// Per-kilogram adjustment to the descent rate around the reference mass.
pub const MASS_DESCENT_COEFF: f64 = 0.0001;

/// Termination and vertical-motion policy for a drift run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriftProfile {
    /// Exactly [`FIXED_STEP_COUNT`] steps, altitude carried unchanged.
    FixedCount,
    /// Descend until the ground; altitude clamped to zero on the last point.
    AltitudeDepletion,
    /// Altitude depletion with the per-step loss scaled by payload mass.
    MassScaledDepletion { mass_kg: f64 },
}

/// Caller-supplied initial conditions.
#[derive(Debug, Clone, Copy)]
pub struct LaunchState {
    pub lat: f64,
    pub lon: f64,
    pub altitude_m: f64,
    /// Vertical speed in m/s; values <= 0 fall back to [`DEFAULT_DESCENT_MPS`].
    pub descent_mps: f64,
}

/// Integrate a drift path under a single wind sample.
///
/// Wind is treated as static over the flight: the one sample drives every
/// step. Points are appended in simulation-time order. With `reverse` set,
/// displacement is negated to trace a plausible origin instead of a
/// destination.
pub fn simulate_drift(
    start: LaunchState,
    wind: &WindSample,
    profile: DriftProfile,
    reverse: bool,
) -> Vec<TrajectoryPoint> {
    match profile {
        DriftProfile::FixedCount => level_flight(start, wind, reverse),
        DriftProfile::AltitudeDepletion => descend(start, wind, reverse, 1.0),
        DriftProfile::MassScaledDepletion { mass_kg } => {
            let scale = 1.0 + MASS_DESCENT_COEFF * (mass_kg - REFERENCE_MASS_KG);
            descend(start, wind, reverse, scale)
        }
    }
}

fn level_flight(start: LaunchState, wind: &WindSample, reverse: bool) -> Vec<TrajectoryPoint> {
    let mut lat = start.lat;
    let mut lon = start.lon;
    let mut points = Vec::with_capacity(FIXED_STEP_COUNT);
    for _ in 0..FIXED_STEP_COUNT {
        (lat, lon) = step_position(
            lat,
            lon,
            wind.speed_ms,
            wind.direction_deg,
            STEP_SECONDS,
            reverse,
        );
        points.push(TrajectoryPoint {
            lat,
            lon,
            alt: start.altitude_m,
        });
    }
    points
}

fn descend(
    start: LaunchState,
    wind: &WindSample,
    reverse: bool,
    mass_scale: f64,
) -> Vec<TrajectoryPoint> {
    // The > 0 check plus fixed fallback is what guarantees termination; a
    // zero or negative vertical speed would never deplete altitude.
    let v_vert = if start.descent_mps > 0.0 {
        start.descent_mps
    } else {
        DEFAULT_DESCENT_MPS
    };
    let mut lat = start.lat;
    let mut lon = start.lon;
    let mut alt = start.altitude_m;
    let mut points = Vec::new();
    while alt > 0.0 {
        (lat, lon) = step_position(
            lat,
            lon,
            wind.speed_ms,
            wind.direction_deg,
            STEP_SECONDS,
            reverse,
        );
        alt -= v_vert * STEP_SECONDS * mass_scale;
        points.push(TrajectoryPoint {
            lat,
            lon,
            alt: alt.max(0.0),
        });
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WindSample;

    fn launch(altitude_m: f64, descent_mps: f64) -> LaunchState {
        LaunchState {
            lat: 55.0,
            lon: 24.0,
            altitude_m,
            descent_mps,
        }
    }

    #[test]
    fn fixed_count_always_fifty_points_at_input_altitude() {
        let wind = WindSample::fallback();
        let path = simulate_drift(launch(3000.0, 0.0), &wind, DriftProfile::FixedCount, false);
        assert_eq!(path.len(), FIXED_STEP_COUNT);
        assert!(path.iter().all(|p| p.alt == 3000.0));
    }

    #[test]
    fn depletion_descends_to_exactly_zero() {
        let wind = WindSample::fallback();
        let path = simulate_drift(
            launch(3000.0, 0.0),
            &wind,
            DriftProfile::AltitudeDepletion,
            false,
        );
        // 3000 m at the default 2.5 m/s over 15 s steps is 80 steps.
        assert_eq!(path.len(), 80);
        assert_eq!(path.last().unwrap().alt, 0.0);
        for pair in path.windows(2) {
            if pair[1].alt > 0.0 {
                assert!(pair[1].alt < pair[0].alt);
            }
        }
    }

    #[test]
    fn supplied_descent_speed_overrides_default() {
        let wind = WindSample::fallback();
        let path = simulate_drift(
            launch(3000.0, 5.0),
            &wind,
            DriftProfile::AltitudeDepletion,
            false,
        );
        assert_eq!(path.len(), 40);
        assert_eq!(path.last().unwrap().alt, 0.0);
    }

    #[test]
    fn zero_altitude_yields_empty_trajectory() {
        let wind = WindSample::fallback();
        let path = simulate_drift(
            launch(0.0, 0.0),
            &wind,
            DriftProfile::AltitudeDepletion,
            false,
        );
        assert!(path.is_empty());
    }

    #[test]
    fn mass_scaled_matches_depletion_at_reference_mass() {
        let wind = WindSample::fallback();
        let plain = simulate_drift(
            launch(3000.0, 0.0),
            &wind,
            DriftProfile::AltitudeDepletion,
            false,
        );
        let scaled = simulate_drift(
            launch(3000.0, 0.0),
            &wind,
            DriftProfile::MassScaledDepletion {
                mass_kg: REFERENCE_MASS_KG,
            },
            false,
        );
        assert_eq!(plain, scaled);
    }

    #[test]
    fn heavier_payload_descends_faster() {
        let wind = WindSample::fallback();
        let heavy = simulate_drift(
            launch(3000.0, 0.0),
            &wind,
            DriftProfile::MassScaledDepletion { mass_kg: 1055.0 },
            false,
        );
        let reference = simulate_drift(
            launch(3000.0, 0.0),
            &wind,
            DriftProfile::AltitudeDepletion,
            false,
        );
        assert!(heavy.len() < reference.len());
    }

    #[test]
    fn reverse_run_mirrors_forward_displacement() {
        let wind = WindSample::new(8.0, 220.0, crate::models::WindSource::Fallback);
        let forward = simulate_drift(launch(500.0, 0.0), &wind, DriftProfile::FixedCount, false);
        let backward = simulate_drift(launch(500.0, 0.0), &wind, DriftProfile::FixedCount, true);
        let fwd = forward.last().unwrap();
        let bwd = backward.last().unwrap();
        assert!(((fwd.lat - 55.0) + (bwd.lat - 55.0)).abs() < 1e-10);
        assert!(((fwd.lon - 24.0) + (bwd.lon - 24.0)).abs() < 1e-10);
    }
}
