pub mod grid;
pub mod integrator;
pub mod models;
pub mod step;

pub use grid::{grid_coordinates, GRID_DIVISIONS};
pub use integrator::{
    simulate_drift, DriftProfile, LaunchState, DEFAULT_DESCENT_MPS, FIXED_STEP_COUNT,
    MASS_DESCENT_COEFF, REFERENCE_MASS_KG, STEP_SECONDS,
};
pub use models::{
    BoundingBox, TrajectoryPoint, WindSample, WindSource, DEFAULT_WIND_DIRECTION_DEG,
    DEFAULT_WIND_SPEED_MS,
};
pub use step::{step_position, METERS_PER_DEGREE};
