//! Uniform sample lattice over a bounding box for wind-field overlays.

use crate::models::BoundingBox;

/// Equal intervals per axis; the lattice has (GRID_DIVISIONS + 1)^2 points.
pub const GRID_DIVISIONS: usize = 6;

/// Sample coordinates over the box, row-major from the south-west corner.
///
/// No range validation is performed; the box is assumed well-formed by the
/// caller.
pub fn grid_coordinates(bbox: &BoundingBox) -> Vec<(f64, f64)> {
    let lat_step = (bbox.north - bbox.south) / GRID_DIVISIONS as f64;
    let lon_step = (bbox.east - bbox.west) / GRID_DIVISIONS as f64;
    let side = GRID_DIVISIONS + 1;
    let mut points = Vec::with_capacity(side * side);
    for iy in 0..side {
        let lat = bbox.south + iy as f64 * lat_step;
        for ix in 0..side {
            let lon = bbox.west + ix as f64 * lon_step;
            points.push((lat, lon));
        }
    }
    points
}
