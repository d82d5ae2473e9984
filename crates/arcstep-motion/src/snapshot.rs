//! Fixed-point comparison snapshot
//!
//! The stepping loop classifies the live interpolated point into a
//! quadrant every iteration. At tens of kilohertz, repeated
//! floating-point relational comparisons are costlier on small targets
//! than integer ones, so every value entering a comparison is mirrored
//! as a scaled integer: captured once per arc command for the static
//! quantities and refreshed each iteration for the live position. The
//! stepping math itself stays in `f64` for precision.

use crate::geometry::ArcGeometry;
use arcstep_core::TrajectoryState;

/// Scale factor applied before rounding to a comparison integer.
///
/// A fixed power of ten preserving sub-micrometer resolution in
/// millimeter coordinates.
pub const COMPARE_SCALE: f64 = 10_000.0;

/// Convert a real value to its comparison integer
pub fn to_compare(value: f64) -> i64 {
    (value * COMPARE_SCALE).round() as i64
}

/// Scaled-integer mirror of the quantities the hot loop compares
///
/// Invariant: the live entries must be refreshed after every applied
/// step; a stale live position misclassifies the quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareSnapshot {
    /// Arc center X
    pub center_x: i64,
    /// Arc center Y
    pub center_y: i64,
    /// Commanded endpoint X
    pub end_x: i64,
    /// Commanded endpoint Y
    pub end_y: i64,
    /// Arc start X
    pub start_x: i64,
    /// Arc start Y
    pub start_y: i64,
    /// X axis scale
    pub scale_x: i64,
    /// Y axis scale
    pub scale_y: i64,
    /// Live interpolated X, refreshed every iteration
    pub live_x: i64,
    /// Live interpolated Y, refreshed every iteration
    pub live_y: i64,
}

impl CompareSnapshot {
    /// Capture the static quantities of one arc command
    ///
    /// The live position is seeded from the current trajectory position.
    pub fn capture(geometry: &ArcGeometry, state: &TrajectoryState) -> Self {
        let start_x = to_compare(state.current.x);
        let start_y = to_compare(state.current.y);
        Self {
            center_x: to_compare(geometry.center.x),
            center_y: to_compare(geometry.center.y),
            end_x: to_compare(state.target.x),
            end_y: to_compare(state.target.y),
            start_x,
            start_y,
            scale_x: to_compare(state.axis_scale.x),
            scale_y: to_compare(state.axis_scale.y),
            live_x: start_x,
            live_y: start_y,
        }
    }

    /// Refresh the live position entries after a step
    pub fn refresh_live(&mut self, xi: f64, yi: f64) {
        self.live_x = to_compare(xi);
        self.live_y = to_compare(yi);
    }

    /// Is the live point at or right of / at or above the center?
    pub fn live_offset_signs(&self) -> (bool, bool) {
        (
            self.live_x - self.center_x >= 0,
            self.live_y - self.center_y >= 0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcstep_core::{AxisScale, MachinePoint, PlannedTarget};

    fn snapshot() -> CompareSnapshot {
        let geometry = ArcGeometry {
            center: MachinePoint::new(0.0, 0.0),
            included_angle: std::f64::consts::FRAC_PI_2,
            radius: 10.0,
        };
        let state = TrajectoryState::new(
            MachinePoint::new(10.0, 0.0),
            PlannedTarget::new(0.0, 10.0, 10.0),
            AxisScale::uniform(1.0),
        );
        CompareSnapshot::capture(&geometry, &state)
    }

    #[test]
    fn test_to_compare_rounds() {
        assert_eq!(to_compare(1.0), 10_000);
        assert_eq!(to_compare(0.00005), 1);
        assert_eq!(to_compare(-0.00004), 0);
        assert_eq!(to_compare(-2.5), -25_000);
    }

    #[test]
    fn test_capture_seeds_live_from_start() {
        let snap = snapshot();
        assert_eq!(snap.live_x, snap.start_x);
        assert_eq!(snap.live_y, snap.start_y);
        assert_eq!(snap.end_x, 0);
        assert_eq!(snap.end_y, 100_000);
        assert_eq!(snap.scale_x, 10_000);
    }

    #[test]
    fn test_refresh_and_signs() {
        let mut snap = snapshot();
        assert_eq!(snap.live_offset_signs(), (true, true));
        snap.refresh_live(-3.0, -0.0001);
        assert_eq!(snap.live_x, -30_000);
        assert_eq!(snap.live_offset_signs(), (false, false));
        snap.refresh_live(0.0, 5.0);
        // A point exactly on the center counts as the non-negative side.
        assert_eq!(snap.live_offset_signs(), (true, true));
    }
}
