//! Per-command arc session
//!
//! One `ArcSession` owns everything a single arc command needs: the
//! resolved geometry, the comparison snapshot, the step budget, and the
//! live interpolated position. It is created by `prepare`, consumed by
//! the stepping engine, and dropped when the command completes, so no
//! state leaks across commands.

use crate::geometry::{resolve_arc, ArcGeometry};
use crate::snapshot::CompareSnapshot;
use arcstep_core::{AxisScale, Result, RotationDirection, TrajectoryState};
use std::f64::consts::FRAC_2_PI;

/// Context for one arc command, from preparation to budget exhaustion
#[derive(Debug, Clone)]
pub struct ArcSession {
    geometry: ArcGeometry,
    snapshot: CompareSnapshot,
    direction: RotationDirection,
    axis_scale: AxisScale,
    budget: u32,
    xi: f64,
    yi: f64,
}

impl ArcSession {
    /// Validate the command and build the session
    ///
    /// Resolves the arc geometry, captures the comparison snapshot,
    /// seeds the interpolated position from the current trajectory
    /// position, and derives the step budget from the arc length.
    pub fn prepare(state: &TrajectoryState, direction: RotationDirection) -> Result<ArcSession> {
        state.axis_scale.validate()?;
        let geometry = resolve_arc(
            state.current,
            state.target.point(),
            state.target.radius,
            direction,
        )?;
        let snapshot = CompareSnapshot::capture(&geometry, state);
        let budget = derived_budget(&geometry, state.axis_scale);
        tracing::debug!(
            center_x = geometry.center.x,
            center_y = geometry.center.y,
            included_angle = geometry.included_angle,
            budget,
            %direction,
            "arc session prepared"
        );
        Ok(Self {
            geometry,
            snapshot,
            direction,
            axis_scale: state.axis_scale,
            budget,
            xi: state.current.x,
            yi: state.current.y,
        })
    }

    /// Override the derived step budget
    ///
    /// For callers that must reproduce a fixed-budget controller or cut
    /// an arc short deliberately.
    pub fn with_budget(mut self, steps: u32) -> Self {
        self.budget = steps;
        self
    }

    /// Resolved geometry of this command
    pub fn geometry(&self) -> &ArcGeometry {
        &self.geometry
    }

    /// Comparison snapshot, live entries included
    pub fn snapshot(&self) -> &CompareSnapshot {
        &self.snapshot
    }

    /// Commanded rotation direction
    pub fn direction(&self) -> RotationDirection {
        self.direction
    }

    /// Machine axis scale this session was prepared with
    pub fn axis_scale(&self) -> AxisScale {
        self.axis_scale
    }

    /// Remaining step budget; the loop's only termination condition
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Live interpolated X; where the carriage is assumed to be
    pub fn xi(&self) -> f64 {
        self.xi
    }

    /// Live interpolated Y
    pub fn yi(&self) -> f64 {
        self.yi
    }

    /// Apply a chosen step to the interpolated position
    ///
    /// `cost` is 1 for a single-axis step and 2 for a diagonal one. The
    /// saturating decrement lets the 2-step cost terminate at exactly 0.
    pub(crate) fn advance(&mut self, dx: f64, dy: f64, cost: u32) {
        self.xi += dx;
        self.yi += dy;
        self.budget = self.budget.saturating_sub(cost);
        self.snapshot.refresh_live(self.xi, self.yi);
    }
}

/// Step budget derived from the resolved arc length
///
/// Counts the expected single-axis increments along the staircase: the
/// mean of `|sin|` (and `|cos|`) over a full revolution is `2/pi`, so an
/// arc of length `L` crosses about `L * (2/pi) / scale` step boundaries
/// per axis. Exact for quadrant-aligned arcs.
pub fn derived_budget(geometry: &ArcGeometry, scale: AxisScale) -> u32 {
    let per_length = FRAC_2_PI * (1.0 / scale.x + 1.0 / scale.y);
    let budget = (geometry.arc_length() * per_length).round();
    (budget.max(1.0)) as u32
}
