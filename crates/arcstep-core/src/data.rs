//! Data models for trajectory state and arc commands
//!
//! This module provides:
//! - 2-axis machine points and distance helpers
//! - Per-axis step scale (distance covered by one motor step)
//! - Rotation direction for arc commands
//! - The trajectory state an arc command reads from
//!
//! The trajectory state is owned by the surrounding motion subsystem and
//! is read-only to the interpolation kernel.

use crate::error::{MotionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in machine coordinates (two driven axes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachinePoint {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
}

impl MachinePoint {
    /// Create a new machine point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &MachinePoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for MachinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// Distance covered by a single motor step, per axis
///
/// Fixed for the machine (screw pitch divided by steps per revolution,
/// including microstepping).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    /// X-axis distance per step
    pub x: f64,
    /// Y-axis distance per step
    pub y: f64,
}

impl AxisScale {
    /// Create a per-axis scale
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a scale with the same step distance on both axes
    pub fn uniform(step: f64) -> Self {
        Self { x: step, y: step }
    }

    /// Check that both scales are positive and finite
    pub fn validate(&self) -> Result<()> {
        if !(self.x.is_finite() && self.x > 0.0) {
            return Err(MotionError::InvalidAxisScale {
                axis: 'x',
                value: self.x,
            });
        }
        if !(self.y.is_finite() && self.y > 0.0) {
            return Err(MotionError::InvalidAxisScale {
                axis: 'y',
                value: self.y,
            });
        }
        Ok(())
    }
}

/// Rotation direction of an arc command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationDirection {
    /// Clockwise arc (G2-style command)
    Clockwise,
    /// Counter-clockwise arc (G3-style command)
    CounterClockwise,
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clockwise => write!(f, "clockwise"),
            Self::CounterClockwise => write!(f, "counter-clockwise"),
        }
    }
}

/// Commanded endpoint of the next move, with the signed arc radius
///
/// The sign of the radius selects between the minor and major arc for a
/// given chord and rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannedTarget {
    /// Target X position
    pub x: f64,
    /// Target Y position
    pub y: f64,
    /// Signed arc radius
    pub radius: f64,
}

impl PlannedTarget {
    /// Create a planned target
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// The target as a machine point, without the radius
    pub fn point(&self) -> MachinePoint {
        MachinePoint::new(self.x, self.y)
    }
}

/// Trajectory state consumed by one arc command
///
/// Owned by the motion subsystem and persisting across commands; the
/// interpolation kernel reads it and never writes it back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryState {
    /// Position the carriage currently occupies
    pub current: MachinePoint,
    /// Commanded endpoint plus signed radius
    pub target: PlannedTarget,
    /// Machine step scale per axis
    pub axis_scale: AxisScale,
}

impl TrajectoryState {
    /// Create a trajectory state
    pub fn new(current: MachinePoint, target: PlannedTarget, axis_scale: AxisScale) -> Self {
        Self {
            current,
            target,
            axis_scale,
        }
    }
}
