//! # Arcstep Core
//!
//! Core types and error taxonomy for the arcstep motion kernel.
//! Provides the trajectory data model shared by the motion crates:
//! machine points, per-axis step scales, rotation directions, and the
//! trajectory state an arc command reads from.

pub mod data;
pub mod error;

pub use data::{AxisScale, MachinePoint, PlannedTarget, RotationDirection, TrajectoryState};
pub use error::{MotionError, Result};
