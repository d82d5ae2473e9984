//! # Arcstep Motion
//!
//! The circular interpolation kernel for a two-axis stepper-driven
//! motion controller. Given a start point, an end point, a signed radius,
//! and a rotation direction, it resolves the arc geometry and emits the
//! per-step pulse decisions that keep the traced staircase path closest
//! to the ideal circle, in the manner of a Bresenham circle rasterizer
//! generalized to per-axis step scales and arbitrary endpoints.
//!
//! ## Architecture
//!
//! - [`geometry`] - arc center and included angle from two points, a
//!   signed radius, and a direction, disambiguating the four possible arcs
//! - [`snapshot`] - scaled-integer snapshot used for cheap quadrant
//!   comparisons in the hot loop
//! - [`quadrant`] - quadrant classification and the per-quadrant axis
//!   sign table
//! - [`session`] - per-command context: geometry, snapshot, step budget,
//!   and the live interpolated position
//! - [`engine`] - the stepping loop: three step hypotheses per iteration,
//!   minimum-error selection, pulse emission
//! - [`pacing`] / [`timing`] / [`diagnostics`] - injected collaborators
//!   for step pacing, elapsed-tick measurement, and end-of-command reports

pub mod command;
pub mod diagnostics;
pub mod engine;
pub mod geometry;
pub mod pacing;
pub mod quadrant;
pub mod session;
pub mod snapshot;
pub mod timing;

pub use command::ArcInterpolator;
pub use diagnostics::{DiagnosticSink, NullDiagnostics, TracingDiagnostics};
pub use engine::{ArcOutcome, NullSink, RecordingSink, StepPulse, StepSink, SteppingEngine};
pub use geometry::{resolve_arc, ArcGeometry};
pub use pacing::{NoPacing, SleepPacer, SpinPacer, StepPacer};
pub use quadrant::{axis_signs, quadrant_index, AxisSigns};
pub use session::ArcSession;
pub use snapshot::{to_compare, CompareSnapshot, COMPARE_SCALE};
pub use timing::{elapsed_ticks, CycleCounter, ManualCounter, WallClockCounter, TICK_MASK};
