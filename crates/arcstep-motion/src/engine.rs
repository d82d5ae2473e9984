//! The stepping engine
//!
//! The real-time loop of the kernel. Each iteration classifies the live
//! point's quadrant, looks up the axis travel signs, evaluates the three
//! step hypotheses (X alone, Y alone, both) against the ideal circle
//! equation, applies the one with the smallest deviation, and emits the
//! pulse. The loop blocks its caller until the step budget is exhausted;
//! that budget is the only termination condition.

use crate::diagnostics::DiagnosticSink;
use crate::pacing::StepPacer;
use crate::quadrant::{axis_signs, quadrant_index};
use crate::session::ArcSession;
use crate::timing::{elapsed_ticks, CycleCounter};
use arcstep_core::MachinePoint;
use serde::{Deserialize, Serialize};

/// One pulse decision: step sign per axis, 0 when the axis stays put
///
/// At least one component is non-zero. The physical pulse+direction
/// signals are the receiving [`StepSink`]'s concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPulse {
    /// X axis step sign: -1, 0, or +1
    pub dx: i8,
    /// Y axis step sign: -1, 0, or +1
    pub dy: i8,
}

impl StepPulse {
    /// Did this pulse step both axes?
    pub fn is_diagonal(&self) -> bool {
        self.dx != 0 && self.dy != 0
    }
}

/// Receiver of step pulses; the actuator boundary of the kernel
pub trait StepSink {
    /// Accept one pulse decision
    fn pulse(&mut self, pulse: StepPulse);
}

/// Collects pulses in memory, for tests and offline path generation
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Every pulse emitted, in order
    pub pulses: Vec<StepPulse>,
}

impl StepSink for RecordingSink {
    fn pulse(&mut self, pulse: StepPulse) {
        self.pulses.push(pulse);
    }
}

/// Discards pulses
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StepSink for NullSink {
    fn pulse(&mut self, _pulse: StepPulse) {}
}

/// Result of one completed arc command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcOutcome {
    /// Final interpolated position when the budget ran out
    pub end: MachinePoint,
    /// Number of pulses emitted (diagonal pulses count once)
    pub steps_emitted: u32,
    /// Number of single-axis increments applied (diagonal pulses count twice)
    pub axis_increments: u32,
    /// Elapsed ticks measured across the loop
    pub elapsed_ticks: u32,
}

/// The stepping loop with its injected pacing and timing collaborators
///
/// Single-threaded and non-preemptive: `run` blocks until the session's
/// budget reaches zero.
#[derive(Debug)]
pub struct SteppingEngine<P: StepPacer, C: CycleCounter> {
    pacer: P,
    counter: C,
}

impl<P: StepPacer, C: CycleCounter> SteppingEngine<P, C> {
    /// Create an engine from its collaborators
    pub fn new(pacer: P, counter: C) -> Self {
        Self { pacer, counter }
    }

    /// Drive one arc session to budget exhaustion
    ///
    /// Every chosen step goes to `sink`; the elapsed-tick total goes to
    /// `diagnostics` once, after the loop exits.
    pub fn run(
        &mut self,
        session: &mut ArcSession,
        sink: &mut dyn StepSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> ArcOutcome {
        let center = session.geometry().center;
        let radius_sq = session.geometry().radius * session.geometry().radius;
        let scale = session.axis_scale();
        let direction = session.direction();
        let mut steps_emitted = 0u32;
        let mut axis_increments = 0u32;

        self.counter.start();
        while session.budget() > 0 {
            let (xo, yo) = session.snapshot().live_offset_signs();
            let signs = axis_signs(direction, quadrant_index(xo, yo));
            let step_x = scale.x.copysign(f64::from(signs.x));
            let step_y = scale.y.copysign(f64::from(signs.y));

            // Deviation of each hypothesis from (x-cx)^2 + (y-cy)^2 = r^2,
            // in center-relative coordinates.
            let off_x = session.xi() - center.x;
            let off_y = session.yi() - center.y;
            let fx = (off_x + step_x) * (off_x + step_x);
            let fy = (off_y + step_y) * (off_y + step_y);
            let err_x = (fx + off_y * off_y - radius_sq).abs();
            let err_y = (off_x * off_x + fy - radius_sq).abs();
            let err_xy = (fx + fy - radius_sq).abs();

            // Fixed priority on ties: X alone, Y alone, diagonal.
            let pulse = if err_x < err_y {
                if err_x < err_xy {
                    session.advance(step_x, 0.0, 1);
                    StepPulse { dx: signs.x, dy: 0 }
                } else {
                    session.advance(step_x, step_y, 2);
                    StepPulse {
                        dx: signs.x,
                        dy: signs.y,
                    }
                }
            } else if err_y < err_xy {
                session.advance(0.0, step_y, 1);
                StepPulse { dx: 0, dy: signs.y }
            } else {
                session.advance(step_x, step_y, 2);
                StepPulse {
                    dx: signs.x,
                    dy: signs.y,
                }
            };

            axis_increments += if pulse.is_diagonal() { 2 } else { 1 };
            steps_emitted += 1;
            sink.pulse(pulse);
            self.pacer.pause();
        }

        let elapsed = elapsed_ticks(self.counter.now());
        diagnostics.report_elapsed(elapsed);
        ArcOutcome {
            end: MachinePoint::new(session.xi(), session.yi()),
            steps_emitted,
            axis_increments,
            elapsed_ticks: elapsed,
        }
    }
}
