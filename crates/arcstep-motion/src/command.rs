//! Arc command handling
//!
//! Composes session preparation and the stepping engine into one
//! callable operation per rotation direction, mirroring the G2/G3 pair
//! of a G-code front end. The front end itself (parsing, dispatch,
//! queuing) lives outside this crate.

use crate::diagnostics::DiagnosticSink;
use crate::engine::{ArcOutcome, StepSink, SteppingEngine};
use crate::pacing::StepPacer;
use crate::session::ArcSession;
use crate::timing::CycleCounter;
use arcstep_core::{Result, RotationDirection, TrajectoryState};

/// Executes whole arc commands against an injected engine
#[derive(Debug)]
pub struct ArcInterpolator<P: StepPacer, C: CycleCounter> {
    engine: SteppingEngine<P, C>,
}

impl<P: StepPacer, C: CycleCounter> ArcInterpolator<P, C> {
    /// Build an interpolator from pacing and timing collaborators
    pub fn new(pacer: P, counter: C) -> Self {
        Self {
            engine: SteppingEngine::new(pacer, counter),
        }
    }

    /// Run a clockwise arc command (G2)
    pub fn clockwise(
        &mut self,
        state: &TrajectoryState,
        sink: &mut dyn StepSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<ArcOutcome> {
        self.run(state, RotationDirection::Clockwise, sink, diagnostics)
    }

    /// Run a counter-clockwise arc command (G3)
    pub fn counter_clockwise(
        &mut self,
        state: &TrajectoryState,
        sink: &mut dyn StepSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<ArcOutcome> {
        self.run(state, RotationDirection::CounterClockwise, sink, diagnostics)
    }

    fn run(
        &mut self,
        state: &TrajectoryState,
        direction: RotationDirection,
        sink: &mut dyn StepSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<ArcOutcome> {
        let mut session = ArcSession::prepare(state, direction)?;
        let outcome = self.engine.run(&mut session, sink, diagnostics);
        tracing::debug!(
            end_x = outcome.end.x,
            end_y = outcome.end.y,
            steps = outcome.steps_emitted,
            %direction,
            "arc command finished"
        );
        Ok(outcome)
    }
}
