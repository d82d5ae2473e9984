//! End-to-end interpolation scenarios: whole arcs driven through the
//! public command surface, with the traced staircase checked against
//! the ideal circle at every pulse.

use arcstep_core::{AxisScale, MachinePoint, MotionError, PlannedTarget, TrajectoryState};
use arcstep_motion::{
    ArcInterpolator, NoPacing, NullDiagnostics, RecordingSink, StepPulse,
    DiagnosticSink, ManualCounter,
};

fn interpolator() -> ArcInterpolator<NoPacing, ManualCounter> {
    ArcInterpolator::new(NoPacing, ManualCounter::default())
}

/// Replay recorded pulses from the start point, asserting the path never
/// strays more than one axis-scale unit from the ideal circle.
fn replay_and_check_deviation(
    start: MachinePoint,
    center: MachinePoint,
    radius: f64,
    scale: AxisScale,
    pulses: &[StepPulse],
) -> MachinePoint {
    let max_scale = scale.x.max(scale.y);
    let mut x = start.x;
    let mut y = start.y;
    for (index, pulse) in pulses.iter().enumerate() {
        x += scale.x * f64::from(pulse.dx);
        y += scale.y * f64::from(pulse.dy);
        let deviation = (MachinePoint::new(x, y).distance_to(&center) - radius.abs()).abs();
        assert!(
            deviation <= max_scale + 1e-9,
            "pulse {index} drifted {deviation} from the circle at ({x}, {y})"
        );
    }
    MachinePoint::new(x, y)
}

#[test]
fn counter_clockwise_quarter_arc_reaches_endpoint() {
    // (10, 0) -> (0, 10) about (0, 0): a monotonic staircase hugging
    // the circle, landing exactly on the endpoint at unit scale.
    let state = TrajectoryState::new(
        MachinePoint::new(10.0, 0.0),
        PlannedTarget::new(0.0, 10.0, 10.0),
        AxisScale::uniform(1.0),
    );
    let mut sink = RecordingSink::default();
    let outcome = interpolator()
        .counter_clockwise(&state, &mut sink, &mut NullDiagnostics)
        .unwrap();

    assert_eq!(outcome.axis_increments, 20);
    let traced = replay_and_check_deviation(
        state.current,
        MachinePoint::new(0.0, 0.0),
        10.0,
        state.axis_scale,
        &sink.pulses,
    );
    assert!((traced.x - 0.0).abs() < 1e-6);
    assert!((traced.y - 10.0).abs() < 1e-6);
    assert!((outcome.end.x - traced.x).abs() < 1e-9);
    assert!((outcome.end.y - traced.y).abs() < 1e-9);
}

#[test]
fn clockwise_quarter_arc_mirrors_about_other_center() {
    // The same endpoints commanded clockwise resolve the center at
    // (10, 10) and trace the complementary staircase.
    let state = TrajectoryState::new(
        MachinePoint::new(10.0, 0.0),
        PlannedTarget::new(0.0, 10.0, 10.0),
        AxisScale::uniform(1.0),
    );
    let mut sink = RecordingSink::default();
    let outcome = interpolator()
        .clockwise(&state, &mut sink, &mut NullDiagnostics)
        .unwrap();

    assert_eq!(outcome.axis_increments, 20);
    let traced = replay_and_check_deviation(
        state.current,
        MachinePoint::new(10.0, 10.0),
        10.0,
        state.axis_scale,
        &sink.pulses,
    );
    assert!((traced.x - 0.0).abs() < 1e-6);
    assert!((traced.y - 10.0).abs() < 1e-6);
    // First move heads left along the bottom of that circle.
    assert_eq!(sink.pulses[0], StepPulse { dx: -1, dy: 0 });
}

#[test]
fn staircase_is_monotonic_toward_endpoint() {
    let state = TrajectoryState::new(
        MachinePoint::new(10.0, 0.0),
        PlannedTarget::new(0.0, 10.0, 10.0),
        AxisScale::uniform(1.0),
    );
    let mut sink = RecordingSink::default();
    interpolator()
        .counter_clockwise(&state, &mut sink, &mut NullDiagnostics)
        .unwrap();
    for pulse in &sink.pulses {
        // A quarter arc toward (0, 10) never steps +X or -Y.
        assert!(pulse.dx <= 0, "unexpected +X step");
        assert!(pulse.dy >= 0, "unexpected -Y step");
    }
}

#[test]
fn finer_axis_scale_stays_proportionally_tighter() {
    let state = TrajectoryState::new(
        MachinePoint::new(10.0, 0.0),
        PlannedTarget::new(0.0, 10.0, 10.0),
        AxisScale::uniform(0.25),
    );
    let mut sink = RecordingSink::default();
    let outcome = interpolator()
        .counter_clockwise(&state, &mut sink, &mut NullDiagnostics)
        .unwrap();
    assert_eq!(outcome.axis_increments, 80);
    let traced = replay_and_check_deviation(
        state.current,
        MachinePoint::new(0.0, 0.0),
        10.0,
        state.axis_scale,
        &sink.pulses,
    );
    assert!((traced.x - 0.0).abs() < 0.25 + 1e-9);
    assert!((traced.y - 10.0).abs() < 0.25 + 1e-9);
}

#[test]
fn degenerate_chord_is_rejected_before_stepping() {
    let state = TrajectoryState::new(
        MachinePoint::new(5.0, 5.0),
        PlannedTarget::new(5.0, 5.0, 3.0),
        AxisScale::uniform(1.0),
    );
    let mut sink = RecordingSink::default();
    let result = interpolator().clockwise(&state, &mut sink, &mut NullDiagnostics);
    assert_eq!(result, Err(MotionError::DegenerateChord { x: 5.0, y: 5.0 }));
    assert!(sink.pulses.is_empty());
}

#[test]
fn infeasible_radius_is_rejected_before_stepping() {
    let state = TrajectoryState::new(
        MachinePoint::new(0.0, 0.0),
        PlannedTarget::new(100.0, 0.0, 1.0),
        AxisScale::uniform(1.0),
    );
    let mut sink = RecordingSink::default();
    let result = interpolator().counter_clockwise(&state, &mut sink, &mut NullDiagnostics);
    assert_eq!(
        result,
        Err(MotionError::GeometricallyInfeasible {
            chord: 100.0,
            diameter: 2.0,
        })
    );
    assert!(sink.pulses.is_empty());
}

#[test]
fn diagnostics_receive_exactly_one_report() {
    #[derive(Default)]
    struct Counting(u32);
    impl DiagnosticSink for Counting {
        fn report_elapsed(&mut self, _ticks: u32) {
            self.0 += 1;
        }
    }

    let state = TrajectoryState::new(
        MachinePoint::new(4.0, 0.0),
        PlannedTarget::new(0.0, 4.0, 4.0),
        AxisScale::uniform(1.0),
    );
    let mut counting = Counting::default();
    interpolator()
        .counter_clockwise(&state, &mut RecordingSink::default(), &mut counting)
        .unwrap();
    assert_eq!(counting.0, 1);
}
