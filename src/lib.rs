//! # Arcstep
//!
//! A two-axis circular interpolation kernel for stepper-driven motion
//! controllers. Resolves an arc from two endpoints, a signed radius, and
//! a rotation direction, then emits the per-step pulse decisions that
//! keep the traced path closest to the ideal circle.
//!
//! ## Architecture
//!
//! Arcstep is organized as a workspace with multiple crates:
//!
//! 1. **arcstep-core** - Trajectory data model and error taxonomy
//! 2. **arcstep-motion** - Arc geometry, quadrant tables, the stepping
//!    engine, and its pacing/timing/diagnostic interfaces
//! 3. **arcstep-settings** - Machine and pacing configuration
//! 4. **arcstep** - The demo binary that runs one arc command

pub use arcstep_core::{
    AxisScale, MachinePoint, MotionError, PlannedTarget, Result, RotationDirection,
    TrajectoryState,
};

pub use arcstep_motion::{
    resolve_arc, ArcGeometry, ArcInterpolator, ArcOutcome, ArcSession, CycleCounter,
    DiagnosticSink, NoPacing, NullDiagnostics, NullSink, RecordingSink, SleepPacer, SpinPacer,
    StepPacer, StepPulse, StepSink, SteppingEngine, TracingDiagnostics, WallClockCounter,
};

pub use arcstep_settings::{Config, MachineSettings, PacingMode, PacingSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}
