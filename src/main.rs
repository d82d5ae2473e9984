//! Arcstep demo binary: runs one arc command and reports the outcome.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use arcstep::{
    ArcInterpolator, AxisScale, Config, MachinePoint, NoPacing, PacingMode, PlannedTarget,
    RecordingSink, RotationDirection, SleepPacer, SpinPacer, StepPacer, TracingDiagnostics,
    TrajectoryState, WallClockCounter,
};

struct Args {
    config_path: Option<PathBuf>,
    start: MachinePoint,
    target: PlannedTarget,
    direction: RotationDirection,
}

const USAGE: &str =
    "usage: arcstep [--config <path>] <start_x> <start_y> <end_x> <end_y> <radius> <cw|ccw>";

fn parse_args() -> anyhow::Result<Args> {
    let mut args = std::env::args().skip(1).peekable();
    let mut config_path = None;
    if args.peek().map(String::as_str) == Some("--config") {
        args.next();
        config_path = Some(PathBuf::from(
            args.next().context("--config requires a path")?,
        ));
    }

    let positional: Vec<String> = args.collect();
    if positional.len() != 6 {
        bail!("{USAGE}");
    }
    let mut numbers = [0.0f64; 5];
    for (slot, raw) in numbers.iter_mut().zip(&positional) {
        *slot = raw
            .parse()
            .with_context(|| format!("not a number: {raw}"))?;
    }
    let direction = match positional[5].as_str() {
        "cw" => RotationDirection::Clockwise,
        "ccw" => RotationDirection::CounterClockwise,
        other => bail!("unknown direction {other:?}; expected cw or ccw"),
    };

    Ok(Args {
        config_path,
        start: MachinePoint::new(numbers[0], numbers[1]),
        target: PlannedTarget::new(numbers[2], numbers[3], numbers[4]),
        direction,
    })
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load(&path).with_context(|| format!("loading {}", path.display()));
    }
    if let Some(default) = Config::default_path() {
        if default.exists() {
            return Config::load(&default)
                .with_context(|| format!("loading {}", default.display()));
        }
    }
    Ok(Config::default())
}

fn pacer_for(config: &Config) -> Box<dyn StepPacer> {
    let interval = Duration::from_micros(config.pacing.step_interval_us);
    match config.pacing.mode {
        PacingMode::None => Box::new(NoPacing),
        PacingMode::Sleep => Box::new(SleepPacer::new(interval)),
        PacingMode::Spin => Box::new(SpinPacer::new(interval)),
    }
}

fn main() -> anyhow::Result<()> {
    arcstep::init_logging()?;
    tracing::info!(version = arcstep::VERSION, built = arcstep::BUILD_DATE, "arcstep");

    let args = parse_args()?;
    let config = load_config(args.config_path)?;
    let axis_scale: AxisScale = config.machine.axis_scale();
    let state = TrajectoryState::new(args.start, args.target, axis_scale);

    let mut interpolator = ArcInterpolator::new(pacer_for(&config), WallClockCounter::default());
    let mut sink = RecordingSink::default();
    let mut diagnostics = TracingDiagnostics;
    let outcome = match args.direction {
        RotationDirection::Clockwise => {
            interpolator.clockwise(&state, &mut sink, &mut diagnostics)?
        }
        RotationDirection::CounterClockwise => {
            interpolator.counter_clockwise(&state, &mut sink, &mut diagnostics)?
        }
    };

    println!(
        "{} arc from {} to {}: {} pulses ({} axis increments), {} ticks, final {}",
        args.direction,
        args.start,
        args.target.point(),
        outcome.steps_emitted,
        outcome.axis_increments,
        outcome.elapsed_ticks,
        outcome.end,
    );
    Ok(())
}
