//! Step pacing
//!
//! The interval between step pulses sets the feed rate. Pacing is an
//! injected dependency of the stepping engine rather than an inline
//! delay, so the decision logic is testable without real hardware
//! timing and an interrupt-driven pacer can replace the busy-wait
//! without touching the loop body.

use std::time::{Duration, Instant};

/// Pause policy applied after every emitted step pulse
pub trait StepPacer {
    /// Block until the next pulse may be emitted
    fn pause(&mut self);
}

impl<P: StepPacer + ?Sized> StepPacer for Box<P> {
    fn pause(&mut self) {
        (**self).pause()
    }
}

/// No pause at all; for tests and offline path generation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl StepPacer for NoPacing {
    fn pause(&mut self) {}
}

/// Busy-wait pacer
///
/// Spins on the host clock for the configured interval, matching the
/// delay-loop behavior of small controller firmware.
#[derive(Debug, Clone, Copy)]
pub struct SpinPacer {
    interval: Duration,
}

impl SpinPacer {
    /// Pace steps at a fixed interval
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Pace steps at the given pulse frequency
    pub fn from_step_rate_hz(rate: f64) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / rate))
    }
}

impl StepPacer for SpinPacer {
    fn pause(&mut self) {
        let begun = Instant::now();
        while begun.elapsed() < self.interval {
            std::hint::spin_loop();
        }
    }
}

/// Sleeping pacer
///
/// Yields to the OS scheduler between steps. Coarser than [`SpinPacer`]
/// but does not burn a core; suited to slow feeds and simulation.
#[derive(Debug, Clone, Copy)]
pub struct SleepPacer {
    interval: Duration,
}

impl SleepPacer {
    /// Pace steps at a fixed interval
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl StepPacer for SleepPacer {
    fn pause(&mut self) {
        std::thread::sleep(self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_pacer_waits_interval() {
        let mut pacer = SpinPacer::new(Duration::from_micros(200));
        let begun = Instant::now();
        pacer.pause();
        assert!(begun.elapsed() >= Duration::from_micros(200));
    }

    #[test]
    fn test_step_rate_conversion() {
        let pacer = SpinPacer::from_step_rate_hz(30_000.0);
        assert_eq!(pacer.interval, Duration::from_secs_f64(1.0 / 30_000.0));
    }
}
