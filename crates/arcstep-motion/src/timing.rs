//! Elapsed-tick measurement
//!
//! The kernel measures (never controls) how long an arc command took,
//! through a free-running 24-bit down-counter in the style of a Cortex-M
//! SysTick: `start` reloads it to the mask value and `now` reads the
//! current count. Elapsed ticks are `(mask - now) & mask`, which
//! tolerates one wraparound.

use std::time::Instant;

/// 24-bit counter boundary
pub const TICK_MASK: u32 = 0x00FF_FFFF;

/// Elapsed ticks given a raw down-counter reading
pub fn elapsed_ticks(now: u32) -> u32 {
    TICK_MASK.wrapping_sub(now) & TICK_MASK
}

/// A free-running hardware-style cycle counter
///
/// Read before and after the stepping loop; no pacing or locking is
/// built on it.
pub trait CycleCounter {
    /// Reload the counter to [`TICK_MASK`]
    fn start(&mut self);
    /// Current 24-bit down-counter reading
    fn now(&self) -> u32;
}

/// Host-clock counter emulating the 24-bit down-counter
///
/// Converts wall time to ticks at a configurable rate; defaults to the
/// 16 MHz a small controller typically clocks its system timer at.
#[derive(Debug, Clone)]
pub struct WallClockCounter {
    started: Instant,
    ticks_per_second: u64,
}

impl WallClockCounter {
    /// Create a counter with the given tick rate
    pub fn new(ticks_per_second: u64) -> Self {
        Self {
            started: Instant::now(),
            ticks_per_second,
        }
    }
}

impl Default for WallClockCounter {
    fn default() -> Self {
        Self::new(16_000_000)
    }
}

impl CycleCounter for WallClockCounter {
    fn start(&mut self) {
        self.started = Instant::now();
    }

    fn now(&self) -> u32 {
        let elapsed = self.started.elapsed();
        let ticks = (elapsed.as_secs_f64() * self.ticks_per_second as f64) as u64;
        ((TICK_MASK as u64).wrapping_sub(ticks) & TICK_MASK as u64) as u32
    }
}

/// Manually driven counter for tests
#[derive(Debug, Clone, Default)]
pub struct ManualCounter {
    value: u32,
}

impl ManualCounter {
    /// Create a counter reading the given raw value
    pub fn at(value: u32) -> Self {
        Self { value }
    }

    /// Set the raw reading the next `now` call returns
    pub fn set(&mut self, value: u32) {
        self.value = value;
    }
}

impl CycleCounter for ManualCounter {
    fn start(&mut self) {
        self.value = TICK_MASK;
    }

    fn now(&self) -> u32 {
        self.value
    }
}
