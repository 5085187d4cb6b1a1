//! Fixed-step simulation time.
//!
//! The simulation counts whole ticks. Every timer inside `sim` stores the tick it started on
//! and compares integer tick deltas against a duration converted to ticks with
//! [`ticks_for`]. Seconds only appear at the edges (tunables, logs, `GameSession::tick`).
//! `ticks / rate` differences drift by an ulp, so they are never compared directly.

use bevy::prelude::*;

/// Largest relative error still treated as "lands on a tick" when converting durations.
const TICK_SNAP: f64 = 1e-9;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    tick_rate_hz: f64,
    ticks: u64,
}

impl SimulationClock {
    pub fn new(tick_rate_hz: f64) -> Self {
        Self { tick_rate_hz, ticks: 0 }
    }

    #[inline]
    pub fn tick_rate_hz(&self) -> f64 {
        self.tick_rate_hz
    }

    /// Index of the most recent tick.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Seconds since the clock started. For display and logs.
    #[inline]
    pub fn now(&self) -> f64 {
        self.ticks as f64 / self.tick_rate_hz
    }

    /// Step forward one tick and return the new tick index.
    pub fn advance(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }
}

/// Tick index nearest to `seconds`. Negative or NaN inputs map to tick 0.
#[inline]
pub fn tick_at(seconds: f64, tick_rate_hz: f64) -> u64 {
    (seconds * tick_rate_hz).round().max(0.0) as u64
}

/// Whole ticks needed for `seconds` to have fully elapsed.
///
/// Durations that are a whole number of ticks up to float noise (0.15 s at 60 Hz is
/// 8.999... ticks) snap to that number; anything else rounds up.
pub fn ticks_for(seconds: f64, tick_rate_hz: f64) -> u64 {
    let exact = seconds * tick_rate_hz;
    let nearest = exact.round();
    let ticks = if (exact - nearest).abs() <= TICK_SNAP * nearest.abs().max(1.0) {
        nearest
    } else {
        exact.ceil()
    };
    ticks.max(0.0) as u64
}
