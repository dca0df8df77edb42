//! Simulation time model and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick advances
//! every boid by one step; the external driver decides how often to call it.
//! `SimClock` only maps ticks to simulated seconds for reporting:
//!
//!   elapsed_secs = tick / tick_rate_hz
//!
//! The reference cadence is 60 ticks per second.

use std::fmt;

use crate::{FlockError, FlockResult, WorldBounds};
use crate::params::MOVE_SPEED;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts tick counts to simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Ticks per simulated second.  Default: 60.
    pub tick_rate_hz: u32,
    /// The current tick: advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_rate_hz: u32) -> Self {
        Self { tick_rate_hz, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    /// Simulated seconds at `tick`.  Zero when the rate is zero.
    #[inline]
    pub fn secs_at(&self, tick: Tick) -> f64 {
        if self.tick_rate_hz == 0 {
            return 0.0;
        }
        tick.0 as f64 / self.tick_rate_hz as f64
    }

    /// Simulated seconds elapsed since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.secs_at(self.current_tick)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically built in code or loaded from JSON (with the `serde` feature) by
/// the application crate and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// World width.  Fixed for the whole run.
    pub width: f64,

    /// World height.  Fixed for the whole run.
    pub height: f64,

    /// Number of boids.  No boids are added or removed during a run.
    pub population: usize,

    /// Distance every boid moves per tick.  Must stay small relative to the
    /// world size: wraparound corrects each axis at most once per tick.
    pub move_speed: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Total ticks simulated by `Sim::run`.
    pub total_ticks: u64,

    /// Ticks per simulated second, for reporting only.
    pub tick_rate_hz: u32,

    /// Take a snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:                 1280.0,
            height:                720.0,
            population:            500,
            move_speed:            MOVE_SPEED,
            seed:                  42,
            total_ticks:           3_600,
            tick_rate_hz:          60,
            output_interval_ticks: 60,
        }
    }
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_rate_hz)
    }

    #[inline]
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.width, self.height)
    }

    /// Reject configurations the core cannot run.
    pub fn validate(&self) -> FlockResult<()> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(FlockError::Config(format!(
                "world dimensions must be positive and finite, got {}x{}",
                self.width, self.height
            )));
        }
        if self.population == 0 {
            return Err(FlockError::Config("population must be at least 1".into()));
        }
        if u32::try_from(self.population).is_err() {
            return Err(FlockError::Config(format!(
                "population {} exceeds the BoidId range",
                self.population
            )));
        }
        if !(self.move_speed.is_finite() && self.move_speed > 0.0) {
            return Err(FlockError::Config(format!(
                "move speed must be positive and finite, got {}",
                self.move_speed
            )));
        }
        if self.move_speed >= self.width.min(self.height) {
            return Err(FlockError::Config(format!(
                "move speed {} is not smaller than the world ({}x{})",
                self.move_speed, self.width, self.height
            )));
        }
        Ok(())
    }
}
