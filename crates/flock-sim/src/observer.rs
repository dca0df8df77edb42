//! Simulation observer trait for progress reporting and data collection.

use flock_agent::Flock;
use flock_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, perceiving: usize) {
///         if tick.0 % self.interval == 0 {
///             tracing::info!(%tick, perceiving, "progress");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `perceiving` is the number of boids that saw at least one neighbor
    /// during the steer pass.
    fn on_tick_end(&mut self, _tick: Tick, _perceiving: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with the flock as it stands after the tick.
    ///
    /// This is the read-only view renderers and output writers consume.
    fn on_snapshot(&mut self, _tick: Tick, _flock: &Flock) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
