//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use flock_agent::Flock;
use flock_core::{SimClock, SimConfig, Tick};
use flock_sim::SimObserver;

use crate::row::{BoidSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes boid snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      SimClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config.tick_rate_hz` to
    /// convert ticks to simulated seconds.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self { writer, clock: config.make_clock(), last_error: None }
    }

    /// Take the first stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, perceiving: usize) {
        let row = TickSummaryRow {
            tick:             tick.0,
            elapsed_secs:     self.clock.secs_at(tick),
            perceiving_boids: perceiving as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, flock: &Flock) {
        if flock.is_empty() {
            return;
        }
        let rows: Vec<BoidSnapshotRow> =
            flock.boids().iter().map(|b| BoidSnapshotRow::from_boid(tick, b)).collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
