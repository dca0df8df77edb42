//! The `OutputWriter` trait implemented by backend writers.

use crate::{BoidSnapshotRow, OutputResult, TickSummaryRow};

/// Sink for simulation output rows.
///
/// [`SimOutputObserver`][crate::SimOutputObserver] stores errors from these
/// methods internally; retrieve them with
/// [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of boid snapshots.
    fn write_snapshots(&mut self, rows: &[BoidSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
