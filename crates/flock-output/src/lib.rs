//! `flock-output`: simulation output writers for the flock boids simulator.
//!
//! | Backend | Files created                                 |
//! |---------|-----------------------------------------------|
//! | CSV     | `boid_snapshots.csv`, `tick_summaries.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `flock_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     tracing::error!(%e, "output error");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{BoidSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
