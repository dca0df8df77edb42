//! `flock-sim`: tick loop orchestrator for the flock boids simulator.
//!
//! # Two-pass tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Snapshot: freeze the pointer position for this tick.
//!   ② Steer   : for every boid, against the unmodified flock:
//!                  neighbors = find_neighbors(boid, flock)
//!                  steering  = SteeringModel::steer(boid, neighbors, ctx)
//!                collected into a per-tick buffer indexed by BoidId.
//!   ③ Apply   : for every boid, in id order:
//!                  apply_force(separation), apply_force(alignment),
//!                  apply_force(cohesion), apply_force(pointer),
//!                  apply_force(wall), then integrate.
//! ```
//!
//! No boid's steer step can observe another boid's update from the same
//! tick: the steer pass only holds a shared borrow of the flock and the
//! buffer is dropped at the end of the tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_behavior::ReynoldsSteering;
//! use flock_core::SimConfig;
//! use flock_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::seeded(SimConfig::default(), ReynoldsSteering).build()?;
//! sim.set_pointer(Some(Vec2::new(640.0, 360.0)));
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
