//! `flock-behavior`: perception and steering for boids.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`perception`] | `find_neighbors`: radius + forward field-of-view query        |
//! | [`forces`]     | separation, alignment, cohesion, pointer and wall avoidance    |
//! | [`steering`]   | `Steering`: the five force vectors of one boid for one tick   |
//! | [`context`]    | `FlockContext<'a>`: bounds, pointer and params for one tick      |
//! | [`model`]      | `SteeringModel` trait, `ReynoldsSteering`                      |
//! | [`noop`]       | `NoopSteering`: boids fly straight                            |
//!
//! # Design notes
//!
//! The two-pass tick loop in flock-sim works as follows:
//!
//! 1. **Steer pass** (read-only): for every boid, query its neighbors and
//!    call `SteeringModel::steer`.  Boids are only seen through shared
//!    borrows and `&FlockContext`; nothing is mutated, so no boid can observe another boid's update from
//!    the same tick.
//!
//! 2. **Apply pass** (mutating): consume the collected `Steering` records in
//!    canonical order and integrate every boid.
//!
//! Everything in this crate is side-effect free.

pub mod context;
pub mod forces;
pub mod model;
pub mod noop;
pub mod perception;
pub mod steering;


pub use context::FlockContext;
pub use model::{ReynoldsSteering, SteeringModel};
pub use noop::NoopSteering;
pub use perception::find_neighbors;
pub use steering::Steering;
