//! `flock-core`: foundational types for the `flock` boids simulator.
//!
//! This crate is a dependency of every other `flock-*` crate.  It has no
//! `flock-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`vec2`]   | `Vec2`: 2D arithmetic, magnitude, normalisation          |
//! | [`ids`]    | `BoidId`                                                  |
//! | [`world`]  | `WorldBounds`: toroidal world dimensions                 |
//! | [`params`] | `FlockParams` and the reference steering constants        |
//! | [`time`]   | `Tick`, `SimClock`, `SimConfig`                           |
//! | [`rng`]    | `SimRng` (seeded, deterministic)                          |
//! | [`error`]  | `FlockError`, `FlockResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;
pub mod vec2;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FlockError, FlockResult};
pub use ids::BoidId;
pub use params::FlockParams;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
pub use vec2::Vec2;
pub use world::WorldBounds;
