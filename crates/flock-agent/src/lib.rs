//! `flock-agent`: boid entities and flock storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`boid`]    | `Boid`: position, heading, `integrate`, `apply_force`    |
//! | [`store`]   | `Flock`: the fixed-size population plus world bounds     |
//! | [`builder`] | `FlockBuilder`: seeded random initial placement          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod boid;
pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use boid::Boid;
pub use builder::FlockBuilder;
pub use store::Flock;
