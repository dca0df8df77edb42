//! Fluent builder for constructing a [`Sim`].

use flock_agent::{Flock, FlockBuilder};
use flock_behavior::SteeringModel;
use flock_core::{FlockParams, FlockResult, SimConfig, Vec2};
use tracing::info;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: world size, population, seed, total ticks, …
/// - [`Flock`]: from [`flock_agent::FlockBuilder`] or
///   [`Flock::from_boids`], or drawn from the config via
///   [`SimBuilder::seeded`]
/// - `S: SteeringModel`: the steering rules (e.g.
///   [`flock_behavior::ReynoldsSteering`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                  |
/// |-----------------|--------------------------|
/// | `.params(p)`    | `FlockParams::default()` |
/// | `.pointer(p)`   | `None` (no pointer)      |
///
/// # Example
///
/// ```rust,ignore
/// let flock = FlockBuilder::from_config(&config).build()?;
/// let mut sim = SimBuilder::new(config, flock, ReynoldsSteering)
///     .pointer(Some(Vec2::new(100.0, 100.0)))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<S: SteeringModel> {
    config:   SimConfig,
    flock:    FlockResult<Flock>,
    steering: S,
    params:   Option<FlockParams>,
    pointer:  Option<Vec2>,
}

impl<S: SteeringModel> SimBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, flock: Flock, steering: S) -> Self {
        Self { config, flock: Ok(flock), steering, params: None, pointer: None }
    }

    /// Create a builder whose flock is drawn at random from `config`
    /// (population, world size, speed, seed).
    ///
    /// Errors from drawing the flock are reported by [`build`](Self::build).
    pub fn seeded(config: SimConfig, steering: S) -> Self {
        let flock = FlockBuilder::from_config(&config).build();
        Self { config, flock, steering, params: None, pointer: None }
    }

    /// Override the steering constants.
    pub fn params(mut self, params: FlockParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Initial pointer position.
    pub fn pointer(mut self, pointer: Option<Vec2>) -> Self {
        self.pointer = pointer;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;
        let flock = self.flock?;

        if flock.len() != self.config.population {
            return Err(SimError::PopulationMismatch {
                expected: self.config.population,
                got:      flock.len(),
            });
        }
        if flock.bounds() != self.config.bounds() {
            return Err(SimError::WorldMismatch {
                expected: self.config.bounds(),
                got:      flock.bounds(),
            });
        }
        validate_speeds(&flock)?;

        let params = self.params.unwrap_or_default();
        validate_params(&params)?;

        info!(
            population = flock.len(),
            width = self.config.width,
            height = self.config.height,
            seed = self.config.seed,
            "simulation built"
        );

        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            params,
            steering: self.steering,
            flock,
            pointer:  self.pointer,
        })
    }
}

/// Every boid must move a positive, finite distance per tick that is shorter
/// than the narrower world side, so one wrap per axis keeps it on the torus.
fn validate_speeds(flock: &Flock) -> SimResult<()> {
    let bounds = flock.bounds();
    let limit = bounds.width.min(bounds.height);
    for boid in flock.boids() {
        let speed = boid.speed;
        if !(speed.is_finite() && speed > 0.0) || speed >= limit {
            return Err(SimError::Config(format!(
                "{} has speed {speed}; speeds must lie in (0, {limit})",
                boid.id
            )));
        }
    }
    Ok(())
}

fn validate_params(params: &FlockParams) -> SimResult<()> {
    if !(params.nearby_radius.is_finite() && params.nearby_radius > 0.0) {
        return Err(SimError::Config(format!(
            "nearby radius must be positive, got {}",
            params.nearby_radius
        )));
    }
    if !(params.fov > 0.0 && params.fov <= std::f64::consts::TAU) {
        return Err(SimError::Config(format!(
            "field of view must lie in (0, 2π], got {}",
            params.fov
        )));
    }
    if params.wall_threshold.is_nan() || params.wall_threshold < 0.0 {
        return Err(SimError::Config(format!(
            "wall threshold must be non-negative, got {}",
            params.wall_threshold
        )));
    }
    let strengths = [
        params.separation_strength,
        params.alignment_strength,
        params.cohesion_strength,
        params.mouse_strength,
        params.wall_strength,
    ];
    if strengths.iter().any(|s| !s.is_finite()) {
        return Err(SimError::Config("steering strengths must be finite".into()));
    }
    Ok(())
}
