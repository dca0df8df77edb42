//! The `Sim` struct and its tick loop.

use flock_agent::{Boid, Flock};
use flock_behavior::{FlockContext, Steering, SteeringModel, find_neighbors};
use flock_core::{BoidId, FlockParams, SimClock, SimConfig, Tick, Vec2};
use tracing::{debug, info, trace};

use crate::{SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<S>` owns the flock and drives the two-pass tick loop:
///
/// 1. **Steer pass** (read-only): for every boid, compute its neighbor set
///    and call [`SteeringModel::steer`] against the flock as it stood at the
///    start of the tick.  Results go into a scratch `Vec<Steering>` indexed
///    by `BoidId`, allocated and dropped within the tick.
/// 2. **Apply pass** (mutating): for every boid, apply its five forces one
///    at a time in canonical order, then integrate its position.
///
/// The pointer is read once at the start of the tick, so updates made
/// between ticks via [`set_pointer`](Self::set_pointer) take effect on the
/// next tick as a whole.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: SteeringModel> {
    /// Global configuration (world size, population, total ticks, …).
    pub config: SimConfig,

    /// Steering constants shared by every boid.
    pub params: FlockParams,

    /// Simulation clock: tracks the current tick.
    pub clock: SimClock,

    /// The steering model.  Called once per boid per tick.
    pub steering: S,

    /// The population.  Only the apply pass mutates it.
    pub(crate) flock: Flock,

    /// Latest pointer position supplied by the driver.
    pub(crate) pointer: Option<Vec2>,
}

impl<S: SteeringModel> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Read-only view of the flock, e.g. for a renderer.
    #[inline]
    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    /// Read-only view of every boid's current state, in id order.
    #[inline]
    pub fn boids(&self) -> &[Boid] {
        self.flock.boids()
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Update the repulsive pointer.  `None` removes it.
    ///
    /// Takes effect from the next tick; a tick in progress always sees one
    /// consistent pointer position.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    /// The boids `id` currently perceives (debug overlays draw these).
    pub fn neighbors_of(&self, id: BoidId) -> SimResult<Vec<&Boid>> {
        let subject = self.flock.get(id)?;
        Ok(find_neighbors(subject, self.flock.boids(), &self.params))
    }

    /// Advance exactly one tick without observer callbacks.
    ///
    /// Returns the number of boids that perceived at least one neighbor.
    /// Meant for frame-driven drivers that call it once per frame.
    pub fn step(&mut self) -> usize {
        let now = self.clock.current_tick;
        let perceiving = self.process_tick(now);
        self.clock.advance();
        perceiving
    }

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            self.observed_tick(observer);
        }
        info!(
            final_tick = %self.clock.current_tick,
            elapsed_secs = self.clock.elapsed_secs(),
            "simulation finished"
        );
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_tick(observer);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let perceiving = self.process_tick(now);
        observer.on_tick_end(now, perceiving);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.flock);
        }
        self.clock.advance();
    }

    fn process_tick(&mut self, now: Tick) -> usize {
        // ── Pass 1: steer (read-only) ─────────────────────────────────────
        let pointer = self.pointer;
        let (steerings, perceiving) = self.compute_steering(now, pointer);

        // ── Pass 2: apply (mutating) ──────────────────────────────────────
        //
        // Each boid only touches its own state, and the forces it applies
        // were computed from the pre-tick snapshot.
        let bounds = self.flock.bounds();
        for (boid, steering) in self.flock.boids_mut().iter_mut().zip(&steerings) {
            for force in steering.in_order() {
                boid.apply_force(force);
            }
            boid.integrate(bounds);
        }

        debug!(tick = %now, perceiving, "tick complete");
        perceiving
    }

    /// Compute every boid's steering against the current (unmodified) flock.
    ///
    /// Returns the per-boid buffer, indexed by `BoidId`, and the number of
    /// boids with a non-empty neighbor set.
    fn compute_steering(&self, now: Tick, pointer: Option<Vec2>) -> (Vec<Steering>, usize) {
        let boids = self.flock.boids();
        let ctx = FlockContext::new(self.flock.bounds(), pointer, &self.params);

        let mut perceiving = 0;
        let steerings = boids
            .iter()
            .map(|boid| {
                let neighbors = find_neighbors(boid, boids, &self.params);
                if !neighbors.is_empty() {
                    perceiving += 1;
                }
                let steering = self.steering.steer(boid, &neighbors, &ctx);
                trace!(tick = %now, boid = %boid.id, neighbors = neighbors.len(), ?steering, "steer");
                steering
            })
            .collect();

        (steerings, perceiving)
    }
}
