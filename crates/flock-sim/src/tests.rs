//! Integration tests for flock-sim.

use flock_agent::{Boid, Flock, FlockBuilder};
use flock_behavior::{NoopSteering, ReynoldsSteering};
use flock_core::{BoidId, SimConfig, Tick, Vec2, WorldBounds};

use crate::{NoopObserver, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(population: usize, total_ticks: u64) -> SimConfig {
    SimConfig {
        width: 1000.0,
        height: 800.0,
        population,
        move_speed: 2.0,
        seed: 42,
        total_ticks,
        tick_rate_hz: 60,
        output_interval_ticks: total_ticks.max(1),
    }
}

fn boid(id: u32, x: f64, y: f64, dx: f64, dy: f64) -> Boid {
    Boid::new(BoidId(id), Vec2::new(x, y), Vec2::new(dx, dy), 2.0).unwrap()
}

/// A 2000×2000 world with explicit boids, far enough from every wall that
/// only the forces under test act.
fn open_world(boids: Vec<Boid>) -> (SimConfig, Flock) {
    let config = SimConfig {
        width: 2000.0,
        height: 2000.0,
        population: boids.len(),
        ..test_config(boids.len(), 10)
    };
    let flock = Flock::from_boids(config.bounds(), boids).unwrap();
    (config, flock)
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use flock_core::FlockParams;

    use super::*;
    use crate::SimError;

    #[test]
    fn seeded_builds_configured_population() {
        let sim = SimBuilder::seeded(test_config(25, 10), ReynoldsSteering).build().unwrap();
        assert_eq!(sim.boids().len(), 25);
        assert_eq!(sim.clock.current_tick, Tick(0));
        assert!(sim.pointer().is_none());
    }

    #[test]
    fn population_mismatch_errors() {
        let config = test_config(3, 10);
        let flock = FlockBuilder::new(config.bounds(), 2, 1).build().unwrap();
        let result = SimBuilder::new(config, flock, ReynoldsSteering).build();
        assert!(matches!(result, Err(SimError::PopulationMismatch { expected: 3, got: 2 })));
    }

    #[test]
    fn world_mismatch_errors() {
        let config = test_config(3, 10);
        let flock = FlockBuilder::new(WorldBounds::new(500.0, 500.0), 3, 1).build().unwrap();
        let result = SimBuilder::new(config, flock, ReynoldsSteering).build();
        assert!(matches!(result, Err(SimError::WorldMismatch { .. })));
    }

    #[test]
    fn invalid_config_is_rejected_before_running() {
        let config = SimConfig { population: 0, ..test_config(0, 10) };
        let flock = FlockBuilder::new(config.bounds(), 0, 1).build().unwrap();
        let result = SimBuilder::new(config, flock, ReynoldsSteering).build();
        assert!(matches!(result, Err(SimError::Flock(_))));
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = FlockParams { nearby_radius: 0.0, ..FlockParams::default() };
        let result = SimBuilder::seeded(test_config(4, 10), ReynoldsSteering)
            .params(params)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));

        let params = FlockParams { fov: 0.0, ..FlockParams::default() };
        let result = SimBuilder::seeded(test_config(4, 10), ReynoldsSteering)
            .params(params)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn boid_speed_too_large_for_world_is_rejected() {
        let config = SimConfig { width: 100.0, height: 100.0, ..test_config(1, 10) };
        let fast = Boid::new(BoidId(0), Vec2::new(50.0, 50.0), Vec2::new(1.0, 0.0), 500.0).unwrap();
        let flock = Flock::from_boids(config.bounds(), vec![fast]).unwrap();
        let result = SimBuilder::new(config, flock, ReynoldsSteering).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn non_positive_or_nan_boid_speed_is_rejected() {
        for speed in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let config = SimConfig { width: 100.0, height: 100.0, ..test_config(1, 10) };
            let boid = Boid { speed, ..boid(0, 50.0, 50.0, 1.0, 0.0) };
            let flock = Flock::from_boids(config.bounds(), vec![boid]).unwrap();
            let result = SimBuilder::new(config, flock, ReynoldsSteering).build();
            assert!(matches!(result, Err(SimError::Config(_))), "speed {speed} accepted");
        }
    }

    #[test]
    fn narrow_side_bounds_boid_speed() {
        // 99 fits inside a 100-wide world; 150 fits the height but not the width.
        let config = SimConfig { width: 100.0, height: 400.0, ..test_config(1, 10) };
        let ok = Boid { speed: 99.0, ..boid(0, 50.0, 50.0, 1.0, 0.0) };
        let flock = Flock::from_boids(config.bounds(), vec![ok]).unwrap();
        assert!(SimBuilder::new(config.clone(), flock, ReynoldsSteering).build().is_ok());

        let too_fast = Boid { speed: 150.0, ..boid(0, 50.0, 50.0, 0.0, 1.0) };
        let flock = Flock::from_boids(config.bounds(), vec![too_fast]).unwrap();
        assert!(SimBuilder::new(config, flock, ReynoldsSteering).build().is_err());
    }

    #[test]
    fn initial_pointer_is_kept() {
        let sim = SimBuilder::seeded(test_config(2, 10), ReynoldsSteering)
            .pointer(Some(Vec2::new(1.0, 2.0)))
            .build()
            .unwrap();
        assert_eq!(sim.pointer(), Some(Vec2::new(1.0, 2.0)));
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn runs_to_end_tick() {
        let mut sim = SimBuilder::seeded(test_config(5, 10), ReynoldsSteering).build().unwrap();
        sim.run(&mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(10));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = SimBuilder::seeded(test_config(2, 100), ReynoldsSteering).build().unwrap();
        sim.run_ticks(5, &mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(5));
        sim.run_ticks(3, &mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(8));
    }

    #[test]
    fn step_advances_one_tick() {
        let mut sim = SimBuilder::seeded(test_config(2, 100), ReynoldsSteering).build().unwrap();
        sim.step();
        sim.step();
        assert_eq!(sim.clock.current_tick, Tick(2));
    }

    /// Observer that records every callback.
    #[derive(Default)]
    struct Recorder {
        starts:    usize,
        ends:      usize,
        snapshots: Vec<(Tick, usize)>,
        finished:  Option<Tick>,
    }

    impl SimObserver for Recorder {
        fn on_tick_start(&mut self, _t: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _t: Tick, _perceiving: usize) {
            self.ends += 1;
        }
        fn on_snapshot(&mut self, t: Tick, flock: &Flock) {
            self.snapshots.push((t, flock.len()));
        }
        fn on_sim_end(&mut self, t: Tick) {
            self.finished = Some(t);
        }
    }

    #[test]
    fn observer_hooks_fire() {
        let config = SimConfig { output_interval_ticks: 4, ..test_config(3, 10) };
        let mut sim = SimBuilder::seeded(config, ReynoldsSteering).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        assert_eq!(rec.starts, 10);
        assert_eq!(rec.ends, 10);
        assert_eq!(rec.snapshots, vec![(Tick(0), 3), (Tick(4), 3), (Tick(8), 3)]);
        assert_eq!(rec.finished, Some(Tick(10)));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = SimConfig { output_interval_ticks: 0, ..test_config(3, 6) };
        let mut sim = SimBuilder::seeded(config, ReynoldsSteering).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert!(rec.snapshots.is_empty());
    }

    #[test]
    fn same_seed_is_deterministic() {
        let run = || {
            let mut sim = SimBuilder::seeded(test_config(40, 120), ReynoldsSteering)
                .pointer(Some(Vec2::new(500.0, 400.0)))
                .build()
                .unwrap();
            sim.run(&mut NoopObserver);
            sim.boids().to_vec()
        };
        assert_eq!(run(), run());
    }
}

// ── Tick semantics ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use flock_behavior::{FlockContext, SteeringModel, find_neighbors};
    use flock_core::FlockParams;

    use super::*;

    #[test]
    fn invariants_hold_every_tick() {
        let config = test_config(120, 300);
        let bounds = config.bounds();
        let mut sim = SimBuilder::seeded(config, ReynoldsSteering).build().unwrap();

        for tick in 0..300u32 {
            // Sweep the pointer across (and beyond) the world.
            let t = f64::from(tick) / 300.0;
            sim.set_pointer(Some(Vec2::new(-100.0 + 1200.0 * t, 400.0)));
            sim.step();

            for b in sim.boids() {
                assert!(
                    (b.direction.magnitude() - 1.0).abs() < 1e-9,
                    "{} heading {} not unit at tick {tick}",
                    b.id,
                    b.direction
                );
                assert!(bounds.contains(b.position), "{} left the world at {}", b.id, b.position);
            }
        }
    }

    #[test]
    fn apply_pass_matches_snapshot_computation() {
        // Three boids close enough to see each other.  The expected result
        // is computed entirely from the pre-tick snapshot, applying forces
        // one at a time in canonical order.
        let boids = vec![
            boid(0, 1000.0, 1000.0, 1.0, 0.0),
            boid(1, 1040.0, 1010.0, 0.0, 1.0),
            boid(2, 1020.0, 970.0, -1.0, 1.0),
        ];
        let pointer = Some(Vec2::new(1100.0, 1000.0));
        let (config, flock) = open_world(boids.clone());
        let bounds = config.bounds();
        let params = FlockParams::default();

        let ctx = FlockContext::new(bounds, pointer, &params);
        let expected: Vec<Boid> = boids
            .iter()
            .map(|b| {
                let neighbors = find_neighbors(b, &boids, &params);
                let steering = ReynoldsSteering.steer(b, &neighbors, &ctx);
                let mut next = b.clone();
                next.apply_force(steering.separation);
                next.apply_force(steering.alignment);
                next.apply_force(steering.cohesion);
                next.apply_force(steering.pointer);
                next.apply_force(steering.wall);
                next.integrate(bounds);
                next
            })
            .collect();

        let mut sim = SimBuilder::new(config, flock, ReynoldsSteering)
            .pointer(pointer)
            .build()
            .unwrap();
        let perceiving = sim.step();

        assert!(perceiving > 0);
        assert_eq!(sim.boids(), expected.as_slice());
    }

    #[test]
    fn two_boid_scenario() {
        // A at the rear sees B ahead; B cannot see A behind it.
        let (config, flock) = open_world(vec![
            boid(0, 1000.0, 1000.0, 1.0, 0.0),
            boid(1, 1010.0, 1000.0, 1.0, 0.0),
        ]);
        let mut sim = SimBuilder::new(config, flock, ReynoldsSteering).build().unwrap();

        let seen: Vec<BoidId> = sim.neighbors_of(BoidId(0)).unwrap().iter().map(|b| b.id).collect();
        assert_eq!(seen, vec![BoidId(1)]);
        assert!(sim.neighbors_of(BoidId(1)).unwrap().is_empty());

        assert_eq!(sim.step(), 1);
        // All of A's forces act along x, so it keeps heading straight.
        assert_eq!(sim.boids()[0].direction, Vec2::new(1.0, 0.0));
        assert_eq!(sim.boids()[0].position, Vec2::new(1002.0, 1000.0));
        assert_eq!(sim.boids()[1].position, Vec2::new(1012.0, 1000.0));
    }

    #[test]
    fn lone_boid_never_perceives_anyone() {
        let (config, flock) = open_world(vec![boid(0, 1000.0, 1000.0, 0.6, 0.8)]);
        let start = flock.boids()[0].direction;
        let mut sim = SimBuilder::new(config, flock, ReynoldsSteering).build().unwrap();
        for _ in 0..50 {
            assert_eq!(sim.step(), 0);
        }
        // No neighbors, no pointer, no wall within range: heading unchanged.
        assert!((sim.boids()[0].direction - start).magnitude() < 1e-12);
    }

    #[test]
    fn pointer_turns_boid_away() {
        let (config, flock) = open_world(vec![boid(0, 1000.0, 1000.0, 1.0, 0.0)]);
        let mut sim = SimBuilder::new(config, flock, ReynoldsSteering).build().unwrap();
        // Pointer ahead and slightly above: the boid veers downwards.
        sim.set_pointer(Some(Vec2::new(1100.0, 1020.0)));
        sim.step();
        let heading = sim.boids()[0].direction;
        assert!(heading.y < 0.0);
        assert!(heading.x < 1.0);

        // Removing the pointer stops the turning.
        sim.set_pointer(None);
        sim.step();
        assert!((sim.boids()[0].direction - heading).magnitude() < 1e-12);
    }

    #[test]
    fn noop_steering_only_integrates_and_wraps() {
        let (config, flock) = open_world(vec![boid(0, 1998.0, 5.0, 1.0, 0.0)]);
        let mut sim = SimBuilder::new(config, flock, NoopSteering).build().unwrap();
        sim.step();
        assert_eq!(sim.boids()[0].position, Vec2::new(0.0, 5.0));
        assert_eq!(sim.boids()[0].direction, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn neighbors_of_unknown_boid_errors() {
        let sim = SimBuilder::seeded(test_config(3, 10), ReynoldsSteering).build().unwrap();
        assert!(sim.neighbors_of(BoidId(99)).is_err());
    }
}
