//! Unit tests for flock-agent.

#[cfg(test)]
mod boid_tests {
    use flock_core::{BoidId, Vec2, WorldBounds};

    use crate::Boid;

    fn boid_at(x: f64, y: f64, dx: f64, dy: f64) -> Boid {
        Boid::new(BoidId(0), Vec2::new(x, y), Vec2::new(dx, dy), 2.0).unwrap()
    }

    #[test]
    fn new_normalises_heading() {
        let b = boid_at(1.0, 1.0, 3.0, 4.0);
        assert!((b.direction.magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(b.direction, Vec2::new(0.6, 0.8));
    }

    #[test]
    fn new_rejects_zero_heading() {
        assert!(Boid::new(BoidId(0), Vec2::ZERO, Vec2::ZERO, 2.0).is_err());
    }

    #[test]
    fn integrate_moves_by_speed() {
        let mut b = boid_at(10.0, 10.0, 1.0, 0.0);
        b.integrate(WorldBounds::new(100.0, 100.0));
        assert_eq!(b.position, Vec2::new(12.0, 10.0));
    }

    #[test]
    fn integrate_wraps_past_right_edge() {
        let mut b = boid_at(99.0, 50.0, 1.0, 0.0);
        b.integrate(WorldBounds::new(100.0, 100.0));
        assert_eq!(b.position, Vec2::new(1.0, 50.0));
    }

    #[test]
    fn integrate_wraps_past_bottom_edge() {
        let mut b = boid_at(50.0, 1.0, 0.0, -1.0);
        b.integrate(WorldBounds::new(100.0, 100.0));
        assert_eq!(b.position, Vec2::new(50.0, 99.0));
    }

    #[test]
    fn landing_exactly_on_width_wraps_to_zero_every_lap() {
        let bounds = WorldBounds::new(100.0, 100.0);
        let mut b = boid_at(98.0, 50.0, 1.0, 0.0);
        b.integrate(bounds);
        assert_eq!(b.position.x, 0.0);

        // 50 more steps of 2.0 is exactly one lap; the wrap must not drift.
        for _ in 0..50 {
            b.integrate(bounds);
            assert!(bounds.contains(b.position), "left world at {}", b.position);
        }
        assert_eq!(b.position.x, 0.0);
    }

    #[test]
    fn apply_force_renormalises() {
        let mut b = boid_at(0.0, 0.0, 1.0, 0.0);
        b.apply_force(Vec2::new(0.0, 1.0));
        let expected = std::f64::consts::FRAC_1_SQRT_2;
        assert!((b.direction.x - expected).abs() < 1e-12);
        assert!((b.direction.y - expected).abs() < 1e-12);
        assert!((b.direction.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn apply_force_zero_is_noop() {
        let mut b = boid_at(0.0, 0.0, 0.6, 0.8);
        let before = b.direction;
        b.apply_force(Vec2::ZERO);
        assert!((b.direction - before).magnitude() < 1e-12);
    }

    #[test]
    fn apply_force_cancelling_heading_keeps_heading() {
        let mut b = boid_at(0.0, 0.0, 1.0, 0.0);
        b.apply_force(Vec2::new(-1.0, 0.0));
        assert_eq!(b.direction, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn sequential_application_differs_from_summed() {
        let forces = [Vec2::new(0.0, 0.9), Vec2::new(-0.9, 0.0)];

        let mut sequential = boid_at(0.0, 0.0, 1.0, 0.0);
        for f in forces {
            sequential.apply_force(f);
        }

        let mut summed = boid_at(0.0, 0.0, 1.0, 0.0);
        summed.apply_force(forces[0] + forces[1]);

        assert!((sequential.direction.x - summed.direction.x).abs() > 1e-3);
    }
}

#[cfg(test)]
mod store_tests {
    use flock_core::{BoidId, FlockError, Vec2, WorldBounds};

    use crate::{Boid, Flock};

    fn boid(id: u32, x: f64, y: f64) -> Boid {
        Boid::new(BoidId(id), Vec2::new(x, y), Vec2::new(1.0, 0.0), 2.0).unwrap()
    }

    #[test]
    fn from_boids_accepts_dense_ids() {
        let flock = Flock::from_boids(
            WorldBounds::new(100.0, 100.0),
            vec![boid(0, 1.0, 1.0), boid(1, 2.0, 2.0)],
        )
        .unwrap();
        assert_eq!(flock.len(), 2);
        assert_eq!(flock.ids().collect::<Vec<_>>(), vec![BoidId(0), BoidId(1)]);
    }

    #[test]
    fn from_boids_rejects_out_of_order_ids() {
        let result = Flock::from_boids(
            WorldBounds::new(100.0, 100.0),
            vec![boid(1, 1.0, 1.0), boid(0, 2.0, 2.0)],
        );
        assert!(matches!(result, Err(FlockError::Config(_))));
    }

    #[test]
    fn from_boids_rejects_positions_outside_world() {
        let result = Flock::from_boids(WorldBounds::new(100.0, 100.0), vec![boid(0, 100.0, 1.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn get_missing_boid_errors() {
        let flock = Flock::from_boids(WorldBounds::new(10.0, 10.0), vec![boid(0, 1.0, 1.0)]).unwrap();
        assert!(flock.get(BoidId(0)).is_ok());
        assert!(matches!(flock.get(BoidId(5)), Err(FlockError::BoidNotFound(BoidId(5)))));
    }

    #[test]
    fn from_boids_rejects_non_unit_heading() {
        let stretched = Boid { direction: Vec2::new(3.0, 4.0), ..boid(0, 1.0, 1.0) };
        let result = Flock::from_boids(WorldBounds::new(100.0, 100.0), vec![stretched]);
        assert!(matches!(result, Err(FlockError::Config(_))));

        let broken = Boid { direction: Vec2::new(f64::NAN, 0.0), ..boid(0, 1.0, 1.0) };
        assert!(Flock::from_boids(WorldBounds::new(100.0, 100.0), vec![broken]).is_err());
    }

    #[test]
    fn from_boids_accepts_rounding_level_drift() {
        let nudged = Boid { direction: Vec2::new(1.0 + 1e-12, 0.0), ..boid(0, 1.0, 1.0) };
        assert!(Flock::from_boids(WorldBounds::new(100.0, 100.0), vec![nudged]).is_ok());
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut flock =
            Flock::from_boids(WorldBounds::new(10.0, 10.0), vec![boid(0, 1.0, 1.0)]).unwrap();
        flock.get_mut(BoidId(0)).unwrap().apply_force(Vec2::new(0.0, 2.0));
        assert!(flock.boids()[0].direction.y > 0.0);
        assert!(flock.get_mut(BoidId(1)).is_err());
    }
}

#[cfg(test)]
mod builder {
    use flock_core::{BoidId, SimConfig, WorldBounds};

    use crate::FlockBuilder;

    #[test]
    fn builds_requested_count() {
        let flock = FlockBuilder::new(WorldBounds::new(800.0, 600.0), 250, 7).build().unwrap();
        assert_eq!(flock.len(), 250);
        for (i, boid) in flock.boids().iter().enumerate() {
            assert_eq!(boid.id, BoidId(i as u32));
        }
    }

    #[test]
    fn initial_state_respects_invariants() {
        let bounds = WorldBounds::new(640.0, 480.0);
        let flock = FlockBuilder::new(bounds, 500, 1).speed(3.0).build().unwrap();
        for boid in flock.boids() {
            assert!(bounds.contains(boid.position), "{} at {}", boid.id, boid.position);
            assert_eq!(boid.position.x, boid.position.x.floor());
            assert!((boid.direction.magnitude() - 1.0).abs() < 1e-9);
            assert_eq!(boid.speed, 3.0);
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn count_beyond_id_range_is_rejected() {
        let too_many = u32::MAX as usize + 1;
        let result = FlockBuilder::new(WorldBounds::new(10.0, 10.0), too_many, 1).build();
        assert!(result.is_err());
    }

    #[test]
    fn same_seed_same_flock() {
        let bounds = WorldBounds::new(300.0, 300.0);
        let a = FlockBuilder::new(bounds, 20, 99).build().unwrap();
        let b = FlockBuilder::new(bounds, 20, 99).build().unwrap();
        assert_eq!(a.boids(), b.boids());
    }

    #[test]
    fn different_seed_different_flock() {
        let bounds = WorldBounds::new(300.0, 300.0);
        let a = FlockBuilder::new(bounds, 20, 1).build().unwrap();
        let b = FlockBuilder::new(bounds, 20, 2).build().unwrap();
        assert_ne!(a.boids(), b.boids());
    }

    #[test]
    fn from_config_uses_config_values() {
        let cfg = SimConfig { width: 200.0, height: 100.0, population: 12, move_speed: 1.5, ..SimConfig::default() };
        let flock = FlockBuilder::from_config(&cfg).build().unwrap();
        assert_eq!(flock.len(), 12);
        assert_eq!(flock.bounds(), WorldBounds::new(200.0, 100.0));
        assert!(flock.boids().iter().all(|b| b.speed == 1.5));
    }
}
