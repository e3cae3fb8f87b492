//! Projectile flight integration
//!
//! Explicit Euler at a fixed timestep: velocity first, then position, then a
//! termination check against the scene. The gravity term carries an extra
//! multiplier (3x by default) that shapes the arcade feel of the arcs.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::Outcome;
use super::geometry::Scene;
use crate::consts::{GRAVITY, GRAVITY_MULTIPLIER, MAX_FLIGHT_STEPS, SIM_DT};
use crate::velocity_from_aim;

/// Physics constants used by the integrator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsTuning {
    /// Gravitational acceleration
    pub gravity: f64,
    /// Scale applied on top of gravity in the velocity update
    pub gravity_multiplier: f64,
    /// Integration timestep
    pub dt: f64,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            gravity_multiplier: GRAVITY_MULTIPLIER,
            dt: SIM_DT,
        }
    }
}

impl PhysicsTuning {
    /// Vertical velocity lost per step
    #[inline]
    pub fn velocity_decrement(&self) -> f64 {
        self.gravity * self.dt * self.gravity_multiplier
    }
}

/// Result of advancing a projectile by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Still in open air
    Flying,
    /// Flight is over
    Landed(Outcome),
}

impl StepResult {
    pub fn is_flying(&self) -> bool {
        matches!(self, StepResult::Flying)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            StepResult::Flying => None,
            StepResult::Landed(outcome) => Some(*outcome),
        }
    }
}

/// A ball in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Integration steps taken since launch
    pub steps: u32,
}

impl Projectile {
    /// Spawn at `origin` moving at `speed` along `angle_degrees` (0 = right, 90 = up).
    ///
    /// Any angle or speed is accepted, including negative values.
    pub fn launch(origin: DVec2, angle_degrees: f64, speed: f64) -> Self {
        Self {
            pos: origin,
            vel: velocity_from_aim(angle_degrees, speed),
            steps: 0,
        }
    }

    /// Apply one velocity and position update without any termination check
    #[inline]
    pub fn integrate(&mut self, tuning: &PhysicsTuning) {
        self.vel.y -= tuning.velocity_decrement();
        self.pos += self.vel * tuning.dt;
        self.steps += 1;
    }

    /// Integrate once and classify the new position
    pub fn step(&mut self, scene: &Scene, tuning: &PhysicsTuning) -> StepResult {
        self.integrate(tuning);
        log::trace!(
            "step {}: pos=({:.2}, {:.2}) vel=({:.2}, {:.2})",
            self.steps,
            self.pos.x,
            self.pos.y,
            self.vel.x,
            self.vel.y
        );

        if let Some(outcome) = scene.classify(self.pos) {
            return StepResult::Landed(outcome);
        }

        // NaN or infinite aim values never satisfy a check; call them lost
        if !self.pos.is_finite() {
            log::warn!(
                "Flight left finite space at step {} ({}, {}), treating as out of bounds",
                self.steps,
                self.pos.x,
                self.pos.y
            );
            return StepResult::Landed(Outcome::OutOfBounds);
        }

        // Without a downward pull a ball fired up or backwards never comes down
        let descends = tuning.velocity_decrement() > 0.0;
        if !descends && self.steps >= MAX_FLIGHT_STEPS {
            log::warn!(
                "Flight without gravity exceeded {} steps at ({}, {}), treating as out of bounds",
                MAX_FLIGHT_STEPS,
                self.pos.x,
                self.pos.y
            );
            return StepResult::Landed(Outcome::OutOfBounds);
        }

        StepResult::Flying
    }
}

/// A completed flight
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub outcome: Outcome,
    /// Every visited position, launch point first, terminal position last
    pub path: Vec<DVec2>,
    /// Number of integration steps taken
    pub steps: u32,
    /// Velocity at the terminal position
    pub final_velocity: DVec2,
}

impl Flight {
    /// Where the flight ended
    pub fn landing_point(&self) -> DVec2 {
        self.path.last().copied().unwrap_or(DVec2::ZERO)
    }
}

/// Run a launch to completion
pub fn simulate(
    origin: DVec2,
    angle_degrees: f64,
    speed: f64,
    scene: &Scene,
    tuning: &PhysicsTuning,
) -> Flight {
    simulate_with(origin, angle_degrees, speed, scene, tuning, |_| {})
}

/// Run a launch to completion, calling `observer` after every step
pub fn simulate_with<F>(
    origin: DVec2,
    angle_degrees: f64,
    speed: f64,
    scene: &Scene,
    tuning: &PhysicsTuning,
    mut observer: F,
) -> Flight
where
    F: FnMut(&Projectile),
{
    let mut projectile = Projectile::launch(origin, angle_degrees, speed);
    let mut path = vec![projectile.pos];

    loop {
        let result = projectile.step(scene, tuning);
        path.push(projectile.pos);
        observer(&projectile);

        if let StepResult::Landed(outcome) = result {
            return Flight {
                outcome,
                path,
                steps: projectile.steps,
                final_velocity: projectile.vel,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch_point;
    use crate::sim::geometry::Rect;
    use proptest::prelude::*;

    #[test]
    fn test_single_step_matches_euler_update() {
        let tuning = PhysicsTuning::default();
        let mut p = Projectile::launch(DVec2::new(120.0, 120.0), 0.0, 100.0);
        p.integrate(&tuning);

        let expected_vy = -GRAVITY * SIM_DT * 3.0;
        assert!((p.vel.y - expected_vy).abs() < 1e-12);
        assert!((p.pos.x - (120.0 + 100.0 * SIM_DT)).abs() < 1e-12);
        // Position uses the already-updated velocity
        assert!((p.pos.y - (120.0 + expected_vy * SIM_DT)).abs() < 1e-12);
        assert_eq!(p.steps, 1);
    }

    #[test]
    fn test_drop_straight_down() {
        let flight = simulate(
            launch_point(),
            90.0,
            0.0,
            &Scene::empty(1600.0),
            &PhysicsTuning::default(),
        );
        assert_eq!(flight.outcome, Outcome::GroundHit);
        assert!(flight.path.iter().all(|p| p.x == 120.0));
        assert!(flight.landing_point().y <= 0.0);
        // Every position before the last is above ground
        let before = &flight.path[..flight.path.len() - 1];
        assert!(before.iter().all(|p| p.y > 0.0));
    }

    #[test]
    fn test_default_shot_hits_tall_obstacle() {
        let flight = simulate(
            launch_point(),
            45.0,
            180.0,
            &Scene::reference(),
            &PhysicsTuning::default(),
        );
        assert_eq!(flight.outcome, Outcome::ObstacleHit);
        let end = flight.landing_point();
        assert!(end.x >= 1200.0 && end.x <= 1260.0);
    }

    #[test]
    fn test_high_target_reachable() {
        let flight = simulate(
            launch_point(),
            30.0,
            360.0,
            &Scene::reference(),
            &PhysicsTuning::default(),
        );
        assert_eq!(flight.outcome, Outcome::TargetHit);
        assert!(Rect::new(1500.0, 600.0, 60.0, 60.0).contains(flight.landing_point()));
    }

    #[test]
    fn test_fast_shot_leaves_field() {
        let flight = simulate(
            launch_point(),
            45.0,
            400.0,
            &Scene::reference(),
            &PhysicsTuning::default(),
        );
        assert_eq!(flight.outcome, Outcome::OutOfBounds);
        assert!(flight.landing_point().x >= 1600.0);
    }

    #[test]
    fn test_target_precedence_along_path() {
        // Target and obstacle cover the same ground patch; the ball must count as a target hit
        let target = Rect::new(1160.0, 0.0, 30.0, 30.0);
        let obstacle = Rect::new(1160.0, 0.0, 30.0, 30.0);
        let scene = Scene::new(vec![target], vec![obstacle], 1600.0);
        let flight = simulate(
            DVec2::new(1175.0, 200.0),
            90.0,
            0.0,
            &scene,
            &PhysicsTuning::default(),
        );
        assert_eq!(flight.outcome, Outcome::TargetHit);
    }

    #[test]
    fn test_path_starts_at_origin_and_counts_steps() {
        let origin = DVec2::new(60.0, 60.0);
        let flight = simulate(origin, 45.0, 100.0, &Scene::empty(1600.0), &PhysicsTuning::default());
        assert_eq!(flight.path[0], origin);
        assert_eq!(flight.path.len(), flight.steps as usize + 1);
    }

    #[test]
    fn test_observer_sees_every_step() {
        let mut seen = 0u32;
        let flight = simulate_with(
            launch_point(),
            60.0,
            150.0,
            &Scene::reference(),
            &PhysicsTuning::default(),
            |_| seen += 1,
        );
        assert_eq!(seen, flight.steps);
    }

    #[test]
    fn test_nan_speed_terminates() {
        let flight = simulate(
            launch_point(),
            45.0,
            f64::NAN,
            &Scene::reference(),
            &PhysicsTuning::default(),
        );
        assert_eq!(flight.outcome, Outcome::OutOfBounds);
        assert_eq!(flight.steps, 1);
    }

    #[test]
    fn test_fast_vertical_shot_comes_back_down() {
        let flight = simulate(
            launch_point(),
            90.0,
            100_000.0,
            &Scene::empty(1600.0),
            &PhysicsTuning::default(),
        );
        assert_eq!(flight.outcome, Outcome::GroundHit);
        assert!(flight.steps > 100_000);
        let end = flight.landing_point();
        assert!((end.x - 120.0).abs() < 1e-3);
        assert!(end.y <= 0.0);
    }

    #[test]
    fn test_weightless_vertical_shot_is_capped() {
        let tuning = PhysicsTuning {
            gravity_multiplier: 0.0,
            ..Default::default()
        };
        let flight = simulate(launch_point(), 90.0, 10.0, &Scene::empty(1600.0), &tuning);
        assert_eq!(flight.outcome, Outcome::OutOfBounds);
        assert_eq!(flight.steps, MAX_FLIGHT_STEPS);
    }

    #[test]
    fn test_custom_multiplier_shortens_flight() {
        let scene = Scene::empty(1_000_000.0);
        let standard = simulate(launch_point(), 45.0, 180.0, &scene, &PhysicsTuning::default());
        let heavy = simulate(
            launch_point(),
            45.0,
            180.0,
            &scene,
            &PhysicsTuning {
                gravity_multiplier: 6.0,
                ..Default::default()
            },
        );
        assert!(heavy.steps < standard.steps);
    }

    proptest! {
        #[test]
        fn prop_flight_terminates(angle in -180.0f64..=180.0, speed in -500.0f64..=500.0) {
            let flight = simulate(
                DVec2::new(60.0, 60.0),
                angle,
                speed,
                &Scene::reference(),
                &PhysicsTuning::default(),
            );
            prop_assert!(flight.steps <= 1_000);
        }

        #[test]
        fn prop_vertical_velocity_never_increases(angle in 0.1f64..89.9, speed in 0.1f64..500.0) {
            let mut last_vy = f64::INFINITY;
            let mut ok = true;
            simulate_with(
                launch_point(),
                angle,
                speed,
                &Scene::empty(1600.0),
                &PhysicsTuning::default(),
                |p| {
                    ok &= p.vel.y <= last_vy;
                    last_vy = p.vel.y;
                },
            );
            prop_assert!(ok);
        }
    }
}
