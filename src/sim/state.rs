//! Game session state and core simulation types
//!
//! The session owns everything that changes while playing: the aim, the
//! phase, the ball in flight and the traced path.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::Outcome;
use super::geometry::Scene;
use super::trajectory::{PhysicsTuning, Projectile, StepResult};
use crate::consts::*;
use crate::launch_point;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Aim is adjustable, nothing in flight
    Aiming,
    /// Ball in the air, controls locked
    InFlight,
    /// Outcome shown, controls locked until reset
    Resolved,
}

/// Player-controlled launch parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimState {
    /// Launch angle in degrees (0 = right, 90 = straight up)
    pub angle: f64,
    /// Launch speed
    pub speed: f64,
}

impl Default for AimState {
    fn default() -> Self {
        Self {
            angle: INITIAL_ANGLE,
            speed: INITIAL_SPEED,
        }
    }
}

impl AimState {
    pub fn increase_angle(&mut self) {
        self.angle += AIM_STEP;
    }

    pub fn decrease_angle(&mut self) {
        self.angle -= AIM_STEP;
    }

    pub fn increase_speed(&mut self) {
        self.speed += AIM_STEP;
    }

    pub fn decrease_speed(&mut self) {
        self.speed -= AIM_STEP;
    }

    /// Launch velocity this aim would produce
    pub fn velocity(&self) -> DVec2 {
        crate::velocity_from_aim(self.angle, self.speed)
    }
}

/// Something that happened during a tick, for logging and presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Launched { angle: f64, speed: f64 },
    Resolved { outcome: Outcome, steps: u32 },
    Reset,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    pub aim: AimState,
    pub phase: GamePhase,
    /// Ball currently in flight (or where it stopped, once resolved)
    pub projectile: Option<Projectile>,
    /// Positions visited by the current flight, launch point first
    pub path: Vec<DVec2>,
    /// Result of the last flight (cleared on reset)
    pub outcome: Option<Outcome>,
    pub scene: Scene,
    pub tuning: PhysicsTuning,
    /// Number of launches since the session started
    pub launches: u64,
    /// Events produced since the last drain
    events: Vec<GameEvent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Scene::reference(), PhysicsTuning::default())
    }
}

impl Session {
    pub fn new(scene: Scene, tuning: PhysicsTuning) -> Self {
        Self {
            aim: AimState::default(),
            phase: GamePhase::Aiming,
            projectile: None,
            path: Vec::new(),
            outcome: None,
            scene,
            tuning,
            launches: 0,
            events: Vec::new(),
        }
    }

    /// Whether aim commands currently have any effect
    #[inline]
    pub fn control_enabled(&self) -> bool {
        self.phase == GamePhase::Aiming
    }

    pub fn increase_angle(&mut self) {
        if self.control_enabled() {
            self.aim.increase_angle();
        }
    }

    pub fn decrease_angle(&mut self) {
        if self.control_enabled() {
            self.aim.decrease_angle();
        }
    }

    pub fn increase_speed(&mut self) {
        if self.control_enabled() {
            self.aim.increase_speed();
        }
    }

    pub fn decrease_speed(&mut self) {
        if self.control_enabled() {
            self.aim.decrease_speed();
        }
    }

    /// Fire from the launch point with the current aim.
    ///
    /// Returns false (and changes nothing) unless the session is aiming.
    pub fn launch(&mut self) -> bool {
        if self.phase != GamePhase::Aiming {
            return false;
        }

        let projectile = Projectile::launch(launch_point(), self.aim.angle, self.aim.speed);
        self.path.clear();
        self.path.push(projectile.pos);
        self.projectile = Some(projectile);
        self.outcome = None;
        self.phase = GamePhase::InFlight;
        self.launches += 1;

        log::info!(
            "Launch #{}: angle={} speed={}",
            self.launches,
            self.aim.angle,
            self.aim.speed
        );
        self.events.push(GameEvent::Launched {
            angle: self.aim.angle,
            speed: self.aim.speed,
        });
        true
    }

    /// Advance the ball in flight by one step.
    ///
    /// Returns `None` when there is no flight to advance.
    pub fn advance(&mut self) -> Option<StepResult> {
        if self.phase != GamePhase::InFlight {
            return None;
        }

        let projectile = self.projectile.as_mut()?;
        let result = projectile.step(&self.scene, &self.tuning);
        let steps = projectile.steps;
        self.path.push(projectile.pos);

        if let StepResult::Landed(outcome) = result {
            self.resolve(outcome, steps);
        }
        Some(result)
    }

    /// Run the current flight to completion (blocking form)
    pub fn finish_flight(&mut self) -> Option<Outcome> {
        while let Some(StepResult::Flying) = self.advance() {}
        self.outcome
    }

    /// Launch and resolve in one call, mirroring a freeze-until-landed loop
    pub fn launch_and_resolve(&mut self) -> Option<Outcome> {
        if !self.launch() {
            return None;
        }
        self.finish_flight()
    }

    fn resolve(&mut self, outcome: Outcome, steps: u32) {
        self.outcome = Some(outcome);
        self.phase = GamePhase::Resolved;
        log::info!("Flight resolved after {} steps: {}", steps, outcome.as_str());
        self.events.push(GameEvent::Resolved { outcome, steps });
    }

    /// Restore the default aim and return to aiming.
    ///
    /// Ignored while a ball is in flight.
    pub fn reset(&mut self) -> bool {
        if self.phase == GamePhase::InFlight {
            return false;
        }

        self.aim = AimState::default();
        self.phase = GamePhase::Aiming;
        self.projectile = None;
        self.path.clear();
        self.outcome = None;

        log::debug!("Session reset");
        self.events.push(GameEvent::Reset);
        true
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
