//! Termination checks for a projectile in flight
//!
//! A flight ends the first time the projectile's position satisfies one of
//! four predicates. They are checked in a fixed priority order so that a
//! point inside both a target and an obstacle always counts as a target hit.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Scene};

/// How a flight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    TargetHit,
    ObstacleHit,
    GroundHit,
    OutOfBounds,
}

impl Outcome {
    /// Message shown to the player once the flight resolves
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::TargetHit => "Congratulations: You hit the target",
            Outcome::ObstacleHit => "Hit an obstacle. Press 'r' to shoot again.",
            Outcome::GroundHit => "Hit the ground. Press 'r' to shoot again.",
            Outcome::OutOfBounds => "Max X reached. Press 'r' to shoot again.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::TargetHit => "target hit",
            Outcome::ObstacleHit => "obstacle hit",
            Outcome::GroundHit => "ground hit",
            Outcome::OutOfBounds => "out of bounds",
        }
    }
}

#[inline]
fn hits_any(pos: DVec2, rects: &[Rect]) -> bool {
    rects.iter().any(|r| r.contains(pos))
}

#[inline]
pub fn touched_ground(pos: DVec2) -> bool {
    pos.y <= 0.0
}

#[inline]
pub fn exceeded_bounds(pos: DVec2, bounds_width: f64) -> bool {
    pos.x >= bounds_width
}

/// Classify a position: target > obstacle > ground > bounds, first match wins.
///
/// `None` means the projectile is still in open air.
pub fn classify(
    pos: DVec2,
    targets: &[Rect],
    obstacles: &[Rect],
    bounds_width: f64,
) -> Option<Outcome> {
    if hits_any(pos, targets) {
        Some(Outcome::TargetHit)
    } else if hits_any(pos, obstacles) {
        Some(Outcome::ObstacleHit)
    } else if touched_ground(pos) {
        Some(Outcome::GroundHit)
    } else if exceeded_bounds(pos, bounds_width) {
        Some(Outcome::OutOfBounds)
    } else {
        None
    }
}

impl Scene {
    /// Classify a position against this scene
    pub fn classify(&self, pos: DVec2) -> Option<Outcome> {
        classify(pos, &self.targets, &self.obstacles, self.bounds_width)
    }
}
