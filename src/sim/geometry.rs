//! Scene geometry for targets and obstacles
//!
//! Everything is an axis-aligned rectangle anchored at its bottom-left corner:
//! - x, y: bottom-left corner in world units
//! - width, height: extent to the right and upward
//!
//! The ground (y = 0) and the right boundary (x = bounds_width) are implicit.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_WIDTH, PLATFORM_SIZE};

/// An axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Bottom edge
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Closed containment test: points on any edge count as inside
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.top()
    }
}

/// Reference target layout
pub const TARGETS: [Rect; 6] = [
    Rect::new(1160.0, 0.0, 30.0, 30.0),
    Rect::new(730.0, 0.0, 30.0, 30.0),
    Rect::new(150.0, 0.0, 20.0, 20.0),
    Rect::new(1480.0, 0.0, 60.0, 60.0),
    Rect::new(340.0, 80.0, 60.0, 30.0),
    Rect::new(1500.0, 600.0, 60.0, 60.0),
];

/// Reference obstacle layout
pub const OBSTACLES: [Rect; 5] = [
    Rect::new(1200.0, 0.0, 60.0, 220.0),
    Rect::new(1000.0, 0.0, 60.0, 160.0),
    Rect::new(600.0, 0.0, 60.0, 80.0),
    Rect::new(600.0, 180.0, 60.0, 160.0),
    Rect::new(220.0, 0.0, 120.0, 180.0),
];

/// Shooting platform (drawn only, never collided with)
pub const PLATFORM: Rect = Rect::new(0.0, 0.0, PLATFORM_SIZE, PLATFORM_SIZE);

/// Static playfield: what a projectile can hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub targets: Vec<Rect>,
    pub obstacles: Vec<Rect>,
    /// Right playfield boundary
    pub bounds_width: f64,
}

impl Scene {
    pub fn new(targets: Vec<Rect>, obstacles: Vec<Rect>, bounds_width: f64) -> Self {
        Self {
            targets,
            obstacles,
            bounds_width,
        }
    }

    /// The fixed six-target, five-obstacle layout on a 1600-wide field
    pub fn reference() -> Self {
        Self::new(TARGETS.to_vec(), OBSTACLES.to_vec(), CANVAS_WIDTH)
    }

    /// A field with nothing in it but the ground and the right boundary
    pub fn empty(bounds_width: f64) -> Self {
        Self::new(Vec::new(), Vec::new(), bounds_width)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_interior() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains(DVec2::new(25.0, 40.0)));
        assert!(!r.contains(DVec2::new(5.0, 40.0)));
        assert!(!r.contains(DVec2::new(25.0, 61.0)));
    }

    #[test]
    fn test_rect_contains_edges_inclusive() {
        let r = Rect::new(1160.0, 0.0, 30.0, 30.0);
        assert!(r.contains(DVec2::new(1160.0, 0.0)));
        assert!(r.contains(DVec2::new(1190.0, 30.0)));
        assert!(r.contains(DVec2::new(1190.0, 0.0)));
        assert!(!r.contains(DVec2::new(1190.000001, 15.0)));
    }

    #[test]
    fn test_reference_scene_layout() {
        let scene = Scene::reference();
        assert_eq!(scene.targets.len(), 6);
        assert_eq!(scene.obstacles.len(), 5);
        assert_eq!(scene.bounds_width, 1600.0);
        assert_eq!(scene.targets[0], Rect::new(1160.0, 0.0, 30.0, 30.0));
    }
}
