//! Angry Bullet - a projectile-launch target game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scene geometry, trajectory, session state)
//! - `renderer`: WebGPU rendering pipeline and HUD text
//! - `platform`: Input sampling abstraction
//! - `settings`: Presentation preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{FlightMode, Settings};

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (world units, origin bottom-left)
    pub const CANVAS_WIDTH: f64 = 1600.0;
    pub const CANVAS_HEIGHT: f64 = 800.0;

    /// Standard gravity
    pub const GRAVITY: f64 = 9.80665;
    /// Extra gravity scaling applied in the velocity update
    pub const GRAVITY_MULTIPLIER: f64 = 3.0;
    /// Integration timestep per flight step
    pub const SIM_DT: f64 = 0.05;
    /// Step limit for flights under zero or negative gravity, which may never land
    pub const MAX_FLIGHT_STEPS: u32 = 100_000;

    /// Input polling / animation interval (ms)
    pub const PAUSE_DURATION_MS: u32 = 30;
    /// Input polling interval in seconds
    pub const POLL_DT: f64 = PAUSE_DURATION_MS as f64 / 1000.0;
    /// Maximum polls per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Shooting platform occupies [0, PLATFORM_SIZE] on both axes
    pub const PLATFORM_SIZE: f64 = 120.0;
    /// Projectiles leave from the platform's top-right corner
    pub const LAUNCH_X: f64 = PLATFORM_SIZE;
    pub const LAUNCH_Y: f64 = PLATFORM_SIZE;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 3.0;

    /// Aim defaults, restored on reset
    pub const INITIAL_ANGLE: f64 = 45.0;
    pub const INITIAL_SPEED: f64 = 180.0;
    /// Per-poll aim adjustment
    pub const AIM_STEP: f64 = 1.0;
}

/// Fixed launch point (top-right corner of the shooting platform)
#[inline]
pub fn launch_point() -> DVec2 {
    DVec2::new(consts::LAUNCH_X, consts::LAUNCH_Y)
}

/// Decompose a speed and an angle in degrees into a velocity vector
#[inline]
pub fn velocity_from_aim(angle_degrees: f64, speed: f64) -> DVec2 {
    let theta = angle_degrees.to_radians();
    DVec2::new(speed * theta.cos(), speed * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_from_aim_axes() {
        let v = velocity_from_aim(0.0, 10.0);
        assert!((v.x - 10.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);

        let v = velocity_from_aim(90.0, 10.0);
        assert!(v.x.abs() < 1e-9);
        assert!((v.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_from_aim_negative_speed_flips() {
        let forward = velocity_from_aim(30.0, 50.0);
        let backward = velocity_from_aim(30.0, -50.0);
        assert!((forward + backward).length() < 1e-9);
    }
}
