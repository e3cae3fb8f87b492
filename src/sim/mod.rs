//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable rectangle order (targets before obstacles)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use collision::{Outcome, classify};
pub use geometry::{OBSTACLES, PLATFORM, Rect, Scene, TARGETS};
pub use state::{AimState, GameEvent, GamePhase, Session};
pub use tick::{TickInput, tick};
pub use trajectory::{Flight, PhysicsTuning, Projectile, StepResult, simulate, simulate_with};
