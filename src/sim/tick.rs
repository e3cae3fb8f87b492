//! Fixed-interval session tick
//!
//! One tick corresponds to one input poll. Held commands apply once per tick,
//! so holding an arrow key keeps nudging the aim every poll interval.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, Session};
use crate::settings::FlightMode;

/// Commands active during a single tick (level-triggered)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub angle_up: bool,
    pub angle_down: bool,
    pub speed_up: bool,
    pub speed_down: bool,
    /// Fire with the current aim
    pub launch: bool,
    /// Restore default aim after a flight
    pub reset: bool,
}

impl TickInput {
    /// True when no command is active
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Advance the session by one poll interval.
///
/// Order within a tick: aim adjustments, launch, flight progress, reset.
/// In `Blocking` mode a launch resolves the whole flight before returning,
/// so input is effectively frozen until the ball lands. In `Stepped` mode the
/// ball moves one integration step per tick.
pub fn tick(session: &mut Session, input: &TickInput, mode: FlightMode) -> Vec<GameEvent> {
    if input.angle_up {
        session.increase_angle();
    }
    if input.angle_down {
        session.decrease_angle();
    }
    if input.speed_up {
        session.increase_speed();
    }
    if input.speed_down {
        session.decrease_speed();
    }

    if input.launch {
        session.launch();
    }

    if session.phase == GamePhase::InFlight {
        match mode {
            FlightMode::Blocking => {
                session.finish_flight();
            }
            FlightMode::Stepped => {
                session.advance();
            }
        }
    }

    if input.reset {
        session.reset();
    }

    session.drain_events()
}
