//! HUD text
//!
//! Text is drawn by the host page (DOM overlay); this module only decides
//! what the text says.

use crate::settings::Settings;
use crate::sim::Session;

/// Strings for the HUD overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HudText {
    /// Angle readout, e.g. "a: 45.0"
    pub angle: Option<String>,
    /// Speed readout, e.g. "v: 180.0"
    pub speed: Option<String>,
    /// Outcome message once a flight resolves
    pub message: Option<&'static str>,
}

/// Format a readout value with at least one decimal place
fn readout(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

pub fn hud_text(session: &Session, settings: &Settings) -> HudText {
    let (angle, speed) = if settings.show_aim_text {
        (
            Some(format!("a: {}", readout(session.aim.angle))),
            Some(format!("v: {}", readout(session.aim.speed))),
        )
    } else {
        (None, None)
    };

    HudText {
        angle,
        speed,
        message: session.outcome.map(|o| o.message()),
    }
}
