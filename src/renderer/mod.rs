//! WebGPU rendering module
//!
//! Shapes are tessellated on the CPU in canvas coordinates and drawn as a
//! single colored triangle list. Text goes through the HUD overlay.

pub mod hud;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use hud::{HudText, hud_text};
pub use pipeline::RenderState;
pub use shapes::scene_vertices;
pub use vertex::{Palette, Vertex};
