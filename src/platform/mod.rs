//! Platform abstraction layer
//!
//! Keeps the simulation independent of any particular input backend:
//! browsers feed key events, headless runs feed a script.

pub mod input;

pub use input::{Command, HeldKeys, InputSource, KeyBindings, ScriptedInput};
