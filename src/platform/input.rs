//! Input sampling
//!
//! Every poll the game asks an `InputSource` for the set of commands that are
//! currently active. Sources are level-triggered: a key that stays down keeps
//! producing its command on every sample.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::sim::TickInput;

/// Logical game command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    AngleUp,
    AngleDown,
    SpeedUp,
    SpeedDown,
    Launch,
    Reset,
}

impl Command {
    /// Set this command's flag on a tick input
    pub fn apply(self, input: &mut TickInput) {
        match self {
            Command::AngleUp => input.angle_up = true,
            Command::AngleDown => input.angle_down = true,
            Command::SpeedUp => input.speed_up = true,
            Command::SpeedDown => input.speed_down = true,
            Command::Launch => input.launch = true,
            Command::Reset => input.reset = true,
        }
    }
}

/// Anything that can report the commands active right now
pub trait InputSource {
    fn sample(&mut self) -> TickInput;
}

/// Key name to command mapping.
///
/// Key names follow `KeyboardEvent.key` ("ArrowLeft", " ", "r").
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<String, Command>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind("ArrowLeft", Command::AngleUp);
        bindings.bind("ArrowRight", Command::AngleDown);
        bindings.bind("ArrowUp", Command::SpeedUp);
        bindings.bind("ArrowDown", Command::SpeedDown);
        bindings.bind(" ", Command::Launch);
        bindings.bind("r", Command::Reset);
        bindings.bind("R", Command::Reset);
        bindings
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind (or rebind) a key
    pub fn bind(&mut self, key: &str, command: Command) {
        self.bindings.insert(key.to_string(), command);
    }

    pub fn command_for(&self, key: &str) -> Option<Command> {
        self.bindings.get(key).copied()
    }
}

/// Tracks which keys are held, fed by key down/up events
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    bindings: KeyBindings,
    held: HashSet<String>,
}

impl HeldKeys {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
        }
    }

    /// Record a key press. Returns true if the key is bound to a command.
    pub fn key_down(&mut self, key: &str) -> bool {
        if self.bindings.command_for(key).is_some() {
            self.held.insert(key.to_string());
            true
        } else {
            false
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// Drop all held keys (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }
}

impl InputSource for HeldKeys {
    fn sample(&mut self) -> TickInput {
        let mut input = TickInput::default();
        for key in &self.held {
            if let Some(command) = self.bindings.command_for(key) {
                command.apply(&mut input);
            }
        }
        input
    }
}

/// Replays a fixed sequence of inputs, then reports idle
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }

    /// Queue `command` for `polls` consecutive samples
    pub fn hold(&mut self, command: Command, polls: usize) -> &mut Self {
        for _ in 0..polls {
            let mut input = TickInput::default();
            command.apply(&mut input);
            self.queue.push_back(input);
        }
        self
    }

    /// Queue `polls` idle samples
    pub fn idle(&mut self, polls: usize) -> &mut Self {
        self.queue
            .extend(std::iter::repeat_n(TickInput::default(), polls));
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> TickInput {
        self.queue.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.command_for("ArrowLeft"), Some(Command::AngleUp));
        assert_eq!(bindings.command_for("ArrowRight"), Some(Command::AngleDown));
        assert_eq!(bindings.command_for("ArrowUp"), Some(Command::SpeedUp));
        assert_eq!(bindings.command_for("ArrowDown"), Some(Command::SpeedDown));
        assert_eq!(bindings.command_for(" "), Some(Command::Launch));
        assert_eq!(bindings.command_for("r"), Some(Command::Reset));
        assert_eq!(bindings.command_for("q"), None);
    }

    #[test]
    fn test_held_key_is_level_triggered() {
        let mut keys = HeldKeys::default();
        assert!(keys.key_down("ArrowUp"));

        // Every sample reports the command until release
        for _ in 0..3 {
            assert!(keys.sample().speed_up);
        }

        keys.key_up("ArrowUp");
        assert!(keys.sample().is_idle());
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut keys = HeldKeys::default();
        assert!(!keys.key_down("x"));
        assert!(!keys.is_held("x"));
        assert!(keys.sample().is_idle());
    }

    #[test]
    fn test_multiple_keys_combine() {
        let mut keys = HeldKeys::default();
        keys.key_down("ArrowLeft");
        keys.key_down(" ");
        let input = keys.sample();
        assert!(input.angle_up);
        assert!(input.launch);
        assert!(!input.reset);

        keys.release_all();
        assert!(keys.sample().is_idle());
    }

    #[test]
    fn test_rebinding() {
        let mut bindings = KeyBindings::default();
        bindings.bind("Enter", Command::Launch);
        let mut keys = HeldKeys::new(bindings);
        keys.key_down("Enter");
        assert!(keys.sample().launch);
    }

    #[test]
    fn test_scripted_input_replays_then_idles() {
        let mut script = ScriptedInput::default();
        script.hold(Command::AngleDown, 2).idle(1).hold(Command::Launch, 1);
        assert_eq!(script.remaining(), 4);

        assert!(script.sample().angle_down);
        assert!(script.sample().angle_down);
        assert!(script.sample().is_idle());
        assert!(script.sample().launch);
        assert!(script.sample().is_idle());
        assert_eq!(script.remaining(), 0);
    }
}
