//! Keyboard tester state.
//!
//! Keys are tracked by their physical `code` (e.g. "KeyA", "ShiftLeft") so
//! that layouts and modifiers do not split one key into several entries.

use std::collections::{BTreeSet, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub action: KeyAction,
    /// Produced value, e.g. "a" or "Shift".
    pub key: String,
    /// Physical key, e.g. "KeyA" or "ShiftLeft".
    pub code: String,
    pub repeat: bool,
}

#[derive(Debug, Clone)]
pub struct KeyboardState {
    held: BTreeSet<String>,
    tested: BTreeSet<String>,
    history: VecDeque<KeyEvent>,
    history_limit: usize,
    presses: usize,
}

impl KeyboardState {
    pub fn new(history_limit: usize) -> Self {
        Self {
            held: BTreeSet::new(),
            tested: BTreeSet::new(),
            history: VecDeque::with_capacity(history_limit),
            history_limit: history_limit.max(1),
            presses: 0,
        }
    }

    fn record(&mut self, event: KeyEvent) {
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(event);
    }

    /// Auto-repeat events count as presses but keep the held set unchanged.
    pub fn key_down(&mut self, key: &str, code: &str, repeat: bool) {
        self.presses += 1;
        self.held.insert(code.to_string());
        self.tested.insert(code.to_string());
        self.record(KeyEvent {
            action: KeyAction::Down,
            key: key.to_string(),
            code: code.to_string(),
            repeat,
        });
    }

    pub fn key_up(&mut self, key: &str, code: &str) {
        self.held.remove(code);
        self.record(KeyEvent {
            action: KeyAction::Up,
            key: key.to_string(),
            code: code.to_string(),
            repeat: false,
        });
    }

    /// Forget held keys only, e.g. when the window loses focus and keyup
    /// events will never arrive.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn reset(&mut self) {
        self.held.clear();
        self.tested.clear();
        self.history.clear();
        self.presses = 0;
    }

    pub fn held(&self) -> impl Iterator<Item = &str> {
        self.held.iter().map(String::as_str)
    }

    pub fn is_held(&self, code: &str) -> bool {
        self.held.contains(code)
    }

    pub fn was_tested(&self, code: &str) -> bool {
        self.tested.contains(code)
    }

    pub fn tested_count(&self) -> usize {
        self.tested.len()
    }

    pub fn presses(&self) -> usize {
        self.presses
    }

    /// Newest first.
    pub fn history(&self) -> impl Iterator<Item = &KeyEvent> {
        self.history.iter().rev()
    }
}

/// Human label for a key value (`" "` becomes "Space").
pub fn display_key(key: &str) -> &str {
    match key {
        " " => "Space",
        "" => "Unidentified",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_up_tracks_held() {
        let mut state = KeyboardState::new(10);
        state.key_down("a", "KeyA", false);
        state.key_down("Shift", "ShiftLeft", false);
        assert_eq!(state.held().collect::<Vec<_>>(), ["KeyA", "ShiftLeft"]);

        state.key_up("a", "KeyA");
        assert!(!state.is_held("KeyA"));
        assert!(state.was_tested("KeyA"));
        assert_eq!(state.tested_count(), 2);
    }

    #[test]
    fn test_repeat_counts_presses_only() {
        let mut state = KeyboardState::new(10);
        state.key_down("a", "KeyA", false);
        state.key_down("a", "KeyA", true);
        state.key_down("a", "KeyA", true);
        assert_eq!(state.presses(), 3);
        assert_eq!(state.held().count(), 1);
        assert_eq!(state.tested_count(), 1);
    }

    #[test]
    fn test_history_is_bounded_newest_first() {
        let mut state = KeyboardState::new(2);
        state.key_down("a", "KeyA", false);
        state.key_down("b", "KeyB", false);
        state.key_down("c", "KeyC", false);

        let codes: Vec<_> = state.history().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["KeyC", "KeyB"]);
    }

    #[test]
    fn test_release_all_and_reset() {
        let mut state = KeyboardState::new(5);
        state.key_down("a", "KeyA", false);
        state.release_all();
        assert_eq!(state.held().count(), 0);
        assert_eq!(state.tested_count(), 1);

        state.reset();
        assert_eq!(state.tested_count(), 0);
        assert_eq!(state.presses(), 0);
        assert_eq!(state.history().count(), 0);
    }

    #[test]
    fn test_display_key() {
        assert_eq!(display_key(" "), "Space");
        assert_eq!(display_key("Enter"), "Enter");
    }
}
