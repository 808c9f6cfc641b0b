// SPDX-License-Identifier: MPL-2.0
//! Konami code detector.

use std::collections::VecDeque;

/// Notification shown when the sequence is entered.
pub const ACTIVATED_MESSAGE: &str = "🎉 Konami Code activated! You found our secret!";

/// Keys the detector distinguishes. Everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    B,
    A,
    /// Closes the demo modal; breaks the sequence like any other key.
    Escape,
    Other,
}

const SEQUENCE: [Key; 10] = [
    Key::Up,
    Key::Up,
    Key::Down,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Left,
    Key::Right,
    Key::B,
    Key::A,
];

/// Remembers the most recent keys and reports when they spell the code.
#[derive(Debug, Clone, Default)]
pub struct Konami {
    recent: VecDeque<Key>,
}

impl Konami {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key. Returns true when the last ten keys match the code.
    pub fn press(&mut self, key: Key) -> bool {
        if self.recent.len() == SEQUENCE.len() {
            self.recent.pop_front();
        }
        self.recent.push_back(key);
        self.recent.iter().eq(SEQUENCE.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(konami: &mut Konami, keys: &[Key]) -> bool {
        keys.iter().fold(false, |_, key| konami.press(*key))
    }

    #[test]
    fn full_sequence_activates() {
        let mut konami = Konami::new();
        assert!(feed(&mut konami, &SEQUENCE));
    }

    #[test]
    fn partial_sequence_does_not_activate() {
        let mut konami = Konami::new();
        assert!(!feed(&mut konami, &SEQUENCE[..9]));
    }

    #[test]
    fn leading_noise_is_ignored() {
        let mut konami = Konami::new();
        feed(&mut konami, &[Key::Other, Key::A, Key::Up]);
        assert!(feed(&mut konami, &SEQUENCE));
    }

    #[test]
    fn interruption_resets_progress() {
        let mut konami = Konami::new();
        feed(&mut konami, &SEQUENCE[..5]);
        konami.press(Key::Other);
        assert!(!feed(&mut konami, &SEQUENCE[5..]));
    }

    #[test]
    fn code_can_be_entered_again() {
        let mut konami = Konami::new();
        assert!(feed(&mut konami, &SEQUENCE));
        assert!(!konami.press(Key::Up));
        assert!(feed(&mut konami, &SEQUENCE));
    }
}
