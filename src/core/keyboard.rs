//! On-screen keyboard state
//!
//! Folds every submitted guess into the best-known state per letter.

use super::evaluate::evaluate;
use super::letter::LetterState;
use super::positions::PositionSet;
use super::reveal::{VOWELS, reveals_vowels};

/// Keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-known state for each letter a–z; `None` means never used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardStates {
    states: [Option<LetterState>; 26],
}

fn slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| usize::from(letter.to_ascii_lowercase() - b'a'))
}

impl KeyboardStates {
    /// State recorded for `letter`, if any
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterState> {
        u8::try_from(letter)
            .ok()
            .and_then(slot)
            .and_then(|i| self.states[i])
    }

    /// Merge `state` into `letter`, keeping the more informative one
    fn merge(&mut self, letter: u8, state: LetterState) {
        let Some(i) = slot(letter) else {
            return;
        };
        match self.states[i] {
            Some(current) if current.priority() >= state.priority() => {}
            _ => self.states[i] = Some(state),
        }
    }

    /// Letters with a recorded state, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|state| (char::from(b'a' + i as u8), state)))
    }
}

impl KeyboardStates {
    /// Keys known before any guess
    ///
    /// Letters that only occur at `revealed` positions start as `Revealed`,
    /// as does every vowel when the long-word rule is active.
    #[must_use]
    pub fn seeded(target: &str, revealed: PositionSet) -> Self {
        let mut keys = Self::default();
        let bytes = target.as_bytes();

        if reveals_vowels(target) {
            for &v in &VOWELS {
                keys.merge(v, LetterState::Revealed);
            }
        }
        for (i, &ch) in bytes.iter().enumerate() {
            let only_revealed = bytes
                .iter()
                .enumerate()
                .filter(|&(_, &c)| c == ch)
                .all(|(j, _)| revealed.contains(j));
            if revealed.contains(i) && only_revealed {
                keys.merge(ch, LetterState::Revealed);
            }
        }
        keys
    }

    /// Fold one guess in, scored against the positions pre-filled when it was played
    pub fn record(&mut self, guess: &str, target: &str, revealed: PositionSet) {
        for (i, letter) in evaluate(guess, target, revealed).into_iter().enumerate() {
            if revealed.contains(i) {
                continue;
            }
            if let Ok(byte) = u8::try_from(letter.letter) {
                self.merge(byte, letter.state);
            }
        }
    }
}

/// Aggregate keyboard state for a guess history played against one fixed
/// set of pre-filled positions
#[must_use]
pub fn keyboard_states(guesses: &[String], target: &str, revealed: PositionSet) -> KeyboardStates {
    let mut keys = KeyboardStates::seeded(target, revealed);
    for guess in guesses {
        keys.record(guess, target, revealed);
    }
    keys
}
