//! Per-tile feedback states
//!
//! Every tile in the grid and every key on the keyboard carries one of these
//! states. The informativeness ordering drives the keyboard merge.

use std::fmt;

/// Feedback state of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Right letter, right position
    Correct,
    /// Letter occurs elsewhere in the target
    Present,
    /// Letter does not occur (or all its occurrences are already credited)
    Absent,
    /// Not yet typed
    Empty,
    /// Pre-filled by the reveal policy or a letter hint
    Revealed,
}

impl LetterState {
    /// Informativeness used when merging states: correct > present > absent > the rest
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty | Self::Revealed => 0,
        }
    }

    /// Share-text glyph for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty | Self::Revealed => '⬜',
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Empty => "empty",
            Self::Revealed => "revealed",
        };
        f.write_str(name)
    }
}

/// One scored position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatedLetter {
    pub letter: char,
    pub state: LetterState,
}

impl EvaluatedLetter {
    #[inline]
    #[must_use]
    pub const fn new(letter: char, state: LetterState) -> Self {
        Self { letter, state }
    }
}
