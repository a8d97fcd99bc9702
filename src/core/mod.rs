//! Core domain types for Urdle
//!
//! Pure, deterministic building blocks: catalog entries, tile states,
//! position sets, the reveal policy, guess scoring and keyboard aggregation.
//! Nothing here performs I/O.

mod entry;
mod evaluate;
mod keyboard;
mod letter;
mod positions;
mod reveal;

pub use entry::{DEFAULT_QUALITY, EntryError, WordEntry};
pub use evaluate::{evaluate, is_solved};
pub use keyboard::{KEYBOARD_ROWS, KeyboardStates, keyboard_states};
pub use letter::{EvaluatedLetter, LetterState};
pub use positions::{MAX_WORD_LEN, PositionSet};
pub use reveal::{LONG_WORD_THRESHOLD, VOWELS, is_vowel, reveals_vowels, revealed_positions};
