//! Game session state machine
//!
//! A session owns one attempt at one target: typed input, submitted guesses,
//! the game timer and the letter hints unlocked along the way. It is driven
//! by discrete events (letters, deletes, submits, timer ticks) and never
//! performs I/O itself.

use super::config::GameConfig;
use super::hints::{DEFINITION_SLOTS, HintProgress, HintUsage, censor};
use crate::catalog::Catalog;
use crate::core::{
    EvaluatedLetter, KeyboardStates, LetterState, PositionSet, WordEntry, evaluate,
    revealed_positions,
};
use crate::selector::{GameMode, Selection};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Result of pressing Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Game already finished; nothing happened
    NotPlaying,
    /// Not enough letters typed; the row should shake
    Incomplete,
    /// Guess recorded; carries the new status
    Accepted(GameStatus),
}

/// One attempt at one target word
#[derive(Debug, Clone)]
pub struct Session {
    entry: WordEntry,
    index: usize,
    mode: GameMode,
    config: GameConfig,
    revealed: PositionSet,
    hinted: PositionSet,
    letter_slots: Vec<usize>,
    guesses: Vec<String>,
    /// Pre-filled positions at the time each guess was played
    guess_revealed: Vec<PositionSet>,
    typed: String,
    /// Characters of the pre-filled run before the next open slot already typed through
    typed_through: usize,
    status: GameStatus,
    elapsed_secs: u64,
    hints_at_end: Option<HintUsage>,
}

impl Session {
    /// Start a session for the selected catalog entry
    ///
    /// Returns `None` if the selection points outside the catalog.
    #[must_use]
    pub fn new(catalog: &Catalog, selection: Selection, config: GameConfig) -> Option<Self> {
        let entry = catalog.word_by_index(selection.index)?.clone();
        let revealed = revealed_positions(&entry.word);
        let letter_slots = revealed.complement_within(entry.len()).collect();
        log::debug!(
            "new {} session, {} letters, {} pre-revealed",
            if selection.mode.is_daily() { "daily" } else { "free" },
            entry.len(),
            revealed.len()
        );

        Some(Self {
            entry,
            index: selection.index,
            mode: selection.mode,
            config,
            revealed,
            hinted: PositionSet::EMPTY,
            letter_slots,
            guesses: Vec::new(),
            guess_revealed: Vec::new(),
            typed: String::new(),
            typed_through: 0,
            status: GameStatus::Playing,
            elapsed_secs: 0,
            hints_at_end: None,
        })
    }

    #[inline]
    #[must_use]
    pub const fn entry(&self) -> &WordEntry {
        &self.entry
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.entry.word
    }

    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.entry.len()
    }

    /// Catalog position of the target
    #[inline]
    #[must_use]
    pub const fn word_index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.config.max_guesses
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Letters typed for the current row, excluding pre-filled tiles
    #[inline]
    #[must_use]
    pub fn typed(&self) -> &str {
        &self.typed
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    #[inline]
    #[must_use]
    pub const fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Positions pre-filled by the reveal policy
    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> PositionSet {
        self.revealed
    }

    /// Positions opened by letter hints
    #[inline]
    #[must_use]
    pub const fn hinted(&self) -> PositionSet {
        self.hinted
    }

    /// Every position the player does not type
    #[inline]
    #[must_use]
    pub const fn all_revealed(&self) -> PositionSet {
        self.revealed.union(self.hinted)
    }

    /// Positions the player types, ascending
    fn open_slots(&self) -> Vec<usize> {
        self.all_revealed().complement_within(self.word_len()).collect()
    }

    /// Letters needed before a guess can be submitted
    #[must_use]
    pub fn input_len(&self) -> usize {
        self.word_len() - self.all_revealed().len()
    }

    /// Score of every submitted guess
    ///
    /// Each guess keeps the score it got when played; later letter hints
    /// don't change it.
    #[must_use]
    pub fn evaluations(&self) -> Vec<Vec<EvaluatedLetter>> {
        self.guesses
            .iter()
            .zip(&self.guess_revealed)
            .map(|(guess, &revealed)| evaluate(guess, self.target(), revealed))
            .collect()
    }

    #[must_use]
    pub fn keyboard(&self) -> KeyboardStates {
        let mut keys = KeyboardStates::seeded(self.target(), self.all_revealed());
        for (guess, &revealed) in self.guesses.iter().zip(&self.guess_revealed) {
            keys.record(guess, self.target(), revealed);
        }
        keys
    }

    /// The row being typed: pre-filled tiles plus typed letters
    ///
    /// Blank tiles carry a space with `LetterState::Empty`.
    #[must_use]
    pub fn current_row(&self) -> Vec<EvaluatedLetter> {
        let all = self.all_revealed();
        let mut typed = self.typed.chars();
        self.target()
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                if all.contains(i) {
                    EvaluatedLetter::new(ch, LetterState::Revealed)
                } else {
                    EvaluatedLetter::new(typed.next().unwrap_or(' '), LetterState::Empty)
                }
            })
            .collect()
    }

    /// Position of the next tile to type, if any
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.open_slots().get(self.typed.len()).copied()
    }

    /// Current state of both hint tracks
    #[must_use]
    pub fn hint_progress(&self) -> HintProgress {
        self.config.hints.progress(
            self.guesses.len(),
            self.elapsed_secs,
            self.is_over(),
            self.letter_slots.len(),
        )
    }

    /// Hints used: frozen when the game ended, live while playing
    #[must_use]
    pub fn hint_usage(&self) -> HintUsage {
        self.hints_at_end
            .unwrap_or_else(|| self.hint_progress().usage(self.entry.definitions.len()))
    }

    /// Definition slots for the hint panel; `None` is a locked or empty slot
    ///
    /// At least [`DEFINITION_SLOTS`] slots, more when the entry has more
    /// definitions. Slots past the hint track stay locked until the game
    /// ends. The target word is censored out of definitions until then.
    #[must_use]
    pub fn definition_hints(&self) -> Vec<Option<String>> {
        let slots = self.entry.definitions.len().max(DEFINITION_SLOTS);
        let unlocked = if self.is_over() {
            slots
        } else {
            self.hint_progress().definitions
        };
        (0..slots)
            .map(|i| {
                let text = self.entry.definitions.get(i).filter(|_| i < unlocked)?;
                Some(if self.is_over() {
                    text.clone()
                } else {
                    censor(text, self.target())
                })
            })
            .collect()
    }

    /// Usage example, shown once the game is over
    #[must_use]
    pub fn example(&self) -> Option<&str> {
        self.entry.example.as_deref().filter(|_| self.is_over())
    }

    /// Type one letter
    ///
    /// Letters matching the pre-filled run just before the next open slot
    /// are consumed without filling a slot, so the whole word can be typed
    /// naturally. Returns whether the typed input changed.
    pub fn add_letter(&mut self, ch: char) -> bool {
        if self.is_over() || !(ch.is_ascii_alphabetic() || ch == ' ') {
            return false;
        }
        let ch = ch.to_ascii_lowercase();
        let open = self.open_slots();
        let Some(&next) = open.get(self.typed.len()) else {
            return false;
        };

        let run_start = self
            .typed
            .len()
            .checked_sub(1)
            .map_or(0, |last| open[last] + 1);
        let run = &self.target().as_bytes()[run_start..next];

        let mut through = self.typed_through;
        if ch != ' ' {
            while run.get(through) == Some(&b' ') {
                through += 1;
            }
        }
        if run.get(through).is_some_and(|&c| char::from(c) == ch) {
            self.typed_through = through + 1;
            return false;
        }
        if ch == ' ' {
            return false;
        }

        self.typed.push(ch);
        self.typed_through = 0;
        true
    }

    /// Remove the last typed letter
    pub fn delete_letter(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.typed_through = 0;
        self.typed.pop().is_some()
    }

    /// Submit the typed row as a guess
    pub fn submit_guess(&mut self) -> Submission {
        if self.is_over() {
            return Submission::NotPlaying;
        }
        if self.typed.len() != self.input_len() {
            return Submission::Incomplete;
        }

        let all = self.all_revealed();
        let mut typed = self.typed.chars();
        let guess: String = self
            .target()
            .chars()
            .enumerate()
            .map(|(i, t)| if all.contains(i) { t } else { typed.next().unwrap_or(t) })
            .collect();

        log::debug!("guess {} for a {}-letter word", self.guesses.len() + 1, self.word_len());
        let solved = guess == self.target();
        self.guesses.push(guess);
        self.guess_revealed.push(all);
        self.typed.clear();
        self.typed_through = 0;

        if solved {
            self.finish(GameStatus::Won);
        } else if self.guesses.len() >= self.config.max_guesses {
            self.finish(GameStatus::Lost);
        } else {
            self.apply_letter_hints();
        }
        Submission::Accepted(self.status)
    }

    /// Advance the game timer by one second
    ///
    /// Stopped once the game is over. Returns whether anything changed.
    pub fn tick(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.elapsed_secs += 1;
        self.apply_letter_hints();
        true
    }

    fn finish(&mut self, status: GameStatus) {
        self.hints_at_end = Some(self.hint_progress().usage(self.entry.definitions.len()));
        self.status = status;
        log::info!(
            "game {status} after {} guesses in {}s",
            self.guesses.len(),
            self.elapsed_secs
        );
    }

    /// Turn newly unlocked letter hints into pre-filled tiles
    fn apply_letter_hints(&mut self) {
        if self.is_over() {
            return;
        }
        let unlocked = self.hint_progress().letters;
        let mut added = false;
        for &position in self.letter_slots.iter().take(unlocked) {
            added |= self.hinted.insert(position);
        }
        if added {
            // open slots shifted; typed letters no longer line up
            self.typed.clear();
            self.typed_through = 0;
            log::debug!("letter hints now cover {} positions", self.hinted.len());
        }
    }

    /// Replace progress with a saved record
    ///
    /// Status is derived from the guesses themselves. Returns `false`, leaving
    /// the session untouched, if any guess could not have been played here.
    pub(crate) fn restore_progress(&mut self, guesses: Vec<String>, elapsed_secs: u64) -> bool {
        let target = self.target().as_bytes();
        let playable = |guess: &String| {
            guess.len() == target.len()
                && guess
                    .bytes()
                    .enumerate()
                    .all(|(i, c)| if self.revealed.contains(i) { c == target[i] } else { c.is_ascii_lowercase() })
        };
        if guesses.len() > self.config.max_guesses || !guesses.iter().all(playable) {
            return false;
        }
        if let Some(pos) = guesses.iter().position(|g| g == self.target())
            && pos + 1 != guesses.len()
        {
            return false;
        }

        // saves don't record when hints opened; score against the base reveal
        self.guess_revealed = vec![self.revealed; guesses.len()];
        self.guesses = guesses;
        self.elapsed_secs = elapsed_secs;
        self.typed.clear();
        self.typed_through = 0;
        self.hinted = PositionSet::EMPTY;
        self.hints_at_end = None;
        self.status = if self.guesses.last().is_some_and(|g| g == self.target()) {
            GameStatus::Won
        } else if self.guesses.len() >= self.config.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        if self.is_over() {
            // elapsed time froze when the game ended
            let usage = self
                .config
                .hints
                .progress(self.guesses.len(), elapsed_secs, false, self.letter_slots.len())
                .usage(self.entry.definitions.len());
            self.hints_at_end = Some(usage);
        }
        self.apply_letter_hints();
        true
    }
}
