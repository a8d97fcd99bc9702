//! Hint unlock scheduling
//!
//! Two tracks unlock over a game. Definition hints open with guesses or
//! time, whichever comes first. Once all definitions are open, letter hints
//! open one position at a time on a timer. Everything is a pure function of
//! guess count, elapsed seconds and whether the game is over.

/// Definition slots shown in the hint panel
pub const DEFINITION_SLOTS: usize = 3;

/// Unlock thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintPolicy {
    /// Guesses needed to open each definition slot
    pub definition_guesses: [usize; DEFINITION_SLOTS],
    /// Seconds needed to open each definition slot
    pub definition_seconds: [u64; DEFINITION_SLOTS],
    /// Seconds between letter hints, counted from the last definition gate
    pub letter_interval: u64,
}

impl Default for HintPolicy {
    fn default() -> Self {
        Self {
            definition_guesses: [0, 2, 4],
            definition_seconds: [0, 30, 60],
            letter_interval: 60,
        }
    }
}

/// Hints used out of hints available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintUsage {
    pub used: usize,
    pub total: usize,
}

/// Snapshot of both unlock tracks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HintProgress {
    pub definitions: usize,
    pub letters: usize,
    pub letter_slots: usize,
    /// Progress towards the next locked slot, in `[0, 1]`
    pub next: Option<f64>,
    /// Seconds left until the next locked slot opens on time alone
    pub next_in: Option<u64>,
}

impl HintProgress {
    /// Hints used so far, for an entry with `definitions_available` definitions
    ///
    /// Definition slots with no text behind them count neither as used nor
    /// as available.
    #[must_use]
    pub fn usage(&self, definitions_available: usize) -> HintUsage {
        let slots = definitions_available.min(DEFINITION_SLOTS);
        HintUsage {
            used: self.definitions.min(slots) + self.letters,
            total: slots + self.letter_slots,
        }
    }
}

fn fraction(elapsed: u64, from: u64, to: u64) -> f64 {
    if to <= from {
        return 1.0;
    }
    let done = elapsed.saturating_sub(from) as f64;
    (done / (to - from) as f64).clamp(0.0, 1.0)
}

impl HintPolicy {
    /// Definition slots open for the given state
    #[must_use]
    pub fn definitions_unlocked(&self, guess_count: usize, elapsed: u64, game_over: bool) -> usize {
        if game_over {
            return DEFINITION_SLOTS;
        }
        self.definition_guesses
            .iter()
            .zip(&self.definition_seconds)
            .take_while(|&(&guesses, &seconds)| guess_count >= guesses || elapsed >= seconds)
            .count()
    }

    /// Elapsed seconds at which letter slot `k` opens
    #[must_use]
    pub fn letter_threshold(&self, k: usize) -> u64 {
        self.definition_seconds[DEFINITION_SLOTS - 1] + self.letter_interval * (k as u64 + 1)
    }

    /// Letter slots open for the given state
    #[must_use]
    pub fn letters_unlocked(
        &self,
        guess_count: usize,
        elapsed: u64,
        game_over: bool,
        letter_slots: usize,
    ) -> usize {
        if game_over {
            return letter_slots;
        }
        if self.definitions_unlocked(guess_count, elapsed, false) < DEFINITION_SLOTS {
            return 0;
        }
        (0..letter_slots)
            .take_while(|&k| elapsed >= self.letter_threshold(k))
            .count()
    }

    /// Both tracks plus progress towards the next slot
    #[must_use]
    pub fn progress(
        &self,
        guess_count: usize,
        elapsed: u64,
        game_over: bool,
        letter_slots: usize,
    ) -> HintProgress {
        let definitions = self.definitions_unlocked(guess_count, elapsed, game_over);
        let letters = self.letters_unlocked(guess_count, elapsed, game_over, letter_slots);

        let gate = if game_over {
            None
        } else if definitions < DEFINITION_SLOTS {
            let from = definitions
                .checked_sub(1)
                .map_or(0, |i| self.definition_seconds[i]);
            Some((from, self.definition_seconds[definitions]))
        } else if letters < letter_slots {
            let from = letters.checked_sub(1).map_or(
                self.definition_seconds[DEFINITION_SLOTS - 1],
                |k| self.letter_threshold(k),
            );
            Some((from, self.letter_threshold(letters)))
        } else {
            None
        };

        HintProgress {
            definitions,
            letters,
            letter_slots,
            next: gate.map(|(from, to)| fraction(elapsed, from, to)),
            next_in: gate.map(|(_, to)| to.saturating_sub(elapsed)),
        }
    }
}

/// Hide every case-insensitive occurrence of `word` in `text` behind underscores
///
/// # Examples
/// ```
/// use urdle::game::censor;
///
/// assert_eq!(censor("Rizz means charm. He has rizz.", "rizz"), "____ means charm. He has ____.");
/// ```
#[must_use]
pub fn censor(text: &str, word: &str) -> String {
    if word.is_empty() {
        return text.to_string();
    }
    // ASCII lowercasing keeps byte offsets aligned with `text`
    let haystack = text.to_ascii_lowercase();
    let needle = word.to_ascii_lowercase();
    let mask = "_".repeat(word.len());

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, _) in haystack.match_indices(&needle) {
        out.push_str(&text[last..start]);
        out.push_str(&mask);
        last = start + needle.len();
    }
    out.push_str(&text[last..]);
    out
}
