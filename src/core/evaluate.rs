//! Guess scoring
//!
//! Implements Wordle feedback with duplicate-letter handling, extended with
//! pre-revealed positions that always score `Correct`.

use super::letter::{EvaluatedLetter, LetterState};
use super::positions::PositionSet;
use rustc_hash::FxHashMap;

/// Count of each character in the target
fn char_counts(target: &[u8]) -> FxHashMap<u8, u8> {
    let mut counts = FxHashMap::default();
    for &ch in target {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Score `guess` against `target`
///
/// The caller builds a full-length guess (typed letters plus target letters
/// at revealed positions). A guess shorter than the target yields one entry
/// per guessed character.
///
/// # Algorithm
/// 1. First pass: revealed positions and exact matches are `Correct` and
///    remove the target character at that position from the pool
/// 2. Second pass: remaining positions are `Present` if the pool still holds
///    the letter (consuming one), otherwise `Absent`
///
/// # Examples
/// ```
/// use urdle::core::{evaluate, LetterState, PositionSet};
///
/// let result = evaluate("tarb", "brat", PositionSet::EMPTY);
/// assert!(result.iter().all(|l| l.state == LetterState::Present));
/// ```
#[must_use]
pub fn evaluate(guess: &str, target: &str, revealed: PositionSet) -> Vec<EvaluatedLetter> {
    let guess = guess.as_bytes();
    let target = target.as_bytes();
    debug_assert_eq!(guess.len(), target.len(), "guess must match target length");

    let mut states = vec![LetterState::Absent; guess.len()];
    let mut pool = char_counts(target);

    // First pass: revealed and exact matches
    for (i, &letter) in guess.iter().enumerate() {
        let Some(&expected) = target.get(i) else {
            continue;
        };
        if revealed.contains(i) || letter == expected {
            states[i] = LetterState::Correct;
            if let Some(count) = pool.get_mut(&expected) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present letters from what is left
    for (i, &letter) in guess.iter().enumerate() {
        if states[i] == LetterState::Correct || revealed.contains(i) {
            continue;
        }
        if let Some(count) = pool.get_mut(&letter)
            && *count > 0
        {
            states[i] = LetterState::Present;
            *count -= 1;
        }
    }

    guess
        .iter()
        .zip(states)
        .map(|(&letter, state)| EvaluatedLetter::new(char::from(letter), state))
        .collect()
}

/// Whether every position scored `Correct`
#[must_use]
pub fn is_solved(evaluation: &[EvaluatedLetter]) -> bool {
    evaluation.iter().all(|l| l.state == LetterState::Correct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reveal::revealed_positions;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn states(guess: &str, target: &str) -> Vec<LetterState> {
        evaluate(guess, target, PositionSet::EMPTY)
            .into_iter()
            .map(|l| l.state)
            .collect()
    }

    use LetterState::{Absent, Correct, Present};

    #[test]
    fn exact_match_all_correct() {
        assert_eq!(states("cat", "cat"), vec![Correct, Correct, Correct]);
        assert!(is_solved(&evaluate("cat", "cat", PositionSet::EMPTY)));
    }

    #[test]
    fn anagram_all_present() {
        assert_eq!(
            states("tarb", "brat"),
            vec![Present, Present, Present, Present]
        );
    }

    #[test]
    fn duplicate_in_target() {
        // the guessed e lines up with the second e of "eel"; the p's are absent
        assert_eq!(states("pep", "eel"), vec![Absent, Correct, Absent]);
        // a lone e in the wrong place still finds one of the two e's
        assert_eq!(states("xxe", "eel"), vec![Absent, Absent, Present]);
        // two guessed e's in wrong places both find an e in the pool
        assert_eq!(states("lee", "eel"), vec![Present, Correct, Present]);
    }

    #[test]
    fn duplicate_in_guess_credited_once() {
        // only one o in "cost": the exact match wins, the extra o is absent
        assert_eq!(
            states("oooo", "cost"),
            vec![Absent, Correct, Absent, Absent]
        );
        // green takes priority over an earlier yellow claim
        assert_eq!(
            states("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn revealed_positions_always_correct() {
        let target = "algorithm";
        let revealed = revealed_positions(target);
        // guess built with target letters at revealed slots
        let guess = "alxoxixxx";
        let result = evaluate(guess, target, revealed);
        for i in revealed.iter() {
            assert_eq!(result[i].state, Correct);
        }
        assert_eq!(result[1].state, Correct); // l
        assert_eq!(result[2].state, Absent); // x
    }

    #[test]
    fn revealed_letters_do_not_feed_present() {
        // the only a is revealed at position 0; a guessed a elsewhere cannot be present
        let target = "abcdefgh";
        let revealed = revealed_positions(target);
        assert!(revealed.contains(0));
        let result = evaluate("axxxexxa", target, revealed);
        assert_eq!(result[0].state, Correct);
        assert_eq!(result[7].state, Absent);
    }

    #[test]
    fn correct_iff_equal_and_letter_counts_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet = b"abcde";
        for _ in 0..500 {
            let len = rng.random_range(1..=8);
            let word = |rng: &mut StdRng| -> String {
                (0..len)
                    .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
                    .collect()
            };
            let guess = word(&mut rng);
            let target = word(&mut rng);
            let result = evaluate(&guess, &target, PositionSet::EMPTY);

            for (i, letter) in result.iter().enumerate() {
                let equal = guess.as_bytes()[i] == target.as_bytes()[i];
                assert_eq!(letter.state == Correct, equal, "{guess} vs {target}");
            }
            for &ch in alphabet {
                let credited = result
                    .iter()
                    .filter(|l| l.letter == char::from(ch))
                    .filter(|l| matches!(l.state, Correct | Present))
                    .count();
                let available = target.bytes().filter(|&c| c == ch).count();
                assert!(credited <= available, "{guess} vs {target}");
            }
        }
    }

    #[test]
    fn letters_preserved_in_output() {
        let result = evaluate("no cap", "no cap", revealed_positions("no cap"));
        let letters: String = result.iter().map(|l| l.letter).collect();
        assert_eq!(letters, "no cap");
        assert!(is_solved(&result));
    }
}
