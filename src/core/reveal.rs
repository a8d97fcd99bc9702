//! Pre-revealed positions
//!
//! Spaces are always shown. Words longer than [`LONG_WORD_THRESHOLD`] also
//! get every vowel filled in before the first guess.

use super::positions::{MAX_WORD_LEN, PositionSet};

/// Words strictly longer than this get their vowels revealed
pub const LONG_WORD_THRESHOLD: usize = 7;

/// Vowels revealed for long words
pub const VOWELS: [u8; 5] = [b'a', b'e', b'i', b'o', b'u'];

#[inline]
#[must_use]
pub fn is_vowel(ch: u8) -> bool {
    VOWELS.contains(&ch.to_ascii_lowercase())
}

/// Whether the long-word vowel rule applies to `target`
#[inline]
#[must_use]
pub fn reveals_vowels(target: &str) -> bool {
    target.len() > LONG_WORD_THRESHOLD
}

/// Positions the player never has to type
///
/// Only the first [`MAX_WORD_LEN`] characters are considered.
///
/// # Examples
/// ```
/// use urdle::core::revealed_positions;
///
/// let short = revealed_positions("no cap");
/// assert_eq!(short.iter().collect::<Vec<_>>(), vec![2]);
///
/// let long = revealed_positions("algorithm");
/// assert_eq!(long.iter().collect::<Vec<_>>(), vec![0, 3, 5]);
/// ```
#[must_use]
pub fn revealed_positions(target: &str) -> PositionSet {
    let vowels = reveals_vowels(target);
    target
        .bytes()
        .enumerate()
        .take(MAX_WORD_LEN)
        .filter(|&(_, ch)| ch == b' ' || (vowels && is_vowel(ch)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_input_keeps_addressable_positions() {
        let target = vec!["no cap"; 14].join(" ");
        assert!(target.len() > MAX_WORD_LEN);
        let set = revealed_positions(&target);
        assert!(set.iter().all(|i| i < MAX_WORD_LEN));
        assert!(set.contains(2));
        assert!(set.contains(1)); // vowel rule applies
        assert!(!set.contains(3));
    }

    #[test]
    fn short_word_reveals_nothing() {
        assert!(revealed_positions("cat").is_empty());
        assert!(revealed_positions("ratioed").is_empty()); // exactly 7
    }

    #[test]
    fn spaces_always_revealed() {
        let set = revealed_positions("ok boomer");
        // 9 chars: space plus vowels
        assert!(set.contains(2));
        let short = revealed_positions("w l");
        assert_eq!(short.iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn long_word_reveals_vowels() {
        let set = revealed_positions("algorithm");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3, 5]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn vowel_check_is_case_insensitive() {
        assert!(is_vowel(b'A'));
        assert!(is_vowel(b'u'));
        assert!(!is_vowel(b'y'));
        let set = revealed_positions("ALGORITHM");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3, 5]);
    }

    #[test]
    fn reveal_is_idempotent() {
        for word in ["cat", "algorithm", "main character", "skibidi", "situationship"] {
            assert_eq!(revealed_positions(word), revealed_positions(word));
        }
    }

    #[test]
    fn positions_within_word() {
        for word in ["understood the assignment", "delulu", "gatekeeping"] {
            let set = revealed_positions(word);
            assert!(set.iter().all(|i| i < word.len()));
        }
    }
}
