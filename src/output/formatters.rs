//! Formatting utilities for terminal output

use crate::core::{EvaluatedLetter, KEYBOARD_ROWS, KeyboardStates, LetterState};
use colored::{ColoredString, Colorize};

/// One tile as a colored, padded letter
#[must_use]
pub fn colored_tile(tile: EvaluatedLetter) -> ColoredString {
    let text = format!(" {} ", tile.letter.to_ascii_uppercase());
    match tile.state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Revealed => text.bright_white().on_blue().bold(),
        LetterState::Empty => text.normal(),
    }
}

/// Tile text for a board row
///
/// Space positions stay blank and untyped open tiles show an underscore.
#[must_use]
pub fn tile_text(tile: EvaluatedLetter) -> String {
    match (tile.state, tile.letter) {
        (LetterState::Revealed, ' ') => "   ".to_string(),
        (LetterState::Empty, ' ') => " _ ".to_string(),
        _ => colored_tile(tile).to_string(),
    }
}

/// A full row of tiles
#[must_use]
pub fn colored_row(row: &[EvaluatedLetter]) -> String {
    row.iter().copied().map(tile_text).collect()
}

/// Keyboard rows with each key colored by its best known state
#[must_use]
pub fn keyboard_lines(states: &KeyboardStates) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|ch| {
                    let key = format!("{} ", ch.to_ascii_uppercase());
                    match states.get(ch) {
                        Some(LetterState::Correct) => key.green().bold().to_string(),
                        Some(LetterState::Present) => key.yellow().bold().to_string(),
                        Some(LetterState::Absent) => key.bright_black().to_string(),
                        Some(LetterState::Revealed) => key.blue().to_string(),
                        _ => key,
                    }
                })
                .collect();
            format!("{}{keys}", " ".repeat(i))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Elapsed seconds as `m:ss`
#[must_use]
pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 1.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(1.0, 1.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(0.5, 1.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(3.0, 1.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 1.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(59), "0:59");
        assert_eq!(format_elapsed(61), "1:01");
        assert_eq!(format_elapsed(3600), "60:00");
    }

    #[test]
    fn blank_tiles() {
        let space = EvaluatedLetter::new(' ', LetterState::Revealed);
        let open = EvaluatedLetter::new(' ', LetterState::Empty);
        assert_eq!(tile_text(space), "   ");
        assert_eq!(tile_text(open), " _ ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        let lines = keyboard_lines(&KeyboardStates::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Q W E"));
    }
}
