//! Shareable result text

use super::session::{GameStatus, Session};
use crate::core::EvaluatedLetter;
use crate::selector::encode_word_id;

/// Link that opens this session's word directly
#[must_use]
pub fn share_url(session: &Session) -> String {
    let base = session.config().share_base_url.trim_end_matches('/');
    format!("{base}/#/w/{}", encode_word_id(session.word_index()))
}

/// Header line: label, score and hint ratio
#[must_use]
pub fn share_header(session: &Session) -> String {
    let label = match session.mode().day_index() {
        Some(day) => format!("Urdle #{day}"),
        None => "Urdle".to_string(),
    };
    let score = if session.status() == GameStatus::Won {
        format!("{}/{}", session.guesses().len(), session.max_guesses())
    } else {
        format!("X/{}", session.max_guesses())
    };
    let usage = session.hint_usage();
    format!("{label} {score} (hints {}/{})", usage.used, usage.total)
}

/// One guess as emoji squares; space positions become two spaces
#[must_use]
pub fn emoji_row(row: &[EvaluatedLetter]) -> String {
    let mut out = String::with_capacity(row.len() * 4);
    for tile in row {
        if tile.letter == ' ' {
            out.push_str("  ");
        } else {
            out.push(tile.state.emoji());
        }
    }
    out
}

/// Full share block
///
/// ```text
/// Urdle #290 3/6 (hints 2/6)
///
/// ⬛🟨⬛⬛
/// 🟩⬛🟩⬛
/// 🟩🟩🟩🟩
///
/// https://gisenberg.github.io/urdle/#/w/hto
/// ```
#[must_use]
pub fn share_text(session: &Session) -> String {
    let grid = session
        .evaluations()
        .iter()
        .map(|row| emoji_row(row))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\n{grid}\n\n{}", share_header(session), share_url(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample;
    use crate::game::GameConfig;
    use crate::selector::{GameMode, Selection, WordSelector};
    use chrono::NaiveDate;

    fn free(index: usize, config: GameConfig) -> Session {
        let catalog = sample();
        let selection = Selection {
            index,
            mode: GameMode::Free,
        };
        Session::new(&catalog, selection, config).unwrap()
    }

    fn play(session: &mut Session, word: &str) {
        for ch in word.chars() {
            session.add_letter(ch);
        }
        session.submit_guess();
    }

    #[test]
    fn free_win_text() {
        let mut s = free(1, GameConfig::default());
        play(&mut s, "act");
        play(&mut s, "cat");
        // "cat" has a single definition, so guessing twice still used one
        assert_eq!(
            share_text(&s),
            "Urdle 2/6 (hints 1/4)\n\n🟨🟨🟩\n🟩🟩🟩\n\nhttps://gisenberg.github.io/urdle/#/w/htp"
        );
    }

    #[test]
    fn grid_unchanged_by_later_letter_hints() {
        let mut s = free(0, GameConfig::default());
        play(&mut s, "bizz");
        for _ in 0..120 {
            s.tick();
        }
        assert!(s.hinted().contains(0));
        let text = share_text(&s);
        assert!(text.contains("\n⬛🟩🟩🟩\n"), "{text}");
    }

    #[test]
    fn unfinished_scores_x() {
        let mut s = free(1, GameConfig::default());
        play(&mut s, "dog");
        assert!(share_header(&s).starts_with("Urdle X/6"));
    }

    #[test]
    fn lost_scores_x() {
        let mut s = free(1, GameConfig::default());
        for _ in 0..6 {
            play(&mut s, "dog");
        }
        assert_eq!(s.status(), GameStatus::Lost);
        assert!(share_header(&s).starts_with("Urdle X/6"));
        assert_eq!(share_text(&s).matches("⬛⬛⬛").count(), 6);
    }

    #[test]
    fn daily_label_has_day_number() {
        let catalog = sample();
        let date = NaiveDate::from_ymd_opt(2025, 1, 11).unwrap();
        let selection = WordSelector::new(&catalog).daily(date);
        let s = Session::new(&catalog, selection, GameConfig::default()).unwrap();
        assert!(share_header(&s).starts_with("Urdle #10 X/6"));
    }

    #[test]
    fn space_positions_render_blank() {
        let mut s = free(4, GameConfig::default());
        play(&mut s, "no cap");
        let text = share_text(&s);
        assert!(text.contains("🟩🟩  🟩🟩🟩"), "{text}");
    }

    #[test]
    fn url_without_trailing_slash() {
        let s = free(0, GameConfig::new("https://example.com/urdle"));
        assert_eq!(share_url(&s), "https://example.com/urdle/#/w/hto");
    }
}
