//! TUI rendering with ratatui
//!
//! Board, keyboard, hint panel and status bar for the game screen.

use super::app::{App, MessageStyle};
use crate::core::{EvaluatedLetter, KEYBOARD_ROWS, KeyboardStates, LetterState};
use crate::game::{GameStatus, Session, share_text};
use crate::output::formatters::format_elapsed;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, &app.session, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Hints and messages
        ])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, session: &Session, area: Rect) {
    let mode = match session.mode().day_index() {
        Some(day) => format!("Daily #{day}"),
        None => "Free play".to_string(),
    };
    let title = format!(
        "🟩 URDLE  |  {mode}  |  ⏱ {}",
        format_elapsed(session.elapsed_secs())
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(state: LetterState) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match state {
        LetterState::Correct => base.fg(Color::Black).bg(Color::Green),
        LetterState::Present => base.fg(Color::Black).bg(Color::Yellow),
        LetterState::Absent => base.fg(Color::White).bg(Color::DarkGray),
        LetterState::Revealed => base.fg(Color::White).bg(Color::Blue),
        LetterState::Empty => Style::default().fg(Color::White),
    }
}

fn tile_span(tile: EvaluatedLetter, style: Style) -> Span<'static> {
    match (tile.state, tile.letter) {
        (LetterState::Revealed, ' ') => Span::raw("   "),
        (LetterState::Empty, ' ') => Span::styled(" _ ", style),
        (_, letter) => Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
    }
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let session = &app.session;
    let mut lines = Vec::with_capacity(session.max_guesses() * 2);

    for row in session.evaluations() {
        lines.push(row_line(&row, None));
        lines.push(Line::default());
    }
    if !session.is_over() {
        let marker = (app.shake > 0).then(|| Style::default().fg(Color::Red));
        lines.push(row_line(&session.current_row(), marker));
        lines.push(Line::default());
    }
    let used = session.guesses().len() + usize::from(!session.is_over());
    for _ in used..session.max_guesses() {
        let blank = vec![EvaluatedLetter::new('·', LetterState::Empty); session.word_len()];
        lines.push(row_line(&blank, Some(Style::default().fg(Color::DarkGray))));
        lines.push(Line::default());
    }
    lines
}

fn row_line(row: &[EvaluatedLetter], override_style: Option<Style>) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for &tile in row {
        let style = match (tile.state, override_style) {
            (LetterState::Empty, Some(style)) => style,
            _ => tile_style(tile.state),
        };
        spans.push(tile_span(tile, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn keyboard_lines(states: &KeyboardStates) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|ch| {
                    let style = states.get(ch).map_or_else(
                        || Style::default().fg(Color::White),
                        tile_style,
                    );
                    [
                        Span::styled(format!(" {} ", ch.to_ascii_uppercase()), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} letters ", app.session.word_len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, chunks[0]);

    let keyboard = Paragraph::new(keyboard_lines(&app.session.keyboard()))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, chunks[1]);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Definitions or result
            Constraint::Length(3),      // Next hint gauge
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    if app.session.is_over() {
        render_result(f, &app.session, chunks[0]);
    } else {
        render_hints(f, &app.session, chunks[0]);
    }
    render_hint_progress(f, &app.session, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_hints(f: &mut Frame, session: &Session, area: Rect) {
    let progress = session.hint_progress();
    let mut lines: Vec<Line> = session
        .definition_hints()
        .into_iter()
        .enumerate()
        .map(|(i, hint)| match hint {
            Some(text) => Line::from(format!("{}. {text}", i + 1)),
            None if i < progress.definitions => Line::styled(
                format!("{}. (no more definitions)", i + 1),
                Style::default().fg(Color::DarkGray),
            ),
            None => Line::styled(
                format!("{}. 🔒 locked", i + 1),
                Style::default().fg(Color::DarkGray),
            ),
        })
        .collect();

    if progress.letters > 0 {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("{} of {} letters revealed", progress.letters, progress.letter_slots),
            Style::default().fg(Color::Blue),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" 💡 Definitions ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_result(f: &mut Frame, session: &Session, area: Rect) {
    let (title, color) = match session.status() {
        GameStatus::Won => (" 🎉 Solved! ", Color::Green),
        _ => (" ❌ Out of guesses ", Color::Red),
    };

    let mut lines = vec![Line::from(Span::styled(
        session.target().to_uppercase(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    for definition in &session.entry().definitions {
        lines.push(Line::from(format!("• {definition}")));
    }
    if let Some(example) = session.example() {
        lines.push(Line::styled(
            format!("“{example}”"),
            Style::default().add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::default());
    lines.extend(share_text(session).lines().map(|l| Line::from(l.to_string())));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_hint_progress(f: &mut Frame, session: &Session, area: Rect) {
    let progress = session.hint_progress();
    let usage = session.hint_usage();

    let (percent, label) = match (progress.next, progress.next_in) {
        (Some(fraction), Some(secs)) => (
            (fraction * 100.0).round() as u16,
            format!("next hint in {secs}s | {}/{} used", usage.used, usage.total),
        ),
        _ => (100, format!("all hints open | {}/{} used", usage.used, usage.total)),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Next Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.min(100))
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let guesses_text = format!(
        "Guess {}/{}",
        app.session.guesses().len(),
        app.session.max_guesses()
    );
    f.render_widget(
        Paragraph::new(guesses_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.session.is_over() {
        "q: Quit | n: New Word"
    } else {
        "Type letters | Enter: Submit | Ctrl-N: New Word | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
