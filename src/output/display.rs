//! Display functions for the line-mode game and command results

use super::formatters::{colored_row, create_progress_bar, format_elapsed, keyboard_lines};
use crate::commands::{CheckReport, ScheduleReport, Severity};
use crate::game::{GameStatus, Session, share_text};
use colored::Colorize;

/// Print the line-mode banner
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Urdle - Slang Wordle                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the slang word. Blue tiles are given to you: type the whole");
    println!("word or only the missing letters.\n");
    println!("  - {} right letter, right spot", " A ".black().on_green().bold());
    println!("  - {} in the word, elsewhere", " A ".black().on_yellow().bold());
    println!("  - {} not in the word", " A ".white().on_bright_black());
    println!("\nCommands: 'hints', 'share', 'new' for a random word, 'quit' to exit\n");
}

/// Print guesses so far, the row being typed and the keyboard
pub fn print_board(session: &Session) {
    let label = match session.mode().day_index() {
        Some(day) => format!("Daily #{day}"),
        None => "Free play".to_string(),
    };
    println!("{}", "─".repeat(60).cyan());
    println!(
        "{}  {} letters  ⏱ {}",
        label.bright_cyan().bold(),
        session.word_len(),
        format_elapsed(session.elapsed_secs())
    );
    println!("{}", "─".repeat(60).cyan());

    for row in session.evaluations() {
        println!("  {}", colored_row(&row));
    }
    if !session.is_over() {
        println!("  {}", colored_row(&session.current_row()));
    }
    for _ in session.guesses().len() + usize::from(!session.is_over())..session.max_guesses() {
        println!("  {}", " · ".repeat(session.word_len()).bright_black());
    }

    println!();
    for line in keyboard_lines(&session.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print unlocked definitions and progress towards the next hint
pub fn print_hints(session: &Session) {
    let progress = session.hint_progress();
    println!("💡 {}", "Hints".bright_cyan().bold());
    for (i, hint) in session.definition_hints().iter().enumerate() {
        match hint {
            Some(text) => println!("   {}. {text}", i + 1),
            None if i < progress.definitions => {
                println!("   {}. {}", i + 1, "(no more definitions)".bright_black());
            }
            None => println!("   {}. {}", i + 1, "locked".bright_black()),
        }
    }

    if progress.letters > 0 {
        println!("   {} letter hints given", progress.letters);
    }
    if let (Some(fraction), Some(secs)) = (progress.next, progress.next_in) {
        println!(
            "   Next hint: [{}] {}",
            create_progress_bar(fraction, 1.0, 20).cyan(),
            format!("{secs}s").bright_yellow()
        );
    }
    println!();
}

/// Print the outcome of a finished game
pub fn print_result(session: &Session) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    let word = session.target().to_uppercase();
    match session.status() {
        GameStatus::Won => {
            let performance = match session.guesses().len() {
                1 => "🏆 Perfect! First try!",
                2 => "⭐ Excellent!",
                3 => "💫 Great!",
                4 => "✨ Good!",
                5 => "👍 Solved!",
                _ => "😅 Phew!",
            };
            println!("  {}", performance.bright_green().bold());
            println!("  The word was {}", word.bright_yellow().bold());
        }
        GameStatus::Lost => {
            println!("  {}", "❌ Out of guesses".red().bold());
            println!("  The word was {}", word.bright_yellow().bold());
        }
        GameStatus::Playing => return,
    }

    for definition in &session.entry().definitions {
        println!("  • {definition}");
    }
    if let Some(example) = session.example() {
        println!("  “{}”", example.italic());
    }
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n{}\n", share_text(session));
}

/// Print a share block with a heading
pub fn print_share(text: &str) {
    println!("\n{}\n", "Copy and share:".bright_cyan().bold());
    println!("{text}\n");
}

/// Print the daily schedule listing
pub fn print_schedule(report: &ScheduleReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DAILY SCHEDULE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for day in &report.days {
        println!(
            "  {}  #{:<5} {:<20} {}",
            day.date.format("%Y-%m-%d"),
            day.day,
            day.word.bright_yellow(),
            format!("#/w/{}", day.link_id).bright_black()
        );
    }

    println!("\n📊 {}", "Pool:".bright_cyan().bold());
    println!("   Catalog words:    {}", report.catalog_len);
    println!("   Pool slots:       {}", report.pool_len);
    println!("   Not in range:     {}", report.unscheduled);
}

/// Print the result of a catalog check
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CATALOG CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for issue in &report.issues {
        let tag = match issue.kind.severity() {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warn ".yellow(),
        };
        println!("  {tag} #{:<4} {:<16} {}", issue.index, issue.word, issue.kind);
    }

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    println!(
        "\n   Entries: {}   Errors: {}   Warnings: {}   Time: {:.2}s",
        report.total,
        errors,
        warnings,
        report.duration.as_secs_f64()
    );
    if report.is_playable() {
        println!("{}", "✅ Catalog is playable".green().bold());
    } else {
        println!("{}", "❌ Catalog will not load".red().bold());
    }
}
