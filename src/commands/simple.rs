//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::catalog::Catalog;
use crate::game::{
    GameConfig, KeyValueStore, Session, Submission, Ticker, resume, save, share_text,
};
use crate::output::{print_banner, print_board, print_hints, print_result, print_share};
use crate::selector::{GameMode, Selection, WordSelector};
use std::io::{self, Write};
use std::time::Instant;

/// Type a whole line into the session and submit it
///
/// The line may hold the full word or only the missing letters. Lines with
/// more letters than the word are rejected like short ones.
pub fn enter_line(session: &mut Session, line: &str) -> Submission {
    if session.is_over() {
        return Submission::NotPlaying;
    }
    while session.delete_letter() {}

    let letters = line.chars().filter(|c| !c.is_whitespace()).count();
    let word_letters = session.target().chars().filter(|&c| c != ' ').count();
    if letters > word_letters {
        return Submission::Incomplete;
    }

    for ch in line.chars() {
        session.add_letter(ch);
    }
    let result = session.submit_guess();
    if result == Submission::Incomplete {
        while session.delete_letter() {}
    }
    result
}

/// Run the simple interactive CLI mode
///
/// Daily progress is loaded from and saved to `store`.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// selection points outside the catalog.
pub fn run_simple(
    catalog: &Catalog,
    selection: Selection,
    config: &GameConfig,
    store: &mut dyn KeyValueStore,
) -> Result<(), String> {
    let selector = WordSelector::new(catalog);
    let mut rng = rand::rng();
    let mut session = resume(catalog, selection, config.clone(), store)
        .ok_or("Selected word is outside the catalog")?;

    print_banner();

    loop {
        let mut ticker = Ticker::every_second(Instant::now());
        print_board(&session);

        while !session.is_over() {
            print_hints(&session);
            let input = get_user_input(&format!(
                "Guess {}/{}",
                session.guesses().len() + 1,
                session.max_guesses()
            ))?;

            // time spent at the prompt counts towards the timer
            let mut ticked = false;
            for _ in 0..ticker.poll(Instant::now()) {
                ticked |= session.tick();
            }
            if ticked {
                save(&session, store);
            }

            match input.to_lowercase().as_str() {
                "" => {}
                "quit" | "exit" => {
                    save(&session, store);
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "hints" => {}
                "share" => print_share(&share_text(&session)),
                "new" => {
                    save(&session, store);
                    break;
                }
                line => match enter_line(&mut session, line) {
                    Submission::Incomplete => {
                        println!(
                            "❌ The word needs {} typed letters\n",
                            session.input_len()
                        );
                    }
                    Submission::Accepted(_) | Submission::NotPlaying => {
                        save(&session, store);
                        print_board(&session);
                    }
                },
            }
        }

        if session.is_over() {
            print_result(&session);
            match get_user_input("Play a random word? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {}
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let index = selector.random_index(&mut rng, Some(session.target()));
        let next = Selection {
            index,
            mode: GameMode::Free,
        };
        session = Session::new(catalog, next, config.clone())
            .ok_or("Selected word is outside the catalog")?;
        println!("\n🔄 New game started!\n");
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("Input closed".to_string());
    }

    Ok(input.trim().to_string())
}
