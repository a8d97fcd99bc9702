//! Urdle
//!
//! A Wordle variant played on slang-dictionary words. Long words and phrases
//! come with their spaces and vowels filled in, definitions unlock as hints
//! over guesses and time, and letters are revealed one by one after that.
//!
//! # Quick Start
//!
//! ```rust
//! use urdle::catalog::embedded;
//! use urdle::game::{GameConfig, Session};
//! use urdle::selector::WordSelector;
//! use chrono::NaiveDate;
//!
//! let catalog = embedded().unwrap();
//! let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//! let selection = WordSelector::new(&catalog).daily(date);
//!
//! let mut session = Session::new(&catalog, selection, GameConfig::default()).unwrap();
//! for ch in "guess".chars() {
//!     session.add_letter(ch);
//! }
//! println!("{:?}", session.submit_guess());
//! ```

// Core domain types
pub mod core;

// Word catalog
pub mod catalog;

// Daily, random and linked word selection
pub mod selector;

// Sessions, hints, sharing and persistence
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
