//! Terminal output formatting
//!
//! Colored tiles, keyboard rows and report printing for line mode and the
//! reporting commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_board, print_check_report, print_hints, print_result, print_schedule,
    print_share,
};
