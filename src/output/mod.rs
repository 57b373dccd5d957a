//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_accepted, print_analysis_result, print_check_result, print_found_words, print_letters,
    print_new_game, print_rank, print_rejection, print_summary, print_survey_statistics,
};
