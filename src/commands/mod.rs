//! Command implementations

pub mod simple;
pub mod words;

pub use simple::{Input, parse_input, run_simple};
pub use words::{
    EditReport, ImportReport, add_starter_words, add_words, clear_words, export_words,
    import_words, list_words, print_edit_report, remove_words,
};
