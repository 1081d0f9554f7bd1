//! Word list commands
//!
//! Each command loads the store file, applies one edit and saves it again.

use crate::core::Word;
use crate::wordlists::loader::{
    export_to_file, import_from_file, load_store, save_store, words_from_slice,
};
use crate::wordlists::{STARTER, StoreError, WordList};
use colored::Colorize;
use std::path::Path;

/// What an add or remove command did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditReport {
    /// Words actually added or removed
    pub changed: Vec<String>,
    /// Inputs that were rejected, with the reason
    pub rejected: Vec<(String, String)>,
    /// List size afterwards
    pub total: usize,
}

/// Result of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

/// Load the saved list
///
/// # Errors
///
/// Returns an error if the store exists but cannot be read.
pub fn list_words(store: &Path) -> Result<WordList, StoreError> {
    load_store(store)
}

/// Add words, rejecting invalid input and duplicates
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn add_words(store: &Path, inputs: &[String]) -> Result<EditReport, StoreError> {
    let mut list = load_store(store)?;
    let mut report = EditReport::default();

    for input in inputs {
        match list.add(input) {
            Ok(true) => report.changed.push(input.trim().to_lowercase()),
            Ok(false) => report
                .rejected
                .push((input.clone(), "already in the list".to_string())),
            Err(e) => report.rejected.push((input.clone(), e.to_string())),
        }
    }

    if !report.changed.is_empty() {
        save_store(store, &list)?;
    }
    report.total = list.len();
    Ok(report)
}

/// Remove words given as text or as 1-based list positions
///
/// Positions refer to the list as it was before this command.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn remove_words(store: &Path, inputs: &[String]) -> Result<EditReport, StoreError> {
    let mut list = load_store(store)?;
    let original: Vec<Word> = list.words().to_vec();
    let mut report = EditReport::default();

    for input in inputs {
        let target = match input.trim().parse::<usize>() {
            Ok(position) => position
                .checked_sub(1)
                .and_then(|i| original.get(i).cloned())
                .ok_or_else(|| format!("no word at position {position}")),
            Err(_) => Word::new(input).map_err(|e| e.to_string()),
        };

        match target {
            Ok(word) if list.remove_word(&word) => report.changed.push(word.text().to_string()),
            Ok(_) => report
                .rejected
                .push((input.clone(), "not in the list".to_string())),
            Err(reason) => report.rejected.push((input.clone(), reason)),
        }
    }

    if !report.changed.is_empty() {
        save_store(store, &list)?;
    }
    report.total = list.len();
    Ok(report)
}

/// Delete every word; returns how many were removed
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn clear_words(store: &Path) -> Result<usize, StoreError> {
    let mut list = load_store(store)?;
    let removed = list.len();
    list.clear();
    save_store(store, &list)?;
    Ok(removed)
}

/// Add the built-in starter words
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn add_starter_words(store: &Path) -> Result<EditReport, StoreError> {
    let mut list = load_store(store)?;
    let mut report = EditReport::default();

    for word in words_from_slice(STARTER) {
        let text = word.text().to_string();
        if list.insert(word) {
            report.changed.push(text);
        }
    }

    if !report.changed.is_empty() {
        save_store(store, &list)?;
    }
    report.total = list.len();
    Ok(report)
}

/// Replace the saved list with an export document
///
/// # Errors
///
/// Returns an error if either file cannot be read, parsed or written. The
/// store is unchanged on error.
pub fn import_words(store: &Path, file: &Path) -> Result<ImportReport, StoreError> {
    let mut list = load_store(store)?;
    let skipped = import_from_file(file, &mut list)?;
    save_store(store, &list)?;
    Ok(ImportReport {
        imported: list.len(),
        skipped,
    })
}

/// Write the saved list as an export document; returns the word count
///
/// # Errors
///
/// Returns an error if the store cannot be read or the export written.
pub fn export_words(store: &Path, file: &Path) -> Result<usize, StoreError> {
    let list = load_store(store)?;
    export_to_file(file, &list)?;
    Ok(list.len())
}

/// Print an add/remove report
pub fn print_edit_report(verb: &str, report: &EditReport) {
    for word in &report.changed {
        println!("  {} {verb} {}", "✓".green(), word.bright_white().bold());
    }
    for (input, reason) in &report.rejected {
        println!("  {} '{input}': {reason}", "✗".red());
    }
    println!("  {} words in the list", report.total);
}
