//! The user's editable word list

use crate::core::{Word, WordError};
use log::warn;
use rustc_hash::FxHashSet;
use serde_json::Value;

/// Ordered list of unique practice words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from already-validated words, dropping duplicates
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::new();
        for word in words {
            list.insert(word);
        }
        list
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Append a validated word; returns false if it was already listed
    pub fn insert(&mut self, word: Word) -> bool {
        if self.contains(&word) {
            return false;
        }
        self.words.push(word);
        true
    }

    /// Validate and append raw user input
    ///
    /// # Errors
    /// Returns `WordError` if the text is not a valid word.
    ///
    /// # Examples
    /// ```
    /// use spelling_tiles::wordlists::WordList;
    ///
    /// let mut list = WordList::new();
    /// assert_eq!(list.add(" Apple"), Ok(true));
    /// assert_eq!(list.add("apple"), Ok(false));
    /// assert!(list.add("apple pie").is_err());
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn add(&mut self, text: &str) -> Result<bool, WordError> {
        Word::new(text).map(|word| self.insert(word))
    }

    /// Remove by position
    pub fn remove(&mut self, index: usize) -> Option<Word> {
        (index < self.words.len()).then(|| self.words.remove(index))
    }

    /// Remove by value; returns true if it was listed
    pub fn remove_word(&mut self, word: &Word) -> bool {
        match self.words.iter().position(|w| w == word) {
            Some(index) => {
                self.words.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Replace the whole list with imported entries
    ///
    /// Strings are trimmed and lowercased; other JSON values are converted to
    /// text first, with arrays joined by commas (`["cat"]` reads as `cat`). Invalid and duplicate entries are dropped.
    /// Returns how many entries were dropped.
    pub fn replace_from_import(&mut self, entries: &[Value]) -> usize {
        let mut seen = FxHashSet::default();
        let mut words = Vec::with_capacity(entries.len());

        for entry in entries {
            match Word::new(import_text(entry)) {
                Ok(word) if seen.insert(word.clone()) => words.push(word),
                Ok(_) => {}
                Err(e) => warn!("skipping imported entry {entry}: {e}"),
            }
        }

        let skipped = entries.len() - words.len();
        self.words = words;
        skipped
    }
}

/// Text form of an imported JSON value
fn import_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => import_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}
