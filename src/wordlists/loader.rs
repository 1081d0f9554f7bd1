//! Word list loading, saving, import and export
//!
//! Two on-disk shapes are supported:
//! - the store file, a plain JSON array of words
//! - the export document, `{ "name": ..., "words": [...] }`

use super::WordList;
use crate::core::Word;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Default store and export file name
pub const DEFAULT_FILE_NAME: &str = "spelling-words.json";

/// Name written into export documents
pub const EXPORT_NAME: &str = "Spelling Words";

/// Errors reading or writing word list files
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Could not parse JSON file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid file: missing \"words\" array.")]
    MissingWords,
}

/// Shareable export document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub name: String,
    pub words: Vec<String>,
}

impl ExportDocument {
    #[must_use]
    pub fn from_list(list: &WordList) -> Self {
        Self {
            name: EXPORT_NAME.to_string(),
            words: list.words().iter().map(|w| w.text().to_string()).collect(),
        }
    }
}

/// Load the saved word list
///
/// A missing file is an empty list. Invalid or duplicate entries are
/// dropped.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not a JSON
/// array.
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<WordList, StoreError> {
    let content = match fs::read_to_string(path.as_ref()) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(WordList::new()),
        Err(e) => return Err(e.into()),
    };

    let entries: Vec<String> = serde_json::from_str(&content)?;
    Ok(WordList::from_words(
        entries.iter().filter_map(|s| Word::new(s).ok()),
    ))
}

/// Atomically write `value` as JSON to `path`
fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T, pretty: bool) -> Result<(), StoreError> {
    let path = path.as_ref();
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Save the word list to the store file
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_store<P: AsRef<Path>>(path: P, list: &WordList) -> Result<(), StoreError> {
    let words: Vec<&str> = list.words().iter().map(Word::text).collect();
    write_json(path.as_ref(), &words, false)?;
    info!("saved {} words to {}", list.len(), path.as_ref().display());
    Ok(())
}

/// Write an export document
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_to_file<P: AsRef<Path>>(path: P, list: &WordList) -> Result<(), StoreError> {
    write_json(path, &ExportDocument::from_list(list), true)
}

/// Parse an export document's text
///
/// Only the `words` array is required; each entry is validated leniently
/// as described on [`WordList::replace_from_import`].
///
/// # Errors
///
/// Returns `StoreError::Json` for unparsable text and
/// `StoreError::MissingWords` when there is no `words` array.
pub fn parse_import(content: &str) -> Result<Vec<Value>, StoreError> {
    let data: Value = serde_json::from_str(content)?;
    match data.get("words") {
        Some(Value::Array(entries)) => Ok(entries.clone()),
        _ => Err(StoreError::MissingWords),
    }
}

/// Replace `list` with the words in an export document on disk
///
/// Returns the number of entries that were skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed. `list` is left
/// untouched on error.
pub fn import_from_file<P: AsRef<Path>>(path: P, list: &mut WordList) -> Result<usize, StoreError> {
    let content = fs::read_to_string(path)?;
    let entries = parse_import(&content)?;
    Ok(list.replace_from_import(&entries))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use spelling_tiles::wordlists::loader::words_from_slice;
/// use spelling_tiles::wordlists::STARTER;
///
/// let words = words_from_slice(STARTER);
/// assert_eq!(words.len(), STARTER.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn list(words: &[&str]) -> WordList {
        WordList::from_words(words_from_slice(words))
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["cat", "two words", "", "dog"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
    }

    #[test]
    fn store_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.json");
        let original = list(&["apple", "bread"]);

        save_store(&path, &original).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["apple","bread"]"#);
        assert_eq!(load_store(&path).unwrap(), original);
    }

    #[test]
    fn missing_store_is_empty() {
        let dir = tempdir().unwrap();
        let loaded = load_store(dir.path().join("nothing.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_store_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_store(&path), Err(StoreError::Json(_))));
    }

    #[test]
    fn export_document_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        export_to_file(&path, &list(&["cat", "dog"])).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["name"], "Spelling Words");
        assert_eq!(value["words"], serde_json::json!(["cat", "dog"]));
    }

    #[test]
    fn import_replaces_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shared.json");
        fs::write(
            &path,
            r#"{ "name": "Week 3", "words": ["Rabbit", "zebra", "no way", "rabbit"] }"#,
        )
        .unwrap();

        let mut target = list(&["old"]);
        let skipped = import_from_file(&path, &mut target).unwrap();
        assert_eq!(skipped, 2);
        assert_eq!(target, list(&["rabbit", "zebra"]));
    }

    #[test]
    fn import_requires_words_array() {
        assert!(matches!(
            parse_import(r#"{ "name": "x" }"#),
            Err(StoreError::MissingWords)
        ));
        assert!(matches!(
            parse_import(r#"{ "words": "cat" }"#),
            Err(StoreError::MissingWords)
        ));
        assert!(matches!(parse_import("[1, 2"), Err(StoreError::Json(_))));
        assert_eq!(
            StoreError::MissingWords.to_string(),
            "Invalid file: missing \"words\" array."
        );
    }

    #[test]
    fn failed_import_leaves_list_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "items": [] }"#).unwrap();

        let mut target = list(&["keep"]);
        assert!(import_from_file(&path, &mut target).is_err());
        assert_eq!(target, list(&["keep"]));
    }
}
