//! Word list loading utilities
//!
//! Word lists are newline separated. Lines are trimmed and lowercased, blank
//! lines are skipped, anything that is not five letters is skipped with a
//! warning, and duplicates keep their first position.

use crate::core::Word;
use crate::error::WordListError;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Parse word list text
///
/// # Examples
/// ```
/// use wordle_solver::wordlists::loader::parse_words;
///
/// let words = parse_words("Crane\n\nslate\ncrane\ntoolong\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut seen: FxHashSet<Word> = FxHashSet::default();
    let mut words = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) => {
                if seen.insert(word.clone()) {
                    words.push(word);
                }
            }
            Err(e) => log::warn!("skipping line {}: {trimmed:?} ({e})", number + 1),
        }
    }

    words
}

/// Load words from a file
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load a dictionary, which must contain at least one word
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read and
/// [`WordListError::Empty`] if it holds no valid words.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let words = load_from_file(&path)?;
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.as_ref().to_path_buf(),
        });
    }
    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "abc"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Dictionary words that are not in `used`, in dictionary order
#[must_use]
pub fn playable_words(dictionary: &[Word], used: &[Word]) -> Vec<Word> {
    let used: FxHashSet<&Word> = used.iter().collect();
    dictionary
        .iter()
        .filter(|word| !used.contains(word))
        .cloned()
        .collect()
}
