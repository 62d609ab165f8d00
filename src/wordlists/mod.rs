//! Word lists for Wordle solving
//!
//! Two files are read: the full dictionary and a list of already used answers.
//! Used words stay in the dictionary for statistics but are never guessed.

pub mod loader;

use crate::core::Word;
use crate::error::WordListError;
use std::path::Path;

/// Default dictionary file
pub const DEFAULT_WORDS_PATH: &str = "words.txt";

/// Default used-words file
pub const DEFAULT_USED_PATH: &str = "usedwords.txt";

/// The dictionary together with the words that may still be played
#[derive(Debug, Clone)]
pub struct WordLists {
    pub dictionary: Vec<Word>,
    pub used: Vec<Word>,
    pub playable: Vec<Word>,
}

impl WordLists {
    /// Build from already loaded lists
    #[must_use]
    pub fn new(dictionary: Vec<Word>, used: Vec<Word>) -> Self {
        let playable = loader::playable_words(&dictionary, &used);
        Self {
            dictionary,
            used,
            playable,
        }
    }

    /// Load the dictionary and the used-words list
    ///
    /// When `used_path` is `None`, [`DEFAULT_USED_PATH`] is read if it exists;
    /// otherwise no words are excluded.
    ///
    /// # Errors
    ///
    /// Fails if the dictionary is unreadable or empty, or if an explicitly
    /// given used-words file is unreadable.
    pub fn load(words_path: &Path, used_path: Option<&Path>) -> Result<Self, WordListError> {
        let dictionary = loader::load_dictionary(words_path)?;

        let used = match used_path {
            Some(path) => loader::load_from_file(path)?,
            None if Path::new(DEFAULT_USED_PATH).exists() => {
                loader::load_from_file(DEFAULT_USED_PATH)?
            }
            None => {
                log::warn!("{DEFAULT_USED_PATH} not found, no words are excluded");
                Vec::new()
            }
        };

        Ok(Self::new(dictionary, used))
    }
}
