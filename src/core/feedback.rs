//! Per-letter feedback for a guess
//!
//! Feedback is written as five symbols, one per guessed letter:
//! - `_` = letter not in word
//! - `#` = letter in word, wrong position
//! - `!` = letter in correct position

use super::Word;
use super::word::WORD_LENGTH;
use crate::error::FeedbackError;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Parse one feedback symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '_' => Some(Self::Absent),
            '#' => Some(Self::Present),
            '!' => Some(Self::Correct),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => '_',
            Self::Present => '#',
            Self::Correct => '!',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All letters in the correct position
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is in the correct position
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Compute the feedback `secret` gives for `guess`
    ///
    /// Each letter is judged on its own: an exact position match is `!`,
    /// otherwise any occurrence in the secret is `#`, otherwise `_`.
    /// Repeated letters are not counted against the secret.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// assert_eq!(Feedback::simulate(&guess, &secret).to_string(), "__!_!");
    /// ```
    #[must_use]
    pub fn simulate(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *mark = if letter == secret.char_at(i) {
                Mark::Correct
            } else if secret.has_letter(letter) {
                Mark::Present
            } else {
                Mark::Absent
            };
        }
        Self(marks)
    }

    /// Convert feedback to an emoji string like "⬜🟨🟩⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(symbols.len()));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (position, (&symbol, mark)) in symbols.iter().zip(marks.iter_mut()).enumerate() {
            *mark = Mark::from_symbol(symbol)
                .ok_or(FeedbackError::InvalidSymbol { symbol, position })?;
        }
        Ok(Self(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulate(guess: &str, secret: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        Feedback::simulate(&guess, &secret).to_string()
    }

    #[test]
    fn solved_constant() {
        assert!(Feedback::SOLVED.is_solved());
        assert_eq!(Feedback::SOLVED.to_string(), "!!!!!");
    }

    #[test]
    fn all_absent() {
        assert_eq!(simulate("abcde", "fghij"), "_____");
    }

    #[test]
    fn all_correct() {
        assert_eq!(simulate("crane", "crane"), "!!!!!");
    }

    #[test]
    fn crane_against_slate() {
        // C and R and N are absent, A and E are in place
        assert_eq!(simulate("crane", "slate"), "__!_!");
    }

    #[test]
    fn present_letters_are_not_counted() {
        // Both E's report present; letter counts in the secret are ignored
        assert_eq!(simulate("speed", "erase"), "#_##_");
        // ROBOT vs FLOOR: second O is in place, first O still present
        assert_eq!(simulate("robot", "floor"), "##_!_");
    }

    #[test]
    fn parse_valid() {
        let feedback: Feedback = "_#!__".parse().unwrap();
        assert_eq!(
            feedback.marks(),
            &[Mark::Absent, Mark::Present, Mark::Correct, Mark::Absent, Mark::Absent]
        );
        assert!(!feedback.is_solved());
        assert!("!!!!!".parse::<Feedback>().unwrap().is_solved());
    }

    #[test]
    fn parse_invalid_length() {
        assert_eq!(
            "!!!!".parse::<Feedback>(),
            Err(FeedbackError::InvalidLength(4))
        );
        assert_eq!(
            "!!!!!!".parse::<Feedback>(),
            Err(FeedbackError::InvalidLength(6))
        );
        assert_eq!("".parse::<Feedback>(), Err(FeedbackError::InvalidLength(0)));
    }

    #[test]
    fn parse_invalid_symbol() {
        assert_eq!(
            "__x__".parse::<Feedback>(),
            Err(FeedbackError::InvalidSymbol {
                symbol: 'x',
                position: 2
            })
        );
    }

    #[test]
    fn display_round_trips_symbols() {
        for text in ["_____", "#!_#!", "!!!!!"] {
            assert_eq!(text.parse::<Feedback>().unwrap().to_string(), text);
        }
    }

    #[test]
    fn emoji_rendering() {
        let feedback: Feedback = "_#!__".parse().unwrap();
        assert_eq!(feedback.to_emoji(), "⬜🟨🟩⬜⬜");
    }
}
