//! Word analysis command
//!
//! Breaks a word's opening score down into per-letter contributions.

use crate::core::{ConstraintState, WORD_LENGTH, Word};
use crate::error::SolverError;
use crate::solver::Solver;
use crate::solver::selector::{rank, scoring_pool};

/// One letter's share of a word's score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterContribution {
    pub letter: char,
    pub letter_frequency: f64,
    pub position_frequency: f64,
    pub contribution: f64,
}

/// Result of analyzing a word
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub word: String,
    pub score: f64,
    pub contributions: [LetterContribution; WORD_LENGTH],
    /// 1-based rank among the scored words, `None` if the word is not scored
    pub rank: Option<usize>,
    /// Words scored on the first guess
    pub pool_size: usize,
    pub total_candidates: usize,
    pub distinct_letters: bool,
    /// Not excluded as an already used word
    pub playable: bool,
}

impl AnalysisResult {
    /// Why the word got no rank, or `None` if it was ranked
    #[must_use]
    pub const fn unranked_reason(&self) -> Option<&'static str> {
        if self.rank.is_some() {
            None
        } else if !self.playable {
            Some("already used")
        } else {
            Some("repeated letters are skipped on large pools")
        }
    }
}

/// Analyze how a word scores as an opening guess
///
/// # Errors
///
/// - [`SolverError::Word`] if the word is not five letters
/// - [`SolverError::UnknownWord`] if it is not in the dictionary
pub fn analyze_word(word: &str, solver: &Solver<'_>) -> Result<AnalysisResult, SolverError> {
    let word = Word::new(word)?;
    if !solver.dictionary().contains(&word) {
        return Err(SolverError::UnknownWord(word.text().to_string()));
    }

    let state = ConstraintState::new();
    let stats = solver.statistics(&state, &[])?;

    let contributions = std::array::from_fn(|position| {
        let letter = word.char_at(position);
        LetterContribution {
            letter: char::from(letter),
            letter_frequency: stats.letter_frequency(letter),
            position_frequency: stats.position_frequency(position, letter),
            contribution: stats.contribution(position, letter),
        }
    });

    let candidates = solver.candidates(&state, &[]);
    let pool = scoring_pool(&candidates, solver.distinct_threshold());
    let ranked = rank(&pool, &stats);
    let rank = ranked
        .iter()
        .position(|scored| *scored.word == word)
        .map(|index| index + 1);

    Ok(AnalysisResult {
        score: stats.score(&word),
        contributions,
        rank,
        pool_size: pool.len(),
        total_candidates: candidates.len(),
        distinct_letters: word.has_distinct_letters(),
        playable: solver.playable().contains(&word),
        word: word.text().to_string(),
    })
}
