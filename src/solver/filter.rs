//! Candidate filtering
//!
//! Narrows a word list to the words consistent with every piece of feedback so far.

use crate::core::{ConstraintState, Word};

/// Check whether `word` is still a valid guess
///
/// A word qualifies when it has not been guessed yet, every letter is allowed
/// at its position, and every required letter appears at least once.
#[must_use]
pub fn is_candidate(word: &Word, guessed: &[Word], constraints: &ConstraintState) -> bool {
    !guessed.contains(word)
        && constraints.allows_positions(word)
        && constraints.has_required_letters(word)
}

/// Filter `words` down to the candidates, keeping word list order
///
/// Returns an empty vector when nothing qualifies; callers treat that as an
/// unsatisfiable state.
///
/// # Examples
/// ```
/// use wordle_solver::core::{ConstraintState, Feedback, Word};
/// use wordle_solver::solver::filter_candidates;
///
/// let words: Vec<Word> = ["crane", "slate", "plate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
/// let feedback: Feedback = "__!_!".parse().unwrap();
/// let state = ConstraintState::new().apply_feedback(&guess, &feedback);
///
/// let candidates = filter_candidates(&words, &[guess], &state);
/// assert_eq!(candidates.len(), 2);
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    words: &'a [Word],
    guessed: &[Word],
    constraints: &ConstraintState,
) -> Vec<&'a Word> {
    words
        .iter()
        .filter(|word| is_candidate(word, guessed, constraints))
        .collect()
}
