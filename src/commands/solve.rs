//! Word solving command
//!
//! Plays the solver against a known target and records the path it took.

use super::MAX_SUCCESSFUL_ATTEMPTS;
use crate::core::{Feedback, Word};
use crate::error::SolverError;
use crate::solver::{Session, SessionState, Solver};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Stop unsolved after this many guesses; `None` plays until solved
    pub max_guesses: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: None,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Solved within [`MAX_SUCCESSFUL_ATTEMPTS`] guesses
    pub success: bool,
    pub solved: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

impl SolveResult {
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Best scored words when this guess was chosen
    pub top: Vec<(String, f64)>,
}

/// Solve a specific word with the given solver
///
/// # Errors
///
/// - [`SolverError::Word`] if the target is not a valid five-letter word
/// - [`SolverError::NoCandidates`] if the target is not in the playable list
pub fn solve_word(config: SolveConfig, solver: &Solver<'_>) -> Result<SolveResult, SolverError> {
    let target = Word::new(&config.target)?;
    let mut session = Session::new(solver);
    let mut guesses = Vec::new();

    while config
        .max_guesses
        .is_none_or(|limit| session.attempts() < limit)
    {
        let selection = session.next_guess()?;
        let guess = selection.guess;
        let feedback = Feedback::simulate(guess, &target);

        let state = session.submit(feedback)?;
        let candidates_after = match state {
            SessionState::Solved { .. } => 1,
            SessionState::Guessing => {
                solver.count_candidates(session.constraints(), session.guessed())
            }
        };

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            score: selection.score,
            candidates_before: selection.remaining,
            candidates_after,
            top: selection
                .top
                .iter()
                .map(|scored| (scored.word.text().to_string(), scored.score))
                .collect(),
        });

        if let SessionState::Solved { .. } = state {
            break;
        }
    }

    let solved = matches!(session.state(), SessionState::Solved { .. });
    Ok(SolveResult {
        success: solved && guesses.len() <= MAX_SUCCESSFUL_ATTEMPTS,
        solved,
        guesses,
        target: target.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "plate", "spelt", "knelt", "ghost", "apple",
        "angle", "ankle",
    ];

    #[test]
    fn solve_word_succeeds() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(&words, &words);

        let result = solve_word(SolveConfig::new("ghost".to_string()), &solver).unwrap();

        assert!(result.solved);
        assert_eq!(result.guesses.last().unwrap().word, "ghost");
        assert!(result.guesses.last().unwrap().feedback.is_solved());
        assert_eq!(result.target, "ghost");
    }

    #[test]
    fn solve_records_history() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(&words, &words);

        let result = solve_word(SolveConfig::new("knelt".to_string()), &solver).unwrap();

        assert!(!result.guesses.is_empty());
        assert_eq!(result.guesses[0].candidates_before, words.len());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(!step.top.is_empty());
        }
    }

    #[test]
    fn solve_normalizes_case() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(&words, &words);

        let result = solve_word(SolveConfig::new("GHOST".to_string()), &solver).unwrap();
        assert_eq!(result.target, "ghost");
        assert!(result.solved);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(&words, &words);

        let result = solve_word(SolveConfig::new("toolong".to_string()), &solver);
        assert!(matches!(result, Err(SolverError::Word(_))));
    }

    #[test]
    fn solve_unknown_target_runs_out_of_candidates() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(&words, &words);

        let result = solve_word(SolveConfig::new("zzzzz".to_string()), &solver);
        assert!(matches!(result, Err(SolverError::NoCandidates)));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(&words, &words);
        let first = solver
            .select_guess(&crate::core::ConstraintState::new(), &[])
            .unwrap()
            .guess
            .text()
            .to_string();
        let target = WORDS.iter().find(|w| **w != first).unwrap();

        let mut config = SolveConfig::new((*target).to_string());
        config.max_guesses = Some(1);
        let result = solve_word(config, &solver).unwrap();

        assert_eq!(result.attempts(), 1);
        assert!(!result.solved);
        assert!(!result.success);
    }

    #[test]
    fn solve_perfect_first_guess() {
        let words = words_from_slice(&["crane"]);
        let solver = Solver::new(&words, &words);

        let result = solve_word(SolveConfig::new("crane".to_string()), &solver).unwrap();
        assert!(result.success);
        assert_eq!(result.attempts(), 1);
        assert_eq!(result.guesses[0].candidates_after, 1);
    }
}
