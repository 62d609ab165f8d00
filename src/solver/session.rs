//! Solve loop state machine
//!
//! A [`Session`] is one solve attempt: it owns the constraint state and guess
//! history, asks the solver for guesses and folds feedback back in. Both the
//! interactive driver and the simulation driver run through it.

use super::engine::Solver;
use super::selector::Selection;
use crate::core::{ConstraintState, Feedback, Word};
use crate::error::SolverError;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Guessing,
    /// Solved after `rounds` guesses, counting the final one
    Solved { rounds: usize },
}

/// One completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub feedback: Feedback,
    /// Candidates remaining when the guess was chosen
    pub remaining: usize,
}

/// One solve attempt
pub struct Session<'s, 'a> {
    solver: &'s Solver<'a>,
    constraints: ConstraintState,
    guessed: Vec<Word>,
    rounds: Vec<Round>,
    pending: Option<(Word, usize)>,
    undo_stack: Vec<ConstraintState>,
    state: SessionState,
}

impl<'s, 'a> Session<'s, 'a> {
    /// Fresh attempt: open constraints, empty history
    #[must_use]
    pub fn new(solver: &'s Solver<'a>) -> Self {
        Self {
            solver,
            constraints: ConstraintState::new(),
            guessed: Vec::new(),
            rounds: Vec::new(),
            pending: None,
            undo_stack: Vec::new(),
            state: SessionState::Guessing,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    /// Completed rounds, oldest first
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Every word guessed so far
    #[must_use]
    pub fn guessed(&self) -> &[Word] {
        &self.guessed
    }

    /// Guesses made so far, including one still awaiting feedback
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guessed.len()
    }

    /// Choose the next guess and record it in the history
    ///
    /// A previous guess that never received feedback is discarded first.
    ///
    /// # Errors
    /// - [`SolverError::AlreadySolved`] once the session is solved
    /// - [`SolverError::NoCandidates`] when the feedback cannot be satisfied
    pub fn next_guess(&mut self) -> Result<Selection<'a>, SolverError> {
        if matches!(self.state, SessionState::Solved { .. }) {
            return Err(SolverError::AlreadySolved);
        }
        self.discard_pending();

        let selection = self.solver.select_guess(&self.constraints, &self.guessed)?;
        self.guessed.push(selection.guess.clone());
        self.pending = Some((selection.guess.clone(), selection.remaining));
        Ok(selection)
    }

    /// Apply feedback for the pending guess
    ///
    /// # Errors
    /// Returns [`SolverError::NoPendingGuess`] if no guess is awaiting feedback.
    pub fn submit(&mut self, feedback: Feedback) -> Result<SessionState, SolverError> {
        let (guess, remaining) = self.pending.take().ok_or(SolverError::NoPendingGuess)?;

        if feedback.is_solved() {
            self.state = SessionState::Solved {
                rounds: self.guessed.len(),
            };
        } else {
            let next = self.constraints.apply_feedback(&guess, &feedback);
            self.undo_stack
                .push(std::mem::replace(&mut self.constraints, next));
        }

        self.rounds.push(Round {
            guess,
            feedback,
            remaining,
        });
        Ok(self.state)
    }

    /// Revert the most recent round
    ///
    /// Any pending guess is dropped as well. Returns `false` when there was no
    /// round to revert.
    pub fn undo(&mut self) -> bool {
        self.discard_pending();

        let Some(round) = self.rounds.pop() else {
            return false;
        };
        self.guessed.pop();

        if round.feedback.is_solved() {
            self.state = SessionState::Guessing;
        } else if let Some(previous) = self.undo_stack.pop() {
            self.constraints = previous;
        }
        true
    }

    /// Start over with a fresh attempt
    pub fn reset(&mut self) {
        *self = Self::new(self.solver);
    }

    fn discard_pending(&mut self) {
        if self.pending.take().is_some() {
            self.guessed.pop();
        }
    }
}

/// Record of one simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub secret: Word,
    pub rounds: Vec<Round>,
    pub solved: bool,
}

impl GameRecord {
    /// Number of guesses made, including the final one
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rounds.len()
    }
}

/// Play a full game against a known secret
///
/// Feedback is computed with [`Feedback::simulate`]. With `max_rounds` set,
/// play stops unsolved after that many guesses; otherwise it runs until solved.
///
/// # Errors
/// Returns [`SolverError::NoCandidates`] if the word list cannot explain the
/// feedback, e.g. when the secret is not a playable word.
pub fn play(
    solver: &Solver<'_>,
    secret: &Word,
    max_rounds: Option<usize>,
) -> Result<GameRecord, SolverError> {
    let mut session = Session::new(solver);

    while max_rounds.is_none_or(|limit| session.attempts() < limit) {
        let selection = session.next_guess()?;
        let feedback = Feedback::simulate(selection.guess, secret);
        if let SessionState::Solved { .. } = session.submit(feedback)? {
            break;
        }
    }

    Ok(GameRecord {
        secret: secret.clone(),
        solved: matches!(session.state(), SessionState::Solved { .. }),
        rounds: session.rounds,
    })
}
