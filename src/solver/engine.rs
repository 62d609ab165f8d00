//! Main Wordle solver interface

use super::filter::filter_candidates;
use super::selector::{
    DISTINCT_LETTER_THRESHOLD, Selection, SelectionContext, select_guess, statistics,
};
use super::stats::{LetterStats, StatsCache};
use crate::core::{ConstraintState, Word};
use crate::error::SolverError;

/// Main Wordle solver
///
/// Holds the word lists and the statistics cache shared by every solve attempt.
pub struct Solver<'a> {
    dictionary: &'a [Word],
    playable: &'a [Word],
    cache: StatsCache,
    distinct_threshold: usize,
}

impl<'a> Solver<'a> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `dictionary`: every known word; letter statistics are computed over it
    /// - `playable`: words that may still be guessed (dictionary minus used words)
    #[must_use]
    pub fn new(dictionary: &'a [Word], playable: &'a [Word]) -> Self {
        Self {
            dictionary,
            playable,
            cache: StatsCache::new(),
            distinct_threshold: DISTINCT_LETTER_THRESHOLD,
        }
    }

    /// Replace the statistics cache
    #[must_use]
    pub fn with_cache(mut self, cache: StatsCache) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    #[must_use]
    pub const fn playable(&self) -> &'a [Word] {
        self.playable
    }

    #[must_use]
    pub const fn cache(&self) -> &StatsCache {
        &self.cache
    }

    #[must_use]
    pub const fn distinct_threshold(&self) -> usize {
        self.distinct_threshold
    }

    fn context<'c>(
        &self,
        constraints: &'c ConstraintState,
        guessed: &'c [Word],
    ) -> SelectionContext<'c, 'a>
    where
        'a: 'c,
    {
        SelectionContext {
            dictionary: self.dictionary,
            playable: self.playable,
            constraints,
            guessed,
            distinct_threshold: self.distinct_threshold,
        }
    }

    /// Choose the next guess for the given constraints and guess history
    ///
    /// # Errors
    /// Returns [`SolverError::NoCandidates`] when no playable word fits.
    pub fn select_guess(
        &self,
        constraints: &ConstraintState,
        guessed: &[Word],
    ) -> Result<Selection<'a>, SolverError> {
        select_guess(&self.context(constraints, guessed), &self.cache)
    }

    /// Letter statistics for the given state, through the cache
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyStatistics`] when no dictionary word fits.
    pub fn statistics(
        &self,
        constraints: &ConstraintState,
        guessed: &[Word],
    ) -> Result<LetterStats, SolverError> {
        statistics(&self.context(constraints, guessed), &self.cache)
    }

    /// Playable words consistent with the constraints
    #[must_use]
    pub fn candidates(&self, constraints: &ConstraintState, guessed: &[Word]) -> Vec<&'a Word> {
        filter_candidates(self.playable, guessed, constraints)
    }

    /// Count how many playable candidates remain
    #[must_use]
    pub fn count_candidates(&self, constraints: &ConstraintState, guessed: &[Word]) -> usize {
        self.candidates(constraints, guessed).len()
    }
}
