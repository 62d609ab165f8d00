//! Frequency-score guess selection
//!
//! Scores every candidate by letter and position frequency and picks the best.
//! This is a greedy one-step heuristic; it never looks at future feedback.

use super::filter::filter_candidates;
use super::stats::{LetterStats, StatsCache};
use crate::core::{ConstraintState, Word};
use crate::error::SolverError;
use rayon::prelude::*;

/// Above this many candidates, only words without repeated letters are scored
pub const DISTINCT_LETTER_THRESHOLD: usize = 100;

/// How many top-scoring words a [`Selection`] reports
pub const TOP_WORDS: usize = 3;

/// A word paired with its heuristic score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Outcome of choosing a guess
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    /// Chosen guess
    pub guess: &'a Word,
    /// Its score
    pub score: f64,
    /// Candidates consistent with the feedback so far
    pub remaining: usize,
    /// Words actually scored (after the distinct-letter restriction)
    pub pool_size: usize,
    /// Best scored words, highest first
    pub top: Vec<ScoredWord<'a>>,
}

/// Inputs to [`select_guess`]
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'c, 'a> {
    /// Words the statistics are computed over
    pub dictionary: &'c [Word],
    /// Words eligible to be guessed
    pub playable: &'a [Word],
    pub constraints: &'c ConstraintState,
    pub guessed: &'c [Word],
    pub distinct_threshold: usize,
}

/// Restrict a large pool to words without repeated letters
///
/// Pools of at most `threshold` words are returned unchanged. If no word in a
/// large pool has distinct letters, the whole pool is kept.
#[must_use]
pub fn scoring_pool<'a>(candidates: &[&'a Word], threshold: usize) -> Vec<&'a Word> {
    if candidates.len() <= threshold {
        return candidates.to_vec();
    }

    let distinct: Vec<&'a Word> = candidates
        .iter()
        .copied()
        .filter(|word| word.has_distinct_letters())
        .collect();

    if distinct.is_empty() {
        log::warn!(
            "none of {} candidates has distinct letters, scoring all of them",
            candidates.len()
        );
        return candidates.to_vec();
    }
    distinct
}

/// Score `pool` and order it best first
///
/// The sort is stable, so equal scores keep word list order and the earliest
/// word wins ties.
#[must_use]
pub fn rank<'a>(pool: &[&'a Word], stats: &LetterStats) -> Vec<ScoredWord<'a>> {
    let mut ranked: Vec<ScoredWord<'a>> = pool
        .par_iter()
        .map(|&word| ScoredWord {
            word,
            score: stats.score(word),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Letter statistics for the context's position state
///
/// Served from `cache` when possible, otherwise computed over the dictionary
/// words that fit the constraints.
///
/// # Errors
/// Returns [`SolverError::EmptyStatistics`] when no dictionary word fits.
pub fn statistics(
    ctx: &SelectionContext<'_, '_>,
    cache: &StatsCache,
) -> Result<LetterStats, SolverError> {
    cache.get_or_compute(ctx.constraints.cache_key(), || {
        let source = filter_candidates(ctx.dictionary, ctx.guessed, ctx.constraints);
        LetterStats::compute(&source, ctx.constraints.available_letters())
    })
}

/// Choose the next guess
///
/// 1. Filter the playable words down to candidates.
/// 2. Fetch letter statistics for the current position state from `cache`,
///    computing them over the matching dictionary words on a miss.
/// 3. Drop words with repeated letters from large pools.
/// 4. Return the best scored word.
///
/// # Errors
/// Returns [`SolverError::NoCandidates`] when no playable word fits the
/// feedback so far.
pub fn select_guess<'a>(
    ctx: &SelectionContext<'_, 'a>,
    cache: &StatsCache,
) -> Result<Selection<'a>, SolverError> {
    let candidates = filter_candidates(ctx.playable, ctx.guessed, ctx.constraints);
    if candidates.is_empty() {
        return Err(SolverError::NoCandidates);
    }

    let stats = statistics(ctx, cache)?;

    let pool = scoring_pool(&candidates, ctx.distinct_threshold);
    let mut ranked = rank(&pool, &stats);
    ranked.truncate(TOP_WORDS);

    let best = *ranked.first().ok_or(SolverError::NoCandidates)?;
    log::debug!(
        "{} candidates, {} scored, chose {} ({:.4})",
        candidates.len(),
        pool.len(),
        best.word,
        best.score
    );

    Ok(Selection {
        guess: best.word,
        score: best.score,
        remaining: candidates.len(),
        pool_size: pool.len(),
        top: ranked,
    })
}
