//! Letter frequency statistics over a candidate set
//!
//! Two tables drive scoring:
//! - letter frequency: fraction of candidates containing the letter at least once
//! - position frequency: fraction of candidates with the letter at a given position
//!
//! Only letters that are still allowed somewhere are counted; every other entry is 0.

use crate::core::{CacheKey, LetterSet, WORD_LENGTH, Word};
use crate::error::SolverError;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

const ALPHABET: usize = 26;

#[inline]
const fn index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Letter and position frequencies for one candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterStats {
    letters: LetterSet,
    letter_freq: [f64; ALPHABET],
    position_freq: [[f64; ALPHABET]; WORD_LENGTH],
    candidates: usize,
}

impl LetterStats {
    /// Compute both frequency tables over `candidates`, restricted to `letters`
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyStatistics`] when `candidates` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{LetterSet, Word};
    /// use wordle_solver::solver::LetterStats;
    ///
    /// let words: Vec<Word> = ["apple", "angle", "ankle"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let refs: Vec<&Word> = words.iter().collect();
    ///
    /// let stats = LetterStats::compute(&refs, LetterSet::ALL).unwrap();
    /// assert_eq!(stats.letter_frequency(b'a'), 1.0);
    /// assert!((stats.letter_frequency(b'p') - 1.0 / 3.0).abs() < 1e-12);
    /// ```
    pub fn compute(candidates: &[&Word], letters: LetterSet) -> Result<Self, SolverError> {
        if candidates.is_empty() {
            return Err(SolverError::EmptyStatistics);
        }

        let mut contains = [0usize; ALPHABET];
        let mut at_position = [[0usize; ALPHABET]; WORD_LENGTH];

        for word in candidates {
            let mut seen = LetterSet::EMPTY;
            for (position, &letter) in word.chars().iter().enumerate() {
                if !letters.contains(letter) {
                    continue;
                }
                at_position[position][index(letter)] += 1;
                if !seen.contains(letter) {
                    seen.insert(letter);
                    contains[index(letter)] += 1;
                }
            }
        }

        let total = candidates.len() as f64;
        let mut letter_freq = [0.0; ALPHABET];
        let mut position_freq = [[0.0; ALPHABET]; WORD_LENGTH];
        for letter in letters.iter() {
            let i = index(letter);
            letter_freq[i] = contains[i] as f64 / total;
            for position in 0..WORD_LENGTH {
                position_freq[position][i] = at_position[position][i] as f64 / total;
            }
        }

        Ok(Self {
            letters,
            letter_freq,
            position_freq,
            candidates: candidates.len(),
        })
    }

    /// Fraction of candidates containing `letter`
    #[inline]
    #[must_use]
    pub const fn letter_frequency(&self, letter: u8) -> f64 {
        self.letter_freq[index(letter)]
    }

    /// Fraction of candidates with `letter` at `position`
    #[inline]
    #[must_use]
    pub const fn position_frequency(&self, position: usize, letter: u8) -> f64 {
        self.position_freq[position][index(letter)]
    }

    /// Score contribution of `letter` placed at `position`
    #[inline]
    #[must_use]
    pub fn contribution(&self, position: usize, letter: u8) -> f64 {
        self.letter_frequency(letter) * self.position_frequency(position, letter)
    }

    /// Heuristic score: sum of letter frequency times position frequency
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.contribution(position, letter))
            .sum()
    }

    /// Letters the tables were computed for
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Size of the candidate set the tables were computed from
    #[must_use]
    pub const fn candidates(&self) -> usize {
        self.candidates
    }

    /// Letter frequencies as a map over the counted letters
    #[must_use]
    pub fn letter_frequencies(&self) -> FxHashMap<u8, f64> {
        self.letters
            .iter()
            .map(|letter| (letter, self.letter_frequency(letter)))
            .collect()
    }

    /// Position frequencies as one map per position
    #[must_use]
    pub fn position_frequencies(&self) -> [FxHashMap<u8, f64>; WORD_LENGTH] {
        std::array::from_fn(|position| {
            self.letters
                .iter()
                .map(|letter| (letter, self.position_frequency(position, letter)))
                .collect()
        })
    }
}

/// Hit/miss counters for a [`StatsCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: usize,
    pub misses: usize,
}

/// Memoized letter statistics keyed by the per-position allowed letters
///
/// The key ignores required letters and guess history, so a hit may return
/// statistics computed for a slightly different candidate set. Entries are
/// never evicted and the map grows for as long as the cache lives. The map is
/// behind a mutex so one cache can be shared by concurrent solves.
#[derive(Debug)]
pub struct StatsCache {
    entries: Option<Mutex<FxHashMap<CacheKey, LetterStats>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsCache {
    /// Empty, enabled cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Some(Mutex::new(FxHashMap::default())),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// A cache that never stores anything; statistics are recomputed every time
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            entries: None,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    /// Return the cached statistics for `key`, computing and storing them on a miss
    ///
    /// The lock is not held while computing; if two callers race on the same
    /// key, the first stored value wins.
    ///
    /// # Errors
    /// Propagates the error from `compute`.
    pub fn get_or_compute<F>(&self, key: CacheKey, compute: F) -> Result<LetterStats, SolverError>
    where
        F: FnOnce() -> Result<LetterStats, SolverError>,
    {
        let Some(entries) = &self.entries else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return compute();
        };

        if let Some(stats) = entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::trace!("stats cache hit for {key:?}");
            return Ok(*stats);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        log::trace!("stats cache miss for {key:?}");
        let stats = compute()?;

        Ok(*entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(stats))
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| {
            entries.lock().unwrap_or_else(PoisonError::into_inner).len()
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConstraintState, Feedback};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn letter_frequency_counts_words_not_occurrences() {
        let list = words(&["apple", "angle", "ankle"]);
        let refs: Vec<&Word> = list.iter().collect();
        let stats = LetterStats::compute(&refs, LetterSet::ALL).unwrap();

        assert!(approx(stats.letter_frequency(b'a'), 1.0));
        assert!(approx(stats.letter_frequency(b'p'), 1.0 / 3.0));
        assert!(approx(stats.letter_frequency(b'l'), 1.0));
        assert!(approx(stats.letter_frequency(b'z'), 0.0));
        assert_eq!(stats.candidates(), 3);
    }

    #[test]
    fn position_frequency_per_slot() {
        let list = words(&["apple", "angle", "ankle"]);
        let refs: Vec<&Word> = list.iter().collect();
        let stats = LetterStats::compute(&refs, LetterSet::ALL).unwrap();

        assert!(approx(stats.position_frequency(0, b'a'), 1.0));
        assert!(approx(stats.position_frequency(1, b'n'), 2.0 / 3.0));
        assert!(approx(stats.position_frequency(1, b'p'), 1.0 / 3.0));
        assert!(approx(stats.position_frequency(2, b'p'), 1.0 / 3.0));
        assert!(approx(stats.position_frequency(4, b'e'), 1.0));
        assert!(approx(stats.position_frequency(0, b'e'), 0.0));
    }

    #[test]
    fn eliminated_letters_are_skipped() {
        let list = words(&["apple", "angle", "ankle"]);
        let refs: Vec<&Word> = list.iter().collect();
        let mut letters = LetterSet::ALL;
        letters.remove(b'p');

        let stats = LetterStats::compute(&refs, letters).unwrap();
        assert!(approx(stats.letter_frequency(b'p'), 0.0));
        assert!(approx(stats.position_frequency(1, b'p'), 0.0));
        assert!(!stats.letter_frequencies().contains_key(&b'p'));
        assert!(approx(stats.letter_frequency(b'a'), 1.0));
    }

    #[test]
    fn empty_candidates_fail_fast() {
        assert_eq!(
            LetterStats::compute(&[], LetterSet::ALL),
            Err(SolverError::EmptyStatistics)
        );
    }

    #[test]
    fn score_sums_contributions() {
        let list = words(&["apple", "angle", "ankle"]);
        let refs: Vec<&Word> = list.iter().collect();
        let stats = LetterStats::compute(&refs, LetterSet::ALL).unwrap();

        // a:1*1 + n:(2/3)*(2/3) + g:(1/3)*(1/3) + l:1*1 + e:1*1
        let expected = 1.0 + 4.0 / 9.0 + 1.0 / 9.0 + 1.0 + 1.0;
        assert!(approx(stats.score(&list[1]), expected));
    }

    #[test]
    fn map_views_match_tables() {
        let list = words(&["crane", "slate"]);
        let refs: Vec<&Word> = list.iter().collect();
        let stats = LetterStats::compute(&refs, LetterSet::ALL).unwrap();

        let letter_map = stats.letter_frequencies();
        assert_eq!(letter_map.len(), 26);
        assert!(approx(letter_map[&b'e'], 1.0));

        let position_maps = stats.position_frequencies();
        assert!(approx(position_maps[2][&b'a'], 1.0));
        assert!(approx(position_maps[0][&b'c'], 0.5));
    }

    #[test]
    fn cache_returns_stored_value_for_same_key() {
        let list = words(&["apple", "angle", "ankle"]);
        let refs: Vec<&Word> = list.iter().collect();
        let cache = StatsCache::new();
        let key = ConstraintState::new().cache_key();

        let first = cache
            .get_or_compute(key, || LetterStats::compute(&refs, LetterSet::ALL))
            .unwrap();
        // Different candidates, same key: the stored value is returned
        let second = cache
            .get_or_compute(key, || LetterStats::compute(&refs[..1], LetterSet::ALL))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 1,
                hits: 1,
                misses: 1
            }
        );
    }

    #[test]
    fn cache_distinguishes_position_states() {
        let list = words(&["apple", "angle", "ankle"]);
        let refs: Vec<&Word> = list.iter().collect();
        let cache = StatsCache::new();

        let open = ConstraintState::new();
        let narrowed = open.apply_feedback(
            &Word::new("zzzzz").unwrap(),
            &"_____".parse::<Feedback>().unwrap(),
        );

        for state in [&open, &narrowed] {
            cache
                .get_or_compute(state.cache_key(), || {
                    LetterStats::compute(&refs, state.available_letters())
                })
                .unwrap();
        }
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn disabled_cache_always_recomputes() {
        let list = words(&["apple", "angle"]);
        let refs: Vec<&Word> = list.iter().collect();
        let cache = StatsCache::disabled();
        let key = ConstraintState::new().cache_key();

        let full = cache
            .get_or_compute(key, || LetterStats::compute(&refs, LetterSet::ALL))
            .unwrap();
        let partial = cache
            .get_or_compute(key, || LetterStats::compute(&refs[..1], LetterSet::ALL))
            .unwrap();

        assert_ne!(full, partial);
        assert!(cache.is_empty());
        assert!(!cache.is_enabled());
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn cache_does_not_store_errors() {
        let cache = StatsCache::new();
        let key = ConstraintState::new().cache_key();

        let result = cache.get_or_compute(key, || LetterStats::compute(&[], LetterSet::ALL));
        assert_eq!(result, Err(SolverError::EmptyStatistics));
        assert!(cache.is_empty());
    }
}
