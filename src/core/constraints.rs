//! Accumulated knowledge from feedback within one solve attempt
//!
//! Tracks, for each position, which letters may still appear there, plus the
//! minimum number of times each confirmed letter must appear in the answer.

use super::word::WORD_LENGTH;
use super::{Feedback, LetterSet, Mark, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Snapshot of the per-position allowed letters, used as a statistics cache key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey([u32; WORD_LENGTH]);

/// Constraint state for one solve attempt
///
/// Constraints only tighten: every call to [`apply_feedback`](Self::apply_feedback)
/// returns a state whose allowed sets are subsets of the current ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    position_allowed: [LetterSet; WORD_LENGTH],
    required: FxHashMap<u8, usize>,
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintState {
    /// Fresh state: every letter allowed everywhere, nothing required
    #[must_use]
    pub fn new() -> Self {
        Self {
            position_allowed: [LetterSet::ALL; WORD_LENGTH],
            required: FxHashMap::default(),
        }
    }

    /// Letters still allowed at `position`
    #[inline]
    #[must_use]
    pub const fn allowed_at(&self, position: usize) -> LetterSet {
        self.position_allowed[position]
    }

    #[must_use]
    pub const fn position_allowed(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.position_allowed
    }

    /// Minimum number of occurrences required for `letter` (0 if unconstrained)
    #[must_use]
    pub fn min_count(&self, letter: u8) -> usize {
        self.required.get(&letter).copied().unwrap_or(0)
    }

    /// Required letters with their minimum counts, alphabetically
    #[must_use]
    pub fn required_letters(&self) -> Vec<(u8, usize)> {
        let mut letters: Vec<(u8, usize)> = self.required.iter().map(|(&l, &n)| (l, n)).collect();
        letters.sort_unstable();
        letters
    }

    /// Union of every position's allowed set
    #[must_use]
    pub fn available_letters(&self) -> LetterSet {
        self.position_allowed
            .iter()
            .fold(LetterSet::EMPTY, |acc, &set| acc.union(set))
    }

    #[must_use]
    pub const fn cache_key(&self) -> CacheKey {
        let mut bits = [0u32; WORD_LENGTH];
        let mut i = 0;
        while i < WORD_LENGTH {
            bits[i] = self.position_allowed[i].bits();
            i += 1;
        }
        CacheKey(bits)
    }

    /// Check every letter of `word` against its position's allowed set
    #[must_use]
    pub fn allows_positions(&self, word: &Word) -> bool {
        word.chars()
            .iter()
            .zip(&self.position_allowed)
            .all(|(&letter, allowed)| allowed.contains(letter))
    }

    /// Check that `word` contains every required letter at least once
    ///
    /// Only presence is enforced, not the minimum counts.
    #[must_use]
    pub fn has_required_letters(&self, word: &Word) -> bool {
        self.required.keys().all(|&letter| word.has_letter(letter))
    }

    /// Return the state after receiving `feedback` for `guess`
    ///
    /// - `_` removes the letter from every position, unless the same letter got
    ///   `#` or `!` elsewhere in this feedback, in which case only this
    ///   position loses it.
    /// - `#` removes the letter from this position and requires it.
    /// - `!` narrows this position to the letter and requires it.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{ConstraintState, Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let feedback: Feedback = "__!_!".parse().unwrap();
    /// let state = ConstraintState::new().apply_feedback(&guess, &feedback);
    ///
    /// assert_eq!(state.allowed_at(2).to_string(), "a");
    /// assert!(!state.allowed_at(0).contains(b'c'));
    /// assert_eq!(state.min_count(b'e'), 1);
    /// ```
    #[must_use]
    pub fn apply_feedback(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut next = self.clone();

        let mut confirmed: FxHashMap<u8, usize> = FxHashMap::default();
        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            if mark != Mark::Absent {
                *confirmed.entry(letter).or_insert(0) += 1;
            }
        }

        for (i, (&letter, &mark)) in guess.chars().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Correct => {
                    next.position_allowed[i] =
                        next.position_allowed[i].intersection(LetterSet::single(letter));
                }
                Mark::Present => next.position_allowed[i].remove(letter),
                Mark::Absent if confirmed.contains_key(&letter) => {
                    next.position_allowed[i].remove(letter);
                }
                Mark::Absent => {
                    for allowed in &mut next.position_allowed {
                        allowed.remove(letter);
                    }
                }
            }
        }

        for (letter, count) in confirmed {
            let min = next.required.entry(letter).or_insert(0);
            *min = (*min).max(count);
        }

        log::debug!("applied {feedback} for {guess}: {next}");
        next
    }

    /// True when some position has no letters left
    #[must_use]
    pub fn is_contradictory(&self) -> bool {
        self.position_allowed.iter().any(|set| set.is_empty())
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, allowed) in self.position_allowed.iter().enumerate() {
            if i > 0 {
                write!(f, "_")?;
            }
            write!(f, "{allowed}")?;
        }
        write!(f, " required[")?;
        for (letter, count) in self.required_letters() {
            write!(f, "{}", (letter as char).to_string().repeat(count))?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn feedback(text: &str) -> Feedback {
        text.parse().unwrap()
    }

    #[test]
    fn fresh_state_allows_everything() {
        let state = ConstraintState::new();
        for i in 0..WORD_LENGTH {
            assert_eq!(state.allowed_at(i), LetterSet::ALL);
        }
        assert!(state.required_letters().is_empty());
        assert_eq!(state.available_letters(), LetterSet::ALL);
        assert!(state.allows_positions(&word("zzzzz")));
    }

    #[test]
    fn crane_against_slate_narrows_state() {
        let guess = word("crane");
        let fb = Feedback::simulate(&guess, &word("slate"));
        assert_eq!(fb.to_string(), "__!_!");

        let state = ConstraintState::new().apply_feedback(&guess, &fb);

        for i in 0..WORD_LENGTH {
            let allowed = state.allowed_at(i);
            if i == 2 || i == 4 {
                continue;
            }
            assert!(!allowed.contains(b'c'));
            assert!(!allowed.contains(b'r'));
            assert!(!allowed.contains(b'n'));
            assert_eq!(allowed.len(), 23);
        }
        assert_eq!(state.allowed_at(2), LetterSet::single(b'a'));
        assert_eq!(state.allowed_at(4), LetterSet::single(b'e'));
        assert_eq!(state.required_letters(), vec![(b'a', 1), (b'e', 1)]);
        assert!(state.allows_positions(&word("slate")));
        assert!(!state.allows_positions(&word("crate")));
    }

    #[test]
    fn present_removes_only_its_slot() {
        let state = ConstraintState::new().apply_feedback(&word("crane"), &feedback("#____"));

        assert!(!state.allowed_at(0).contains(b'c'));
        for i in 1..WORD_LENGTH {
            assert!(state.allowed_at(i).contains(b'c'));
        }
        assert_eq!(state.min_count(b'c'), 1);
        assert!(state.has_required_letters(&word("stoic")));
        assert!(!state.has_required_letters(&word("stole")));
    }

    #[test]
    fn absent_and_present_same_letter_keeps_letter_elsewhere() {
        // First E absent, second E in place: E must not be wiped globally
        let state = ConstraintState::new().apply_feedback(&word("geese"), &feedback("_!__!"));

        assert!(!state.allowed_at(2).contains(b'e'));
        assert!(!state.allowed_at(3).contains(b's'));
        assert_eq!(state.allowed_at(1), LetterSet::single(b'e'));
        assert_eq!(state.allowed_at(4), LetterSet::single(b'e'));
        assert!(state.allowed_at(0).contains(b'e'));
        assert_eq!(state.min_count(b'e'), 2);
    }

    #[test]
    fn absent_after_correct_in_same_feedback_is_order_independent() {
        // Correct mark first, absent mark later for the same letter
        let state = ConstraintState::new().apply_feedback(&word("eerie"), &feedback("!____"));

        assert_eq!(state.allowed_at(0), LetterSet::single(b'e'));
        assert!(!state.allowed_at(1).contains(b'e'));
        assert!(state.allowed_at(3).contains(b'e'));
        assert!(!state.allowed_at(3).contains(b'i'));
        assert!(!state.is_contradictory());
    }

    #[test]
    fn required_counts_take_maximum_across_rounds() {
        let state = ConstraintState::new()
            .apply_feedback(&word("speed"), &feedback("__##_"))
            .apply_feedback(&word("eerie"), &feedback("#____"));

        assert_eq!(state.min_count(b'e'), 2);
    }

    #[test]
    fn correct_never_loosens_a_slot() {
        let state = ConstraintState::new()
            .apply_feedback(&word("crane"), &feedback("#____"))
            .apply_feedback(&word("cabin"), &feedback("!____"));

        // C was already ruled out of slot 0, so the slot is now empty
        assert!(state.allowed_at(0).is_empty());
        assert!(state.is_contradictory());
    }

    #[test]
    fn apply_feedback_leaves_original_untouched() {
        let original = ConstraintState::new();
        let _ = original.apply_feedback(&word("crane"), &feedback("_____"));
        assert_eq!(original, ConstraintState::new());
    }

    #[test]
    fn cache_key_tracks_positions_only() {
        let a = ConstraintState::new().apply_feedback(&word("crane"), &feedback("#____"));
        let b = ConstraintState::new().apply_feedback(&word("cxxxx"), &feedback("#____"));
        let a_again = ConstraintState::new().apply_feedback(&word("crane"), &feedback("#____"));
        assert_eq!(a.cache_key(), a_again.cache_key());
        assert_ne!(a.cache_key(), b.cache_key());

        // Same positions but different requirements share a key
        let mut required_only = ConstraintState::new();
        required_only.required.insert(b'q', 1);
        assert_eq!(required_only.cache_key(), ConstraintState::new().cache_key());
    }

    fn arb_word() -> impl Strategy<Value = Word> {
        "[a-z]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    fn arb_feedback() -> impl Strategy<Value = Feedback> {
        "[_#!]{5}".prop_map(|s| s.parse().unwrap())
    }

    proptest! {
        #[test]
        fn feedback_only_tightens(
            rounds in prop::collection::vec((arb_word(), arb_feedback()), 1..6)
        ) {
            let mut state = ConstraintState::new();
            for (guess, fb) in &rounds {
                let next = state.apply_feedback(guess, fb);
                for i in 0..WORD_LENGTH {
                    prop_assert!(next.allowed_at(i).is_subset(state.allowed_at(i)));
                }
                for (letter, count) in state.required_letters() {
                    prop_assert!(next.min_count(letter) >= count);
                }
                state = next;
            }
        }

        #[test]
        fn simulated_feedback_keeps_secret_allowed(guess in arb_word(), secret in arb_word()) {
            let fb = Feedback::simulate(&guess, &secret);
            let state = ConstraintState::new().apply_feedback(&guess, &fb);
            prop_assert!(state.allows_positions(&secret));
            prop_assert!(state.has_required_letters(&secret));
        }
    }
}
