//! Core domain types for Wordle
//!
//! Words, letter sets, per-letter feedback and the constraint state built from it.
//! Everything here is pure and independent of the solving strategy.

mod constraints;
mod feedback;
mod letters;
mod word;

pub use constraints::{CacheKey, ConstraintState};
pub use feedback::{Feedback, Mark};
pub use letters::LetterSet;
pub use word::{WORD_LENGTH, Word};
