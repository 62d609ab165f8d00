//! Wordle solving
//!
//! Candidate filtering, letter statistics, guess selection and the solve loop.

mod engine;
pub mod filter;
pub mod selector;
pub mod session;
pub mod stats;

pub use engine::Solver;
pub use filter::filter_candidates;
pub use selector::{DISTINCT_LETTER_THRESHOLD, ScoredWord, Selection};
pub use session::{GameRecord, Round, Session, SessionState, play};
pub use stats::{CacheStats, LetterStats, StatsCache};
