//! Wordle Solver
//!
//! A greedy Wordle solver. Each round it keeps the words consistent with the
//! feedback so far and guesses the one whose letters are most common, weighted
//! by how often each letter appears in that position.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_solver::core::{ConstraintState, Feedback, Word};
//! use wordle_solver::solver::Solver;
//! use wordle_solver::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["crane", "slate", "irate", "ghost"]);
//! let solver = Solver::new(&words, &words);
//!
//! let selection = solver.select_guess(&ConstraintState::new(), &[]).unwrap();
//! let secret = Word::new("ghost").unwrap();
//! let feedback = Feedback::simulate(selection.guess, &secret);
//!
//! let state = ConstraintState::new().apply_feedback(selection.guess, &feedback);
//! let remaining = solver.candidates(&state, &[]);
//! assert!(remaining.iter().any(|w| w.text() == "ghost"));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Filtering, statistics and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
