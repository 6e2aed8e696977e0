//! Wordle Assistant
//!
//! A constraint solver for Wordle: classifies guesses against a secret,
//! filters the answer vocabulary down to words consistent with every piece
//! of feedback, and ranks the survivors by letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::core::{Word, classify};
//! use wordle_assistant::solver::Solver;
//! use wordle_assistant::wordlists::EmbeddedSource;
//!
//! let secret = Word::new("erase").unwrap();
//! let guess = Word::new("eerie").unwrap();
//! assert_eq!(classify(&secret, &guess).to_string(), "G-Y-G");
//!
//! let mut solver = Solver::new();
//! solver.initialize(&EmbeddedSource).unwrap();
//! solver.add_guess_str("slate", "-----").unwrap();
//! let result = solver.suggest(5).unwrap();
//! println!("{}: {:?}", result.message, result.suggestions);
//! ```

// Core domain types
pub mod core;

// Filtering and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
