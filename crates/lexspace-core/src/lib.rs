//! Shared primitives for the lexspace word-space estimator.
//!
//! This crate holds the leaf utilities that the higher-level estimation and
//! enumeration logic builds on:
//!
//! - [`distance`] -- Levenshtein edit distance between strings
//! - [`alphabet`] -- fixed consonant/vowel symbol inventories and alphabets
//!   drawn from them

pub mod alphabet;
pub mod distance;

pub use alphabet::{Alphabet, AlphabetError, SymbolClass};
pub use distance::edit_distance;
