//! Combinatorial word-space estimation for constructed languages.
//!
//! Given small integer parameters describing a word-generation scheme
//! (consonant and vowel counts, syllable count, an edit-distance
//! tolerance), this crate answers two questions:
//!
//! - **Estimation**: roughly how many character sequences of plausible
//!   length exist? Computed by widening a heuristic word length into a
//!   window and summing `typeCount ^ length` over it; no words are ever
//!   generated.
//! - **Enumeration**: exactly how many consonant-vowel syllable words fall
//!   within a given Levenshtein distance of a reference word? Computed by
//!   exhaustively generating the candidate set (behind a combinatorial
//!   guard) and classifying every candidate.
//!
//! # Architecture
//!
//! - [`params`] -- input value types, type inventory, length window
//! - [`estimate`] -- base-length heuristic and space-size summation
//! - [`generate`] -- CV-word enumeration with the combinatorial guard
//! - [`partition`] -- per-candidate distance classification
//! - [`handle`] -- [`WordSpace`](handle::WordSpace), the validated entry
//!   point callers should use
//!
//! Everything is pure and synchronous; no state survives a call.

pub mod estimate;
pub mod generate;
pub mod handle;
pub mod params;
pub mod partition;

pub use handle::WordSpace;

/// Error type for word-space computations.
///
/// Every condition is detected before expensive work starts; none are
/// transient, so retrying with unchanged inputs reproduces the error.
#[derive(Debug, thiserror::Error)]
pub enum SpaceError {
    /// A numeric input violates its stated bound.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    /// The reference word is empty or whitespace-only.
    #[error("reference word is empty")]
    EmptyReference,

    /// The Cartesian product would exceed the configured safety limit.
    ///
    /// Expected, recoverable refusal: generation is skipped, never
    /// truncated. `expected` saturates at `u128::MAX` when the true count
    /// does not fit in 128 bits.
    #[error("expected {expected} combinations, limit is {limit}")]
    CombinationLimitExceeded { expected: u128, limit: u64 },

    /// An alphabet could not be drawn from the fixed inventories.
    #[error(transparent)]
    Alphabet(#[from] lexspace_core::AlphabetError),
}
