// Word-space size estimation: heuristic base length, length window,
// and order-of-magnitude counting by exponentiation.

use crate::params::{LengthWindow, TypeInventory, WordSpaceParameters};

/// Result of a space-size estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceEstimate {
    /// Heuristic word length the window was widened from.
    pub base_length: u32,
    /// The window of plausible lengths actually summed over.
    pub window: LengthWindow,
    /// Sum of `inventory.total() ^ L` over the window. An
    /// order-of-magnitude count, kept as `f64` because it routinely
    /// exceeds `u64`; rendering (exponential notation etc.) is up to the
    /// caller.
    pub total: f64,
}

/// Estimate a word length from the parameters.
///
/// Policy: the average of a syllable-driven estimate (1.5 characters per
/// syllable) and the raw symbol count, rounded up:
///
/// ```text
/// ceil((syllables * 1.5 + consonants + vowels) / 2)
/// ```
///
/// This is a heuristic, not a linguistic model. Earlier revisions of the
/// scheme used `consonants + vowels` alone, or
/// `max(syllables, consonants + vowels)`; the averaging form subsumes
/// both inputs and is the one supported form.
pub fn base_length(params: &WordSpaceParameters) -> u32 {
    let syllabic = f64::from(params.syllables) * 1.5;
    let raw = f64::from(params.consonants + params.vowels);
    ((syllabic + raw) / 2.0).ceil() as u32
}

/// Count the character sequences of plausible length, without generating
/// any.
///
/// Derives the length window from [`base_length`] and the tolerance, then
/// accumulates `inventory.total() ^ L` for each length `L` in the window.
/// Length 0 contributes nothing (there is exactly one empty string and it
/// is not a word), so a window entirely at zero yields `0.0`.
pub fn estimate_space_size(
    params: &WordSpaceParameters,
    inventory: &TypeInventory,
) -> SpaceEstimate {
    let base = base_length(params);
    let window = LengthWindow::around(base, params.tolerance);
    let types = f64::from(inventory.total());

    let mut total = 0.0;
    for length in window.lengths() {
        if length == 0 {
            continue;
        }
        total += types.powi(length as i32);
    }

    SpaceEstimate {
        base_length: base,
        window,
        total,
    }
}
