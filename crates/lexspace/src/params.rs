// Input value types shared by the estimator and the enumerator.
//
// All of these are transient: constructed per calculation from caller
// input, discarded after use. Validation lives in the handle so that it
// runs exactly once, before any computation.

/// Parameters for estimator mode.
///
/// `consonants` and `vowels` count symbols in a hypothetical word;
/// `syllables` counts its syllables; `tolerance` widens the estimated
/// length into a window in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpaceParameters {
    pub consonants: u32,
    pub vowels: u32,
    pub syllables: u32,
    pub tolerance: u32,
}

/// The assumed phoneme inventory: how many distinct symbol types exist
/// per class. Only the totals matter for estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInventory {
    pub consonant_types: u32,
    pub vowel_types: u32,
}

impl TypeInventory {
    /// Total number of distinct symbol types across both classes.
    pub fn total(&self) -> u32 {
        self.consonant_types + self.vowel_types
    }
}

impl Default for TypeInventory {
    /// 20 consonants and 5 vowels, a typical small phoneme inventory.
    fn default() -> Self {
        TypeInventory {
            consonant_types: 20,
            vowel_types: 5,
        }
    }
}

/// Parameters for enumerator mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationRequest {
    /// The word candidates are compared against. Opaque beyond
    /// character-level comparison.
    pub reference: String,
    /// Size of the consonant alphabet to draw candidates from.
    pub consonant_types: u32,
    /// Size of the vowel alphabet to draw candidates from.
    pub vowel_types: u32,
    /// Number of CV syllables per candidate word.
    pub syllables: u32,
    /// Candidates at Levenshtein distance <= this count as "within".
    pub distance_limit: u32,
}

/// Inclusive range of word lengths considered plausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthWindow {
    pub min: u32,
    pub max: u32,
}

impl LengthWindow {
    /// Widen `base` by `tolerance` in both directions, clamping the lower
    /// edge at zero.
    pub fn around(base: u32, tolerance: u32) -> Self {
        LengthWindow {
            min: base.saturating_sub(tolerance),
            max: base + tolerance,
        }
    }

    /// Iterate the lengths in the window, smallest first.
    pub fn lengths(&self) -> std::ops::RangeInclusive<u32> {
        self.min..=self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inventory_totals_twenty_five() {
        assert_eq!(TypeInventory::default().total(), 25);
    }

    #[test]
    fn window_is_symmetric_around_base() {
        let w = LengthWindow::around(6, 2);
        assert_eq!(w, LengthWindow { min: 4, max: 8 });
        assert_eq!(w.lengths().collect::<Vec<_>>(), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn window_lower_edge_clamps_at_zero() {
        let w = LengthWindow::around(1, 3);
        assert_eq!(w, LengthWindow { min: 0, max: 4 });
        assert!(w.min <= w.max);
    }

    #[test]
    fn zero_tolerance_gives_single_length_window() {
        let w = LengthWindow::around(5, 0);
        assert_eq!(w.lengths().collect::<Vec<_>>(), vec![5]);
    }
}
