// Fixed symbol inventories and alphabets drawn from them.
//
// Only the cardinality of an alphabet matters for counting, but generated
// words must consist of concrete, distinct symbols so that edit distances
// against a real reference word are meaningful. Alphabets are therefore
// always the first N symbols of a fixed inventory, which keeps generation
// deterministic and reproducible.

/// Consonant inventory, ordered by rough cross-linguistic frequency.
///
/// Twenty symbols, matching the assumed phoneme inventory behind the
/// estimator's default type counts.
pub const CONSONANT_INVENTORY: &[char] = &[
    'k', 's', 't', 'n', 'h', 'm', 'y', 'r', 'w', 'g', 'z', 'd', 'b', 'p', 'c', 'j', 'f', 'l', 'v',
    'q',
];

/// Vowel inventory: the five cardinal vowels.
pub const VOWEL_INVENTORY: &[char] = &['a', 'i', 'u', 'e', 'o'];

/// Which symbol class an alphabet draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    Consonant,
    Vowel,
}

impl SymbolClass {
    fn inventory(self) -> &'static [char] {
        match self {
            SymbolClass::Consonant => CONSONANT_INVENTORY,
            SymbolClass::Vowel => VOWEL_INVENTORY,
        }
    }

    fn name(self) -> &'static str {
        match self {
            SymbolClass::Consonant => "consonant",
            SymbolClass::Vowel => "vowel",
        }
    }
}

/// Error type for alphabet construction.
#[derive(Debug, thiserror::Error)]
pub enum AlphabetError {
    /// More symbols were requested than the fixed inventory holds.
    #[error("{class} inventory has {available} symbols, {requested} requested")]
    InventoryExhausted {
        class: &'static str,
        requested: usize,
        available: usize,
    },
}

/// An ordered sequence of distinct symbols from one symbol class.
///
/// An alphabet of size N is always the first N symbols of the class
/// inventory. Size 0 is valid and produces no words when used for
/// generation.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: &'static [char],
}

impl Alphabet {
    /// Take the first `size` symbols of the inventory for `class`.
    pub fn new(class: SymbolClass, size: usize) -> Result<Self, AlphabetError> {
        let inventory = class.inventory();
        if size > inventory.len() {
            return Err(AlphabetError::InventoryExhausted {
                class: class.name(),
                requested: size,
                available: inventory.len(),
            });
        }
        Ok(Alphabet {
            symbols: &inventory[..size],
        })
    }

    /// Consonant alphabet of the given size.
    pub fn consonants(size: usize) -> Result<Self, AlphabetError> {
        Alphabet::new(SymbolClass::Consonant, size)
    }

    /// Vowel alphabet of the given size.
    pub fn vowels(size: usize) -> Result<Self, AlphabetError> {
        Alphabet::new(SymbolClass::Vowel, size)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`. Panics if out of range, like slice indexing.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    pub fn symbols(&self) -> &[char] {
        self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventories_hold_distinct_symbols() {
        for inventory in [CONSONANT_INVENTORY, VOWEL_INVENTORY] {
            let mut seen = std::collections::HashSet::new();
            for &c in inventory {
                assert!(seen.insert(c), "duplicate symbol {c:?}");
            }
        }
    }

    #[test]
    fn classes_do_not_overlap() {
        for &v in VOWEL_INVENTORY {
            assert!(!CONSONANT_INVENTORY.contains(&v), "{v:?} in both classes");
        }
    }

    #[test]
    fn alphabet_is_inventory_prefix() {
        let a = Alphabet::consonants(3).unwrap();
        assert_eq!(a.symbols(), &['k', 's', 't']);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn zero_size_alphabet_is_valid_and_empty() {
        let a = Alphabet::vowels(0).unwrap();
        assert!(a.is_empty());
    }

    #[test]
    fn full_inventory_is_available() {
        assert_eq!(Alphabet::consonants(20).unwrap().len(), 20);
        assert_eq!(Alphabet::vowels(5).unwrap().len(), 5);
    }

    #[test]
    fn oversized_request_is_rejected() {
        let err = Alphabet::vowels(6).unwrap_err();
        match err {
            AlphabetError::InventoryExhausted {
                class,
                requested,
                available,
            } => {
                assert_eq!(class, "vowel");
                assert_eq!(requested, 6);
                assert_eq!(available, 5);
            }
        }
    }
}
