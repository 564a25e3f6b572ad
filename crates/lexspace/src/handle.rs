// WordSpace: top-level integration point for both computation modes.
//
// Owns the configuration (type inventory, combination limit) and performs
// all fail-fast input validation, so the computation modules below it can
// assume well-formed inputs. Callers -- CLI, wasm, tests -- go through
// this and nothing else.

use lexspace_core::Alphabet;

use crate::SpaceError;
use crate::estimate::{SpaceEstimate, estimate_space_size};
use crate::generate::{DEFAULT_COMBINATION_LIMIT, generate};
use crate::params::{EnumerationRequest, TypeInventory, WordSpaceParameters};
use crate::partition::{DistanceReport, partition};

/// Configured entry point for word-space calculations.
///
/// Each method is one atomic, synchronous computation: validate, compute,
/// return. No state survives a call, so a single handle can serve any
/// number of independent calculations.
#[derive(Debug, Clone)]
pub struct WordSpace {
    inventory: TypeInventory,
    combination_limit: u64,
}

impl Default for WordSpace {
    fn default() -> Self {
        WordSpace::new(TypeInventory::default(), DEFAULT_COMBINATION_LIMIT)
    }
}

impl WordSpace {
    /// Create a handle with an explicit inventory and enumeration limit.
    pub fn new(inventory: TypeInventory, combination_limit: u64) -> Self {
        WordSpace {
            inventory,
            combination_limit,
        }
    }

    pub fn inventory(&self) -> TypeInventory {
        self.inventory
    }

    pub fn combination_limit(&self) -> u64 {
        self.combination_limit
    }

    /// Estimator mode: order-of-magnitude count of plausible-length
    /// strings. Generates nothing.
    pub fn estimate(&self, params: &WordSpaceParameters) -> Result<SpaceEstimate, SpaceError> {
        if params.syllables == 0 {
            return Err(SpaceError::InvalidParameter {
                name: "syllables",
                reason: "must be at least 1",
            });
        }
        Ok(estimate_space_size(params, &self.inventory))
    }

    /// Enumerator mode: generate the full candidate set and classify every
    /// word against the reference.
    ///
    /// Fails fast on invalid inputs; the combinatorial guard refuses
    /// oversized enumerations with [`SpaceError::CombinationLimitExceeded`]
    /// before any word is built.
    pub fn enumerate(&self, request: &EnumerationRequest) -> Result<DistanceReport, SpaceError> {
        if request.reference.trim().is_empty() {
            return Err(SpaceError::EmptyReference);
        }
        if request.syllables == 0 {
            return Err(SpaceError::InvalidParameter {
                name: "syllables",
                reason: "must be at least 1",
            });
        }
        if request.consonant_types == 0 {
            return Err(SpaceError::InvalidParameter {
                name: "consonant_types",
                reason: "must be at least 1",
            });
        }
        if request.vowel_types == 0 {
            return Err(SpaceError::InvalidParameter {
                name: "vowel_types",
                reason: "must be at least 1",
            });
        }

        let consonants = Alphabet::consonants(request.consonant_types as usize)?;
        let vowels = Alphabet::vowels(request.vowel_types as usize)?;

        let candidates = generate(
            &consonants,
            &vowels,
            request.syllables,
            self.combination_limit,
        )?;
        Ok(partition(
            &candidates,
            &request.reference,
            request.distance_limit,
        ))
    }
}
