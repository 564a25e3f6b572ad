// WASM bindings for the lexspace word-space estimator.
//
// Provides a `WasmWordSpace` class exported via wasm-bindgen that wraps
// the `WordSpace` handle. Result structs are serialized to JavaScript
// values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const space = new WasmWordSpace(20, 5, 50000);
//   space.estimate(3, 2, 2, 1);
//     // => { baseLength: 4, minLength: 3, maxLength: 5, total: 2.5e7 }
//   space.enumerate("kaki", 2, 2, 2, 1);
//     // => { totalGenerated: 16, withinLimit: 5, outsideLimit: 11 }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use lexspace::WordSpace;
use lexspace::params::{EnumerationRequest, TypeInventory, WordSpaceParameters};
use lexspace::{SpaceError, generate::DEFAULT_COMBINATION_LIMIT};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a space-size estimate.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsEstimate {
    base_length: u32,
    min_length: u32,
    max_length: u32,
    total: f64,
}

/// Serializable representation of a distance report.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsReport {
    total_generated: u64,
    within_limit: u64,
    outside_limit: u64,
}

fn space_error_to_js(e: SpaceError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmWordSpace
// ============================================================================

/// Word-space estimator for WebAssembly.
///
/// Wraps both computation modes: order-of-magnitude estimation of the
/// word space and exact enumeration with edit-distance classification.
#[wasm_bindgen]
pub struct WasmWordSpace {
    space: WordSpace,
}

#[wasm_bindgen]
impl WasmWordSpace {
    /// Create a new WasmWordSpace.
    ///
    /// - `consonant_types` / `vowel_types`: assumed phoneme inventory for
    ///   estimation (pass `20` / `5` for the defaults)
    /// - `combination_limit`: optional enumeration safety limit
    ///   (default 50000)
    #[wasm_bindgen(constructor)]
    pub fn new(
        consonant_types: u32,
        vowel_types: u32,
        combination_limit: Option<u32>,
    ) -> WasmWordSpace {
        let inventory = TypeInventory {
            consonant_types,
            vowel_types,
        };
        let limit = combination_limit.map_or(DEFAULT_COMBINATION_LIMIT, u64::from);
        WasmWordSpace {
            space: WordSpace::new(inventory, limit),
        }
    }

    /// Estimate the word-space size without generating words.
    ///
    /// Returns an object with fields `baseLength`, `minLength`,
    /// `maxLength`, and `total`. `total` is the raw sum; format it (e.g.
    /// `toExponential(2)`) on the JS side.
    pub fn estimate(
        &self,
        consonants: u32,
        vowels: u32,
        syllables: u32,
        tolerance: u32,
    ) -> Result<JsValue, JsError> {
        let params = WordSpaceParameters {
            consonants,
            vowels,
            syllables,
            tolerance,
        };
        let est = self.space.estimate(&params).map_err(space_error_to_js)?;
        let dto = JsEstimate {
            base_length: est.base_length,
            min_length: est.window.min,
            max_length: est.window.max,
            total: est.total,
        };
        serde_wasm_bindgen::to_value(&dto).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Enumerate every CV-syllable word and classify it against
    /// `reference`.
    ///
    /// Returns an object with fields `totalGenerated`, `withinLimit`, and
    /// `outsideLimit`, or throws when inputs are invalid or the
    /// combination limit would be exceeded.
    pub fn enumerate(
        &self,
        reference: &str,
        consonant_types: u32,
        vowel_types: u32,
        syllables: u32,
        distance_limit: u32,
    ) -> Result<JsValue, JsError> {
        let request = EnumerationRequest {
            reference: reference.to_string(),
            consonant_types,
            vowel_types,
            syllables,
            distance_limit,
        };
        let report = self.space.enumerate(&request).map_err(space_error_to_js)?;
        let dto = JsReport {
            total_generated: report.total_generated,
            within_limit: report.within_limit,
            outside_limit: report.outside_limit,
        };
        serde_wasm_bindgen::to_value(&dto).map_err(|e| JsError::new(&e.to_string()))
    }
}
