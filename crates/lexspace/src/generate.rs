// Exhaustive CV-word enumeration behind a combinatorial guard.
//
// The candidate space is (|C| * |V|) ^ syllables, exponential in the
// syllable count, so the expected total is checked against a limit before
// any word is built. A refusal is total: the caller gets the expected
// count and no words, never a truncated list.

use lexspace_core::Alphabet;

use crate::SpaceError;

/// Default ceiling on the number of words [`generate`] will enumerate.
pub const DEFAULT_COMBINATION_LIMIT: u64 = 50_000;

/// Number of words a full enumeration would produce, or `None` if the
/// count does not fit in 128 bits (which exceeds any practical limit).
pub fn expected_word_count(per_syllable: u64, syllables: u32) -> Option<u128> {
    u128::from(per_syllable).checked_pow(syllables)
}

/// Enumerate every word of exactly `syllables` consonant-vowel syllables.
///
/// Each word is built by choosing one consonant and one vowel per
/// syllable position, cross-producting across all positions. Enumeration
/// order is lexicographic by alphabet index with the first syllable
/// varying slowest, which keeps the output reproducible.
///
/// Returns an empty vec when either alphabet is empty, and
/// [`SpaceError::CombinationLimitExceeded`] when the expected total is
/// over `limit`. On success the result holds exactly the expected number
/// of words.
pub fn generate(
    consonants: &Alphabet,
    vowels: &Alphabet,
    syllables: u32,
    limit: u64,
) -> Result<Vec<String>, SpaceError> {
    let per_syllable = (consonants.len() * vowels.len()) as u64;
    if per_syllable == 0 {
        return Ok(Vec::new());
    }

    // Guard before any generation work.
    let expected = expected_word_count(per_syllable, syllables);
    let within_limit = expected.is_some_and(|n| n <= u128::from(limit));
    if !within_limit {
        return Err(SpaceError::CombinationLimitExceeded {
            expected: expected.unwrap_or(u128::MAX),
            limit,
        });
    }
    let expected = expected.unwrap_or(u128::MAX) as usize;

    // Odometer over alternating consonant/vowel digits, one pair per
    // syllable, most significant digit first. Iterative on purpose: the
    // call stack must not grow with the syllable count.
    let syllables = syllables as usize;
    let mut digits = vec![0usize; 2 * syllables];
    let radix = |position: usize| {
        if position % 2 == 0 {
            consonants.len()
        } else {
            vowels.len()
        }
    };

    let mut words = Vec::with_capacity(expected);
    loop {
        let mut word = String::with_capacity(2 * syllables);
        for (position, &digit) in digits.iter().enumerate() {
            let symbol = if position % 2 == 0 {
                consonants.symbol(digit)
            } else {
                vowels.symbol(digit)
            };
            word.push(symbol);
        }
        words.push(word);

        // Advance the least significant digit, carrying leftward.
        let mut position = digits.len();
        loop {
            if position == 0 {
                return Ok(words);
            }
            position -= 1;
            digits[position] += 1;
            if digits[position] < radix(position) {
                break;
            }
            digits[position] = 0;
        }
    }
}
