// lexspace-enumerate: Enumerate CV-syllable words and classify them by
// edit distance from a reference word.
//
// Generates every word of exactly S consonant-vowel syllables over
// alphabets of the given sizes, computes the Levenshtein distance of each
// to the reference word, and reports how many fall within and outside the
// distance limit. Enumeration is refused (not truncated) when the
// candidate space exceeds the combination limit.
//
// Usage:
//   lexspace-enumerate WORD -c N -v N -s N -d N [OPTIONS]
//
// Options:
//   -c, --consonant-types N   Consonant alphabet size (1-20)
//   -v, --vowel-types N       Vowel alphabet size (1-5)
//   -s, --syllables N         Syllables per candidate word (at least 1)
//   -d, --distance N          Distance limit for "within" classification
//   --limit N                 Combination safety limit (default 50000)
//   -h, --help                Print help

use lexspace::generate::DEFAULT_COMBINATION_LIMIT;
use lexspace::params::{EnumerationRequest, TypeInventory};
use lexspace::{SpaceError, WordSpace};

fn print_help() {
    println!("lexspace-enumerate: Classify CV-syllable words by edit distance from WORD.");
    println!();
    println!("Usage: lexspace-enumerate WORD -c N -v N -s N -d N [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --consonant-types N   Consonant alphabet size (1-20)");
    println!("  -v, --vowel-types N       Vowel alphabet size (1-5)");
    println!("  -s, --syllables N         Syllables per candidate word (at least 1)");
    println!("  -d, --distance N          Distance limit for \"within\" classification");
    println!("  --limit N                 Combination safety limit (default 50000)");
    println!("  -h, --help                Print this help");
}

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if lexspace_cli::wants_help(&args) {
        print_help();
        return;
    }

    let consonant_types = lexspace_cli::require_count(&mut args, "--consonant-types", "-c");
    let vowel_types = lexspace_cli::require_count(&mut args, "--vowel-types", "-v");
    let syllables = lexspace_cli::require_count(&mut args, "--syllables", "-s");
    let distance_limit = lexspace_cli::require_count(&mut args, "--distance", "-d");
    let combination_limit = lexspace_cli::optional_count(&mut args, "--limit", "--limit")
        .map_or(DEFAULT_COMBINATION_LIMIT, u64::from);

    let mut positional = args.into_iter();
    let reference = positional
        .next()
        .unwrap_or_else(|| lexspace_cli::fatal("missing reference WORD"));
    if let Some(unexpected) = positional.next() {
        lexspace_cli::fatal(&format!("unexpected argument: {unexpected}"));
    }

    let request = EnumerationRequest {
        reference,
        consonant_types,
        vowel_types,
        syllables,
        distance_limit,
    };

    let space = WordSpace::new(TypeInventory::default(), combination_limit);
    match space.enumerate(&request) {
        Ok(report) => {
            println!("generated: {}", report.total_generated);
            println!(
                "within distance {}: {}",
                request.distance_limit, report.within_limit
            );
            println!("outside:   {}", report.outside_limit);
        }
        Err(SpaceError::CombinationLimitExceeded { expected, limit }) => {
            eprintln!(
                "refused: {expected} combinations would exceed the limit of {limit}"
            );
            std::process::exit(2);
        }
        Err(e) => lexspace_cli::fatal(&e.to_string()),
    }
}
