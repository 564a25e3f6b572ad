// lexspace-estimate: Estimate the size of a constructed-language word
// space.
//
// Derives a heuristic word length from the consonant, vowel, and syllable
// counts, widens it by the tolerance into a window of plausible lengths,
// and sums typeCount ^ length over the window. No words are generated.
//
// Usage:
//   lexspace-estimate -c N -v N -s N -t N [OPTIONS]
//
// Options:
//   -c, --consonants N        Consonant count of the hypothetical word
//   -v, --vowels N            Vowel count of the hypothetical word
//   -s, --syllables N         Syllable count (at least 1)
//   -t, --tolerance N         Length tolerance (edit-distance budget)
//   --consonant-types N       Distinct consonant types (default 20)
//   --vowel-types N           Distinct vowel types (default 5)
//   -h, --help                Print help

use lexspace::WordSpace;
use lexspace::generate::DEFAULT_COMBINATION_LIMIT;
use lexspace::params::{TypeInventory, WordSpaceParameters};

fn print_help() {
    println!("lexspace-estimate: Estimate the size of a constructed-language word space.");
    println!();
    println!("Usage: lexspace-estimate -c N -v N -s N -t N [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --consonants N     Consonant count of the hypothetical word");
    println!("  -v, --vowels N         Vowel count of the hypothetical word");
    println!("  -s, --syllables N      Syllable count (at least 1)");
    println!("  -t, --tolerance N      Length tolerance (edit-distance budget)");
    println!("  --consonant-types N    Distinct consonant types (default 20)");
    println!("  --vowel-types N        Distinct vowel types (default 5)");
    println!("  -h, --help             Print this help");
}

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if lexspace_cli::wants_help(&args) {
        print_help();
        return;
    }

    let params = WordSpaceParameters {
        consonants: lexspace_cli::require_count(&mut args, "--consonants", "-c"),
        vowels: lexspace_cli::require_count(&mut args, "--vowels", "-v"),
        syllables: lexspace_cli::require_count(&mut args, "--syllables", "-s"),
        tolerance: lexspace_cli::require_count(&mut args, "--tolerance", "-t"),
    };

    let mut inventory = TypeInventory::default();
    if let Some(n) = lexspace_cli::optional_count(&mut args, "--consonant-types", "--ct") {
        inventory.consonant_types = n;
    }
    if let Some(n) = lexspace_cli::optional_count(&mut args, "--vowel-types", "--vt") {
        inventory.vowel_types = n;
    }

    if let Some(unexpected) = args.first() {
        lexspace_cli::fatal(&format!("unexpected argument: {unexpected}"));
    }

    let space = WordSpace::new(inventory, DEFAULT_COMBINATION_LIMIT);
    let estimate = space
        .estimate(&params)
        .unwrap_or_else(|e| lexspace_cli::fatal(&e.to_string()));

    println!("estimated length: {}", estimate.base_length);
    println!(
        "length window:    {}..={}",
        estimate.window.min, estimate.window.max
    );
    println!("possible words:   {:.2e}", estimate.total);
}
