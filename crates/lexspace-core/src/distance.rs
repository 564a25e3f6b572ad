// Levenshtein edit distance over chars.

/// Compute the Levenshtein distance between `a` and `b`.
///
/// The distance is the minimum number of single-character insertions,
/// deletions, and substitutions needed to transform one string into the
/// other. Characters are compared by exact equality; no case folding or
/// normalization is applied.
///
/// Runs in `O(|a| * |b|)` time with two rolling rows, so space is
/// proportional to the shorter string.
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Keep the row length proportional to the shorter string.
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let cost = if lc == sc { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_distance_zero() {
        assert_eq!(edit_distance("kala", "kala"), 0);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn empty_against_nonempty_is_length() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
    }

    #[test]
    fn kitten_to_sitting_is_three() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn single_substitution() {
        assert_eq!(edit_distance("kala", "kalu"), 1);
    }

    #[test]
    fn single_insertion_and_deletion() {
        assert_eq!(edit_distance("kala", "kalla"), 1);
        assert_eq!(edit_distance("kalla", "kala"), 1);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            ("kitten", "sitting"),
            ("koira", "kissa"),
            ("", "tuli"),
            ("saun", "sauna"),
        ];
        for (a, b) in pairs {
            assert_eq!(edit_distance(a, b), edit_distance(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn distance_bounded_below_by_length_difference() {
        let pairs = [("ka", "kalastaja"), ("sauna", "s"), ("tuli", "tulitikku")];
        for (a, b) in pairs {
            let diff = a.chars().count().abs_diff(b.chars().count());
            assert!(edit_distance(a, b) >= diff, "{a} vs {b}");
        }
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(edit_distance("Kala", "kala"), 1);
    }

    #[test]
    fn multibyte_chars_count_as_single_symbols() {
        // ä/ö are multi-byte in UTF-8 but one edit each.
        assert_eq!(edit_distance("saankoe", "s\u{00E4}\u{00E4}nk\u{00F6}e"), 3);
        assert_eq!(edit_distance("", "\u{00E4}\u{00F6}"), 2);
    }

    #[test]
    fn disjoint_alphabets_need_full_rewrite() {
        assert_eq!(edit_distance("aaaa", "bbbb"), 4);
    }
}
