// Distance classification of generated candidates against a reference
// word.

use lexspace_core::edit_distance;

/// Counts of candidates inside and outside the distance limit.
///
/// Invariant: `within_limit + outside_limit == total_generated`. Held
/// exactly because every candidate is classified; there is no early exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DistanceReport {
    pub total_generated: u64,
    pub within_limit: u64,
    pub outside_limit: u64,
}

/// Classify every candidate by its edit distance to `reference`.
///
/// Candidates at distance `<= limit` count as within. Pure aggregation;
/// the candidate list is consumed in order and in full.
pub fn partition(candidates: &[String], reference: &str, limit: u32) -> DistanceReport {
    let mut report = DistanceReport {
        total_generated: candidates.len() as u64,
        ..DistanceReport::default()
    };

    for candidate in candidates {
        if edit_distance(reference, candidate) <= limit as usize {
            report.within_limit += 1;
        } else {
            report.outside_limit += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_always_sum_to_total() {
        let candidates = words(&["kaka", "kaki", "sasa", "sisi"]);
        for limit in 0..5 {
            let report = partition(&candidates, "kaki", limit);
            assert_eq!(
                report.within_limit + report.outside_limit,
                report.total_generated
            );
        }
    }

    #[test]
    fn limit_zero_keeps_only_exact_matches() {
        let candidates = words(&["kaka", "kaki", "sasa"]);
        let report = partition(&candidates, "kaki", 0);
        assert_eq!(report.within_limit, 1);
        assert_eq!(report.outside_limit, 2);
    }

    #[test]
    fn generous_limit_keeps_everything() {
        let candidates = words(&["kaka", "kaki", "sasa", "sisi"]);
        let report = partition(&candidates, "kaki", 4);
        assert_eq!(report.within_limit, 4);
        assert_eq!(report.outside_limit, 0);
    }

    #[test]
    fn empty_candidate_list_yields_all_zero_report() {
        let report = partition(&[], "kaki", 2);
        assert_eq!(report, DistanceReport::default());
    }

    #[test]
    fn reference_outside_candidate_alphabet_still_classifies() {
        let candidates = words(&["kaka", "sasa"]);
        // Distance from "xyz" to any 4-char candidate is 4.
        let report = partition(&candidates, "xyz", 3);
        assert_eq!(report.within_limit, 0);
        assert_eq!(report.outside_limit, 2);
    }

    #[test]
    fn boundary_distance_counts_as_within() {
        // edit_distance("kaka", "kaki") == 1.
        let report = partition(&words(&["kaki"]), "kaka", 1);
        assert_eq!(report.within_limit, 1);
    }
}
